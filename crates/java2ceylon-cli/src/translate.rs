//! Translate command - read JSON ASTs, write Ceylon files.

use anyhow::{Context, Result, bail};
use java2ceylon::{CompilationUnit, Config, JSON_READER, Reader, translate};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where translated units go.
pub enum Destination<'a> {
    /// Standard output, single input only.
    Stdout,
    /// One file, single input only.
    File(&'a Path),
    /// `<dir>/<stem>.ceylon` per input.
    Dir(&'a Path),
}

/// Read one JSON AST, `-` meaning stdin.
pub fn read_unit(input: &Path) -> Result<CompilationUnit> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    JSON_READER
        .read(&content)
        .with_context(|| format!("failed to parse {}", input.display()))
}

/// Path of the Ceylon file for `input` inside `dir`.
pub fn output_path(dir: &Path, input: &Path) -> Result<PathBuf> {
    if input == Path::new("-") {
        bail!("stdin input cannot be written to an output directory");
    }
    let stem = input
        .file_stem()
        .with_context(|| format!("no file name in {}", input.display()))?;
    let mut name = stem.to_os_string();
    name.push(".ceylon");
    Ok(dir.join(name))
}

fn translate_to_file(unit: &CompilationUnit, config: &Config, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    translate(unit, config, &mut out)
        .with_context(|| format!("failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Translate every input to `dest`.
///
/// Several inputs need a directory destination and are translated in
/// parallel; each unit gets its own writer.
pub fn run(inputs: &[PathBuf], dest: Destination<'_>, config: &Config) -> Result<()> {
    match dest {
        Destination::Dir(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            inputs.par_iter().try_for_each(|input| {
                let path = output_path(dir, input)?;
                let unit = read_unit(input)?;
                translate_to_file(&unit, config, &path)?;
                info!(input = %input.display(), output = %path.display(), "translated");
                Ok(())
            })
        }
        Destination::File(path) => {
            let unit = read_unit(single(inputs)?)?;
            translate_to_file(&unit, config, path)
        }
        Destination::Stdout => {
            let unit = read_unit(single(inputs)?)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            translate(&unit, config, &mut out).context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn single(inputs: &[PathBuf]) -> Result<&Path> {
    match inputs {
        [input] => Ok(input.as_path()),
        _ => bail!("{} inputs given; use --out-dir to translate several", inputs.len()),
    }
}
