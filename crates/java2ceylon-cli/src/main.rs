//! java2ceylon - translate Java ASTs into Ceylon source.

mod config;
mod translate;

use clap::Parser;
use config::FileConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use translate::Destination;

#[derive(Parser)]
#[command(name = "java2ceylon", version, about = "Translate Java ASTs into Ceylon source")]
struct Cli {
    /// JSON AST files, use - for stdin
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Directory receiving one <stem>.ceylon per input
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Rewrite zero-argument getFoo()/isFoo() calls to attribute reads
    #[arg(long)]
    convert_getters: bool,

    /// Declare every field, parameter and local as variable
    #[arg(long)]
    declare_mutable: bool,

    /// Extra config file, applied after the global and project ones
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log translation progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = FileConfig::load(&cwd, cli.config.as_deref())?
        .resolve(cli.convert_getters, cli.declare_mutable);
    tracing::debug!(?config, "resolved config");

    let dest = match (&cli.output, &cli.out_dir) {
        (_, Some(dir)) => Destination::Dir(dir.as_path()),
        (Some(file), None) => Destination::File(file.as_path()),
        (None, None) => Destination::Stdout,
    };
    translate::run(&cli.inputs, dest, &config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
