//! Syntax-directed translation of Java compilation units into Ceylon.
//!
//! `java2ceylon` takes one parsed Java source file and writes Ceylon source
//! text for it. The translation maps syntax, not semantics: nothing is type
//! checked, and the output is a best-effort starting point for a migration.
//!
//! # Architecture
//!
//! ```text
//! Front end               Core                           Output
//! ─────────────    ──────────────────────────────    ──────────────
//! JSON AST    ─┐   ImportTable (once per unit)
//! (reader)     ├─> CompilationUnit ─> decl ─> stmt ─> expr ─> Sink ─> io::Write
//! (future)    ─┘          ▲              TranslationContext
//!                          └──── Config (read-only, every call)
//! ```
//!
//! Rewrites that depend on where a node sits (a cast inside a branch that
//! already proved its type, a `continue` inside a desugared loop, a `break`
//! ending a switch case) ask the [`TranslationContext`] frame stack rather
//! than looking at parent nodes.
//!
//! # Example
//!
//! ```ignore
//! use java2ceylon::{Config, input, translate_to_string};
//!
//! let unit = input::read_json(source)?;
//! let ceylon = translate_to_string(&unit, &Config::default())?;
//! ```
//!
//! Independent units share no mutable state, so callers may translate them
//! in parallel, each with its own output target.

pub mod ast;
pub mod config;
pub mod error;
pub mod imports;
pub mod names;
pub mod traits;

pub mod input;
pub mod output;

use std::io::{self, Write};

// Re-exports: AST
pub use ast::{CompilationUnit, Expr, Member, Stmt, StructureEq, TypeDecl, TypeRef};

// Re-exports: core types
pub use config::Config;
pub use error::{Result, TranslateError};
pub use imports::ImportTable;
pub use output::{CeylonWriter, TranslationContext};

// Re-exports: Traits
pub use traits::{ReadError, Reader};

// Re-exports: Built-in readers
#[cfg(feature = "read-json")]
pub use input::{JSON_READER, JsonReader, read_json};

/// Translate `unit` and write the Ceylon text to `out`.
///
/// A failed write aborts the run; text already written stays written.
pub fn translate<W: Write>(unit: &CompilationUnit, config: &Config, out: W) -> Result<()> {
    let mut writer = CeylonWriter::new(out);
    writer.write_unit(config, unit)?;
    writer.finish()?;
    Ok(())
}

/// Translate `unit` into a `String`.
pub fn translate_to_string(unit: &CompilationUnit, config: &Config) -> Result<String> {
    let mut buf = Vec::new();
    translate(unit, config, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|err| TranslateError::Write(io::Error::new(io::ErrorKind::InvalidData, err)))
}
