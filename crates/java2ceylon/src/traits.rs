//! Boundary with the parsing front end.

use crate::ast::CompilationUnit;

/// Error that can occur when reading a compilation unit.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported input: {0}")]
    Unsupported(String),
}

/// A reader turns some external representation of a Java source file into
/// a [`CompilationUnit`].
pub trait Reader: Send + Sync {
    /// Format identifier (e.g., "json").
    fn language(&self) -> &'static str;

    /// File extensions this reader handles (e.g., &["json"]).
    fn extensions(&self) -> &'static [&'static str];

    /// Read one compilation unit.
    fn read(&self, source: &str) -> Result<CompilationUnit, ReadError>;
}
