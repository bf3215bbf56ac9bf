//! JSON reader.
//!
//! The parsing front end serializes its tree with the serde encoding of
//! [`crate::ast`]: externally tagged enums, snake_case variant names.

use crate::ast::CompilationUnit;
use crate::traits::{ReadError, Reader};

/// Static instance of the JSON reader.
pub static JSON_READER: JsonReader = JsonReader;

/// Reads a JSON-encoded [`CompilationUnit`].
pub struct JsonReader;

impl Reader for JsonReader {
    fn language(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn read(&self, source: &str) -> Result<CompilationUnit, ReadError> {
        read_json(source)
    }
}

/// Parse a JSON-encoded compilation unit.
pub fn read_json(source: &str) -> Result<CompilationUnit, ReadError> {
    if source.trim().is_empty() {
        return Err(ReadError::Unsupported("empty input".into()));
    }
    serde_json::from_str(source).map_err(|err| ReadError::Parse(err.to_string()))
}
