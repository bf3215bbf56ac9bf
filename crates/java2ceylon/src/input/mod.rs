//! Input readers - hand a parsed compilation unit over to the translator.

#[cfg(feature = "read-json")]
pub mod json;

#[cfg(feature = "read-json")]
pub use json::{JSON_READER, JsonReader, read_json};
