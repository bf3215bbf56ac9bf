//! Translation errors.

use std::io;

/// Error that aborts the translation of a compilation unit.
///
/// Text already appended to the output before the failure is left as is.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;
