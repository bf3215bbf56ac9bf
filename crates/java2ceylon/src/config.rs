//! Per-run translation options.

use serde::{Deserialize, Serialize};

/// Options that stay fixed for a whole translation run.
///
/// Passed by reference to every translator call; nothing stores it, so
/// independent units can be translated on separate threads with their own
/// (or a shared) `Config`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rewrite zero-argument `getFoo()` / `isFoo()` calls to `foo` attribute reads.
    pub convert_getters: bool,
    /// Declare every field, parameter and local as `variable`.
    pub declare_mutable_by_default: bool,
}

impl Config {
    pub fn new(convert_getters: bool, declare_mutable_by_default: bool) -> Self {
        Self {
            convert_getters,
            declare_mutable_by_default,
        }
    }
}
