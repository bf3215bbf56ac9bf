//! Configuration files for the java2ceylon CLI.
//!
//! Loads config from, later wins:
//! 1. Global: ~/.config/java2ceylon/config.toml (or $XDG_CONFIG_HOME)
//! 2. Per-project: .java2ceylon/config.toml in the working directory
//! 3. An explicit `--config <FILE>`
//!
//! Command-line flags are applied on top by the caller.
//!
//! Example config.toml:
//! ```toml
//! [translate]
//! convert_getters = true
//! declare_mutable_by_default = false
//! ```

use anyhow::{Context, Result};
use java2ceylon::Config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `[translate]` table. Unset keys leave the lower layer alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    pub convert_getters: Option<bool>,
    pub declare_mutable_by_default: Option<bool>,
}

impl TranslateConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            convert_getters: other.convert_getters.or(self.convert_getters),
            declare_mutable_by_default: other
                .declare_mutable_by_default
                .or(self.declare_mutable_by_default),
        }
    }
}

/// Root of a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub translate: TranslateConfig,
}

impl FileConfig {
    /// Load and merge the global, project and explicit config files.
    ///
    /// Missing global or project files are skipped, and so are malformed
    /// ones (with a warning). An explicit file must exist and parse.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::global_config_path(), root, explicit)
    }

    fn load_layers(global: Option<PathBuf>, root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global) = global.as_deref().and_then(Self::load_optional) {
            config = config.merge(global);
        }

        let project_path = root.join(".java2ceylon").join("config.toml");
        if let Some(project) = Self::load_optional(&project_path) {
            config = config.merge(project);
        }

        if let Some(path) = explicit {
            config = config.merge(Self::load_file(path)?);
        }

        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("java2ceylon").join("config.toml"))
    }

    fn load_optional(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::load_file(path) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(path = %path.display(), "ignoring config file: {err:#}");
                None
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn merge(self, other: Self) -> Self {
        Self {
            translate: self.translate.merge(other.translate),
        }
    }

    /// Resolve into a translation config, with `true` flags winning.
    pub fn resolve(&self, convert_getters: bool, declare_mutable: bool) -> Config {
        Config::new(
            convert_getters || self.translate.convert_getters.unwrap_or(false),
            declare_mutable || self.translate.declare_mutable_by_default.unwrap_or(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_no_files_is_default() {
        let dir = TempDir::new().unwrap();
        let config = FileConfig::load_layers(None, dir.path(), None).unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.resolve(false, false), Config::default());
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        write(
            &dir.path().join(".java2ceylon/config.toml"),
            "[translate]\nconvert_getters = true\n",
        );
        let config = FileConfig::load_layers(None, dir.path(), None).unwrap();
        assert_eq!(config.translate.convert_getters, Some(true));
        assert_eq!(config.translate.declare_mutable_by_default, None);
    }

    #[test]
    fn test_layers_override_in_order() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global/config.toml");
        write(
            &global,
            "[translate]\nconvert_getters = true\ndeclare_mutable_by_default = true\n",
        );
        write(
            &dir.path().join(".java2ceylon/config.toml"),
            "[translate]\nconvert_getters = false\n",
        );
        let explicit = dir.path().join("explicit.toml");
        write(&explicit, "[translate]\ndeclare_mutable_by_default = false\n");

        let config = FileConfig::load_layers(Some(global.clone()), dir.path(), None).unwrap();
        assert_eq!(config.resolve(false, false), Config::new(false, true));

        let config =
            FileConfig::load_layers(Some(global), dir.path(), Some(&explicit)).unwrap();
        assert_eq!(config.resolve(false, false), Config::new(false, false));
    }

    #[test]
    fn test_flags_win() {
        let config = FileConfig {
            translate: TranslateConfig {
                convert_getters: Some(false),
                declare_mutable_by_default: None,
            },
        };
        assert_eq!(config.resolve(true, true), Config::new(true, true));
    }

    #[test]
    fn test_malformed_project_config_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join(".java2ceylon/config.toml"), "[translate\n");
        let config = FileConfig::load_layers(None, dir.path(), None).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(FileConfig::load_layers(None, dir.path(), Some(&missing)).is_err());
    }
}
