//! User configuration read from `~/.wps/config.toml`.
//!
//! ```toml
//! [plural]
//! replace-defaults = false
//!
//! [plural.exceptions]
//! cactus = "cacti"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wps_plural::{ExceptionMap, Pluralizer, ReplaceExceptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plural: PluralConfig,
}

/// The `[plural]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PluralConfig {
    /// Use only `exceptions`, ignoring the built-in irregular plurals.
    pub replace_defaults: bool,
    pub exceptions: ExceptionMap,
}

impl Config {
    /// Loads `config.toml` from [`config_dir`].
    pub fn load() -> Self {
        Self::load_from(config_dir().join("config.toml"))
    }

    /// Loads configuration from an explicit path.
    /// Falls back to defaults with a warning when the file cannot be used.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!(
                        "Loaded config from {:?} ({} plural exceptions)",
                        path,
                        config.plural.exceptions.len()
                    );
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Builds a pluralizer whose exception table reflects the `[plural]` section.
    pub fn pluralizer(&self) -> Pluralizer {
        let exceptions = self.plural.exceptions.clone();
        if self.plural.replace_defaults {
            Pluralizer::with_provider(ReplaceExceptions(exceptions))
        } else {
            Pluralizer::with_provider(exceptions)
        }
    }
}

/// `~/.wps`, resolved from `HOME` then `USERPROFILE`, else `.wps` relative to
/// the working directory.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".wps")
    } else if let Ok(home) = std::env::var("USERPROFILE") {
        Path::new(&home).join(".wps")
    } else {
        PathBuf::from(".wps")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plural_section() {
        let config = Config::parse(
            r#"
[plural]
replace-defaults = true

[plural.exceptions]
Cactus = "cacti"
"#,
        )
        .unwrap();

        assert!(config.plural.replace_defaults);
        assert_eq!(config.plural.exceptions.get("cactus"), Some("cacti"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::parse("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, Config::default());
    }
}
