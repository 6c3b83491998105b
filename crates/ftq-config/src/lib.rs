//! Configuration system for ftq.
//!
//! ftq uses TOML configuration files named `.ftq.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.ftq.toml` files
//! found, then loading `~/.ftq.toml` as the global config with lowest precedence.
//!
//! The one setting compilation cannot do without is the backend index name, exposed through
//! [`Config::elastic_index`].

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawIndexSettings, RawLogSettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};

/// Top-level merged configuration for ftq.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Backend index settings.
    pub index: IndexSettings,
    /// Search defaults.
    pub search: SearchSettings,
    /// Logging defaults.
    pub log: LogSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.ftq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Returns the name of the backend index queries are compiled against.
    ///
    /// Fails with [`ConfigError::NoIndexConfigured`] when no config defines a
    /// non-empty `[index] name`.
    pub fn elastic_index(&self) -> Result<&str, ConfigError> {
        match self.index.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ConfigError::NoIndexConfigured {
                filename: CONFIG_FILENAME,
            }),
        }
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            index: &self.index,
            search: &self.search,
            log: &self.log,
        };
        // Plain strings and integers only; serialization cannot fail.
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// Backend index settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Name of the backend index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Search defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Page size used when a request does not specify one.
    pub page_size: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

/// Logging defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default log filter directive, e.g. `warn` or `ftq_mapping=debug`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: String::from("warn"),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Backend index settings.
    index: &'a IndexSettings,
    /// Search defaults.
    search: &'a SearchSettings,
    /// Logging defaults.
    log: &'a LogSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.index.name.is_none());
        assert_eq!(config.search.page_size, 20);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_elastic_index_missing() {
        let err = Config::default().elastic_index().unwrap_err();
        assert!(matches!(err, ConfigError::NoIndexConfigured { .. }));
        assert!(err.to_string().contains(".ftq.toml"));
    }

    #[test]
    fn test_elastic_index_blank_is_missing() {
        let mut config = Config::default();
        config.index.name = Some("   ".into());
        assert!(config.elastic_index().is_err());
    }

    #[test]
    fn test_elastic_index_present() {
        let mut config = Config::default();
        config.index.name = Some("nextcloud".into());
        assert_eq!(config.elastic_index().unwrap(), "nextcloud");
    }

    #[test]
    fn test_settings_to_toml() {
        let mut config = Config::default();
        config.index.name = Some("nextcloud".into());
        let toml = config.settings_to_toml();

        assert!(toml.contains("[index]"));
        assert!(toml.contains("name = \"nextcloud\""));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("page_size = 20"));
        assert!(toml.contains("[log]"));

        let parsed: toml::Value = toml::from_str(&toml).unwrap();
        assert!(parsed.get("index").is_some());
    }
}
