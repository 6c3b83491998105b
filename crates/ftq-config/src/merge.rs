//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::PathBuf;

use crate::{
    Config, IndexSettings, LogSettings, SearchSettings,
    parse::{RawConfig, RawIndexSettings, RawLogSettings, RawSearchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs are given highest precedence first (closest to CWD). For every
/// scalar, the first defined value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config::default();

    // Lowest precedence first so that higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref index) = parsed.config.index {
            apply_raw_index(&mut config.index, index);
        }
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut config.search, search);
        }
        if let Some(ref log) = parsed.config.log {
            apply_raw_log(&mut config.log, log);
        }
    }

    config.config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());
    config
}

/// Applies raw index settings, overwriting any present values.
fn apply_raw_index(result: &mut IndexSettings, raw: &RawIndexSettings) {
    if let Some(ref v) = raw.name {
        result.name = Some(v.clone());
    }
}

/// Applies raw search settings, overwriting any present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.page_size {
        result.page_size = v;
    }
}

/// Applies raw log settings, overwriting any present values.
fn apply_raw_log(result: &mut LogSettings, raw: &RawLogSettings) {
    if let Some(ref v) = raw.level {
        result.level = v.clone();
    }
}
