//! Locating `.ftq.toml` files.
//!
//! A search index is usually configured once per project, so lookup starts in
//! the working directory and climbs towards the filesystem root. The user's
//! `~/.ftq.toml` fills in anything the project leaves unset.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of every ftq configuration file, local or global.
pub const CONFIG_FILENAME: &str = ".ftq.toml";

/// Lists the config files that apply to `cwd`, most specific first.
///
/// Each ancestor of `cwd` contributes its `.ftq.toml` when one exists. A file
/// marked `root = true` ends the climb and shuts out the home-directory file,
/// which otherwise comes last.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops_here = is_root_config(&candidate);
        configs.push(candidate);
        if stops_here {
            return configs;
        }
    }

    if let Some(global) = global_config_path().filter(|path| path.is_file())
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Location of the per-user config, `~/.ftq.toml`.
///
/// `None` when no home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// True when `path` is the per-user config.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
