//! Path utilities.

use std::path::{Path, PathBuf};

/// File name of the per-directory config.
pub const LOCAL_CONFIG_NAME: &str = ".tagtermrc.toml";

/// Get the config directory for tagterm.
///
/// Returns `~/.config/tagterm` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tagterm"))
}

/// Get the global config file path.
///
/// Returns `~/.config/tagterm/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in a directory.
///
/// Looks for `.tagtermrc.toml` in the given directory.
pub fn local_config_file(dir: &Path) -> Option<PathBuf> {
    let config_file = dir.join(LOCAL_CONFIG_NAME);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
