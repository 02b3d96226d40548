//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::{Config, ConfigLayer};
use crate::utils::local_config_file;

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let layer: ConfigLayer = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    log::debug!("loaded config from {}", path.display());
    Ok(layer)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/tagterm/config.toml` (user-level, lowest priority)
/// 2. `.tagtermrc.toml` in `dir` (directory-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing default files are skipped and broken ones only log a warning.
///
/// # Errors
///
/// Returns an error if the CLI-specified config file cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    // User-level config (lowest priority)
    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            match load_config_from_path(&user_config_path) {
                Ok(user_config) => config.merge(user_config),
                Err(e) => {
                    log::warn!(
                        "Failed to load user config at {}: {:#}",
                        user_config_path.display(),
                        e
                    );
                }
            }
        }
    }

    // Directory-level config
    if let Some(local_config_path) = local_config_file(dir) {
        match load_config_from_path(&local_config_path) {
            Ok(local_config) => config.merge(local_config),
            Err(e) => {
                log::warn!(
                    "Failed to load config at {}: {:#}",
                    local_config_path.display(),
                    e
                );
            }
        }
    }

    // CLI-specified config (highest priority)
    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_config);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# tagterm Configuration File
# Place this file at ~/.config/tagterm/config.toml for global settings
# or .tagtermrc.toml in a directory for settings that apply there

# Appearance settings
[appearance]
# When to emit colour: "auto", "always", "never"
# auto: only when stdout is a terminal and NO_COLOR is unset
color = "auto"

# Menu settings
[menu]
# Prompt shown under the options
prompt = "enter selection: "

# Clear the screen before drawing each frame
clear_screen = true

# Rejected replies before giving up (0 = unlimited)
max_attempts = 0

# Style overrides
# Each entry maps a tag name (uppercase letters, digits, '_') to a list of
# components. A component is a registered tag or raw SGR parameters.
[styles]
# GOOD_TEXT = ["BRIGHT_GREEN", "BOLD"]
# ORANGE = ["38;5;208"]
"#
    .to_string()
}
