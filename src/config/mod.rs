//! Configuration module for tagterm.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `.tagtermrc.toml` in the current directory
//! - User-level `~/.config/tagterm/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{
    AppearanceConfig, AppearanceLayer, ColorMode, Config, ConfigLayer, MenuConfig, MenuLayer,
};
