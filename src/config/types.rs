//! Configuration type definitions.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::menu::DEFAULT_PROMPT;
use crate::style::StyleRegistry;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}

/// Appearance configuration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Colour mode.
    #[serde(default)]
    pub color: ColorMode,
}

/// Menu behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Prompt shown under the options.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Clear the screen before each frame.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Rejected replies before giving up (0 = unlimited).
    #[serde(default)]
    pub max_attempts: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            clear_screen: true,
            max_attempts: 0,
        }
    }
}

impl MenuConfig {
    /// The attempt limit as an option.
    pub fn attempt_limit(&self) -> Option<usize> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Appearance settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
    /// Menu settings.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Style overrides: tag name -> components (tags or SGR parameters).
    #[serde(default)]
    pub styles: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge one config file over this config. Only keys the file sets win.
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(color) = layer.appearance.color {
            self.appearance.color = color;
        }

        if let Some(prompt) = layer.menu.prompt {
            self.menu.prompt = prompt;
        }
        if let Some(clear_screen) = layer.menu.clear_screen {
            self.menu.clear_screen = clear_screen;
        }
        if let Some(max_attempts) = layer.menu.max_attempts {
            self.menu.max_attempts = max_attempts;
        }

        // Styles - merge maps, later files win per tag
        self.styles.extend(layer.styles);
    }

    /// Build the style registry this config describes.
    ///
    /// With colour off the plain registry is returned and overrides are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a style override is invalid.
    pub fn registry(&self, color: bool) -> crate::Result<StyleRegistry> {
        if !color {
            return Ok(StyleRegistry::plain());
        }
        let mut registry = StyleRegistry::standard();
        registry.apply_overrides(&self.styles)?;
        Ok(registry)
    }
}

/// One config file as written: every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub appearance: AppearanceLayer,
    #[serde(default)]
    pub menu: MenuLayer,
    #[serde(default)]
    pub styles: BTreeMap<String, Vec<String>>,
}

/// `[appearance]` as written in a file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppearanceLayer {
    #[serde(default)]
    pub color: Option<ColorMode>,
}

/// `[menu]` as written in a file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuLayer {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub clear_screen: Option<bool>,
    #[serde(default)]
    pub max_attempts: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
