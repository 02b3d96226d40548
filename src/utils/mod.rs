//! Utility module for tagterm.
//!
//! Config file locations and terminal capability checks.

mod paths;
mod terminal;

pub use paths::{config_dir, global_config_file, local_config_file, LOCAL_CONFIG_NAME};
pub use terminal::{
    colors_enabled, no_color_requested, should_clear, stdout_is_terminal, NO_COLOR_VAR,
};
