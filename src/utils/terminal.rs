//! Terminal utilities.

use std::io::{self, IsTerminal};

use crate::config::ColorMode;

/// Environment variable that disables colour when set to anything non-empty.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Check whether stdout is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Check whether `NO_COLOR` asks for colourless output.
pub fn no_color_requested() -> bool {
    std::env::var_os(NO_COLOR_VAR).is_some_and(|v| !v.is_empty())
}

/// Decide whether to emit styling.
///
/// `Auto` styles only when writing to a terminal and `NO_COLOR` is not set.
pub fn colors_enabled(mode: ColorMode, is_terminal: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !no_color,
    }
}

/// Screen clearing only makes sense on a terminal.
pub fn should_clear(configured: bool, is_terminal: bool) -> bool {
    configured && is_terminal
}
