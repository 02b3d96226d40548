//! tagterm - tagged terminal text
//!
//! Renders inline markup such as `<GOOD_TEXT>done</GOOD_TEXT>` into ANSI
//! styling, and runs numbered menus that keep asking until the reply is a
//! valid choice.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`console`] - Styled print / prompt over any reader and writer
//! - [`error`] - Error types and result helpers
//! - [`markup`] - Markup parsing and rendering
//! - [`menu`] - Validated numbered menus
//! - [`style`] - Tag to style-code registry
//! - [`utils`] - Path and terminal utilities
//!
//! # Example
//!
//! ```no_run
//! use tagterm::console::Console;
//! use tagterm::menu::{Menu, MenuSpec};
//! use tagterm::style::StyleRegistry;
//!
//! let mut console = Console::stdio(StyleRegistry::standard());
//! console.print("<INFO_TEXT>welcome</INFO_TEXT>")?;
//!
//! let menu = Menu::new(MenuSpec::new("Sample Menu", ["option 1", "option 2", "exit"]));
//! let selection = menu.select(&mut console)?;
//! console.print(&format!("you chose <DATA>{}</DATA>", selection.label))?;
//! # Ok::<(), tagterm::TagtermError>(())
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Styled console over a reader and a writer.
pub mod console;

/// Error types and result helpers.
pub mod error;

/// Markup parsing and rendering.
pub mod markup;

/// Validated numbered menus.
pub mod menu;

/// Style registry.
pub mod style;

/// Path and terminal utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use console::Console;
pub use error::{Result, TagtermError};
pub use menu::{Menu, MenuSpec, Selection};
pub use style::StyleRegistry;
