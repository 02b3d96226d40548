//! Numbered menus with validated selection.
//!
//! A [`Menu`] draws a title, an optional header and numbered options, then
//! keeps asking until the reply is a valid 1-based index.
//!
//! ```no_run
//! use tagterm::console::Console;
//! use tagterm::menu::{Menu, MenuSpec};
//! use tagterm::style::StyleRegistry;
//!
//! let mut console = Console::stdio(StyleRegistry::standard());
//! let menu = Menu::new(MenuSpec::new("main menu", ["open", "save", "exit"]));
//! let choice = menu.select(&mut console)?;
//! println!("picked {} ({})", choice.label, choice.index);
//! # Ok::<(), tagterm::TagtermError>(())
//! ```

mod frame;
mod machine;
mod spec;

use std::io::{BufRead, Write};

pub use frame::{frame_lines, index_label, option_line, prompt_line, title_line};
pub use machine::{
    classify, MenuState, SelectionLoop, Verdict, NON_NUMERIC_WARNING, OUT_OF_RANGE_WARNING,
};
pub use spec::{MenuSpec, Selection, DEFAULT_PROMPT};

use crate::console::Console;
use crate::error::Result;

/// A menu plus its retry policy.
#[derive(Debug, Clone)]
pub struct Menu {
    spec: MenuSpec,
    max_attempts: Option<usize>,
}

impl Menu {
    /// Menu that retries forever.
    pub fn new(spec: MenuSpec) -> Self {
        Self {
            spec,
            max_attempts: None,
        }
    }

    /// Stop after this many rejected replies (`None` or `Some(0)` for no limit).
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The menu contents.
    pub fn spec(&self) -> &MenuSpec {
        &self.spec
    }

    /// Draw the menu once and return the raw reply, unvalidated.
    pub fn show<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<String> {
        frame::show(console, &self.spec)
    }

    /// Run the validated loop.
    ///
    /// # Errors
    ///
    /// Fails fast with [`TagtermError::EmptyMenu`](crate::TagtermError::EmptyMenu)
    /// before reading anything if there are no options. Otherwise see
    /// [`SelectionLoop::step`].
    pub fn select<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<Selection> {
        self.spec.validate()?;
        SelectionLoop::new(&self.spec)
            .with_max_attempts(self.max_attempts)
            .run(console)
    }
}
