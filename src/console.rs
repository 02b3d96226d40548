//! Styled line-oriented console.
//!
//! Wraps an input reader and an output writer and runs everything written
//! through the markup renderer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::{Result, TagtermError};
use crate::markup;
use crate::style::StyleRegistry;

/// Prompt shown by [`Console::pause`].
pub const PAUSE_PROMPT: &str = "press <KEY>ENTER</KEY> to continue...";

/// A console bound to a reader, a writer and a style registry.
pub struct Console<R, W> {
    registry: StyleRegistry,
    input: R,
    output: W,
    clear_screen: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output.
    pub fn stdio(registry: StyleRegistry) -> Self {
        Self::new(registry, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console. Screen clearing starts enabled.
    pub fn new(registry: StyleRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            clear_screen: true,
        }
    }

    /// Enable or disable [`clear`](Self::clear).
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// The registry used for rendering.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Render `text` and write it as a full line.
    pub fn print(&mut self, text: &str) -> Result<()> {
        let styled = markup::render(text, &self.registry);
        writeln!(self.output, "{styled}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Render `text` as a prompt and read one line of input.
    ///
    /// The returned string is exactly what the user typed, minus the line
    /// terminator. It is neither trimmed nor rendered.
    ///
    /// # Errors
    ///
    /// Returns [`TagtermError::InputClosed`] if the input has reached EOF.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        let styled = markup::render(text, &self.registry);
        write!(self.output, "{styled}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Wait for the user to press enter.
    pub fn pause(&mut self) -> Result<()> {
        self.prompt(PAUSE_PROMPT).map(drop)
    }

    /// Clear the screen and home the cursor, if clearing is enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Give back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(TagtermError::InputClosed);
        }
        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }
        // Undecodable bytes become U+FFFD; the menu then sees a non-numeric reply
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
