//! Input classification and the selection state machine.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use super::frame;
use super::spec::{MenuSpec, Selection};
use crate::console::Console;
use crate::error::{Result, TagtermError};
use crate::markup;

/// Shown when the reply is not an integer.
pub const NON_NUMERIC_WARNING: &str =
    "<BAD>\nyour input is non-numeric. Press </BAD><KEY>ENTER</KEY><BAD> to continue...</BAD>";

/// Shown when the reply is an integer outside `1..=len`.
pub const OUT_OF_RANGE_WARNING: &str =
    "<BAD>\nyour input is out of the menu range. Press </BAD><KEY>ENTER</KEY><BAD> to continue...</BAD>";

/// How a raw reply was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A 1-based index inside the option range.
    Valid(usize),
    /// Not a base-10 integer.
    NonNumeric,
    /// An integer, but not a valid position.
    OutOfRange,
}

impl Verdict {
    /// Warning to acknowledge before the menu is drawn again.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Verdict::Valid(_) => None,
            Verdict::NonNumeric => Some(NON_NUMERIC_WARNING),
            Verdict::OutOfRange => Some(OUT_OF_RANGE_WARNING),
        }
    }
}

/// Judge a raw reply against a menu of `option_count` entries.
///
/// Surrounding whitespace is ignored and an optional `+`/`-` sign is
/// accepted, so `"  2  "` and `"+2"` both select 2. Integers too large to
/// represent are out of range rather than non-numeric.
pub fn classify(input: &str, option_count: usize) -> Verdict {
    match input.trim().parse::<i64>() {
        Ok(value) => match usize::try_from(value) {
            Ok(index) if (1..=option_count).contains(&index) => Verdict::Valid(index),
            _ => Verdict::OutOfRange,
        },
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Verdict::OutOfRange
        }
        Err(_) => Verdict::NonNumeric,
    }
}

/// Where the loop is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for a reply; `attempts` counts rejected replies so far.
    AwaitingInput { attempts: usize },
    /// A valid reply was read.
    Terminated(Selection),
}

/// Drives a menu one reply at a time until a valid selection is made.
///
/// The machine does not look at whether the menu is empty. With no options
/// every reply is out of range, so it keeps reading one line per step until
/// the attempt limit or the end of input stops it.
#[derive(Debug)]
pub struct SelectionLoop<'a> {
    spec: &'a MenuSpec,
    state: MenuState,
    max_attempts: Option<usize>,
}

impl<'a> SelectionLoop<'a> {
    /// Start awaiting input, with no attempt limit.
    pub fn new(spec: &'a MenuSpec) -> Self {
        Self {
            spec,
            state: MenuState::AwaitingInput { attempts: 0 },
            max_attempts: None,
        }
    }

    /// Give up after this many rejected replies. `None` never gives up.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.filter(|&n| n > 0);
        self
    }

    /// Current state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Draw the menu once, read one reply, and advance.
    ///
    /// Invalid replies show a warning and wait for an acknowledgement line
    /// before returning. Once terminated, further steps do nothing.
    ///
    /// # Errors
    ///
    /// [`TagtermError::InputClosed`] at end of input,
    /// [`TagtermError::AttemptsExhausted`] when the limit is hit (the warning for
    /// that last reply is still printed), or I/O errors.
    pub fn step<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<&MenuState> {
        let attempts = match self.state {
            MenuState::Terminated(_) => return Ok(&self.state),
            MenuState::AwaitingInput { attempts } => attempts,
        };

        let reply = frame::show(console, self.spec)?;
        console.clear()?;

        let verdict = classify(&reply, self.spec.len());
        log::debug!(
            "menu '{}' attempt {}: {:?} -> {:?}",
            markup::strip(self.spec.title()),
            attempts + 1,
            reply,
            verdict
        );

        if let Verdict::Valid(index) = verdict {
            if let Some(label) = self.spec.option(index) {
                self.state = MenuState::Terminated(Selection {
                    index,
                    label: label.to_string(),
                });
                return Ok(&self.state);
            }
        }

        let attempts = attempts + 1;
        self.state = MenuState::AwaitingInput { attempts };

        let warning = verdict.warning().unwrap_or(OUT_OF_RANGE_WARNING);
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            // Explain the last rejection, but do not wait for an acknowledgement
            console.print(warning)?;
            return Err(TagtermError::AttemptsExhausted { attempts });
        }

        console.prompt(warning)?;

        Ok(&self.state)
    }

    /// Step until a selection is made.
    pub fn run<R: BufRead, W: Write>(mut self, console: &mut Console<R, W>) -> Result<Selection> {
        loop {
            if let MenuState::Terminated(selection) = self.step(console)? {
                return Ok(selection.clone());
            }
        }
    }
}
