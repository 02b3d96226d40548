//! Menu specification and selection result.

use serde::Serialize;

use crate::error::{Result, TagtermError};

/// Prompt used when none is given.
pub const DEFAULT_PROMPT: &str = "enter selection: ";

/// What a menu shows: a title, optional header, numbered options and a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSpec {
    title: String,
    options: Vec<String>,
    prompt: String,
    header: Option<String>,
}

impl MenuSpec {
    /// Create a menu with the default prompt and no header.
    ///
    /// Options may contain markup. The list should not be empty; see
    /// [`validate`](Self::validate).
    pub fn new<I, S>(title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            options: options.into_iter().map(Into::into).collect(),
            prompt: DEFAULT_PROMPT.to_string(),
            header: None,
        }
    }

    /// Replace the input prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Text shown between the title and the options.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Menu title, may contain markup.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Option labels, in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Prompt shown under the options.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Text shown between the title and the options, if any.
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option label at a 1-based position.
    pub fn option(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Check the menu can ever terminate.
    ///
    /// # Errors
    ///
    /// Returns [`TagtermError::EmptyMenu`] when there are no options.
    pub fn validate(&self) -> Result<()> {
        if self.options.is_empty() {
            return Err(TagtermError::EmptyMenu {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

/// A confirmed choice: 1-based index and the label at that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub index: usize,
    pub label: String,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.index, self.label)
    }
}
