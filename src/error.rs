//! Custom error types for tagterm.
//!
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Exit codes for tagterm.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Menu specification rejected before the loop started.
    pub const INVALID_MENU: i32 = 2;
    /// Standard input closed while waiting for a line.
    pub const INPUT_CLOSED: i32 = 3;
    /// Attempt limit reached without a valid selection.
    pub const ATTEMPTS_EXHAUSTED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Main error type for tagterm.
#[derive(Error, Debug)]
pub enum TagtermError {
    /// A menu was asked to run with no options.
    #[error("Menu '{title}' has no options\n\nTip: Pass at least one option to choose from.")]
    EmptyMenu { title: String },

    /// A style tag name that breaks the uppercase rule.
    #[error("Invalid style tag '{tag}': tag names may only contain uppercase letters, digits and '_'")]
    InvalidTagName { tag: String },

    /// A style override refers to something that is neither a tag nor SGR parameters.
    #[error("Unknown style component '{component}' in style '{tag}'")]
    UnknownStyleComponent { tag: String, component: String },

    /// Same as above, with close matches from the registry.
    #[error("Unknown style component '{component}' in style '{tag}'\n\nDid you mean: {suggestions}?\n\nRun 'tagterm tags' to see all registered tags.")]
    UnknownStyleComponentWithSuggestions {
        tag: String,
        component: String,
        suggestions: String,
    },

    /// The input stream ended before a line could be read.
    #[error("Input closed before a selection was made")]
    InputClosed,

    /// The menu gave up after too many rejected inputs.
    #[error("No valid selection after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TagtermError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagtermError::EmptyMenu { .. } => exit_code::INVALID_MENU,
            TagtermError::InvalidTagName { .. } => exit_code::INVALID_CONFIG,
            TagtermError::UnknownStyleComponent { .. } => exit_code::INVALID_CONFIG,
            TagtermError::UnknownStyleComponentWithSuggestions { .. } => {
                exit_code::INVALID_CONFIG
            }
            TagtermError::InputClosed => exit_code::INPUT_CLOSED,
            TagtermError::AttemptsExhausted { .. } => exit_code::ATTEMPTS_EXHAUSTED,
            TagtermError::ConfigError { .. } => exit_code::INVALID_CONFIG,
            TagtermError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Create an unknown component error with suggestions based on registered tags.
    pub fn unknown_component_with_suggestions(tag: &str, component: &str, known: &[&str]) -> Self {
        let suggestions = find_similar_tags(component, known);
        if suggestions.is_empty() {
            TagtermError::UnknownStyleComponent {
                tag: tag.to_string(),
                component: component.to_string(),
            }
        } else {
            TagtermError::UnknownStyleComponentWithSuggestions {
                tag: tag.to_string(),
                component: component.to_string(),
                suggestions: suggestions.join(", "),
            }
        }
    }
}

/// Find similar tag names using simple string distance.
fn find_similar_tags(name: &str, tags: &[&str]) -> Vec<String> {
    let name_upper = name.to_uppercase();
    let mut matches: Vec<(String, usize)> = tags
        .iter()
        .filter_map(|&t| {
            let dist = simple_distance(&name_upper, t);
            // Close spelling, or the user typed the lowercase form
            if dist <= 2 || t == name_upper {
                Some((t.to_string(), dist))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|(a, da), (b, db)| da.cmp(db).then_with(|| a.cmp(b)));

    matches
        .into_iter()
        .take(3)
        .map(|(t, _)| format!("'{}'", t))
        .collect()
}

/// Levenshtein distance over chars.
fn simple_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    let mut matrix = vec![vec![0; len_b + 1]; len_a + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(len_a + 1) {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate().take(len_b + 1) {
        *cell = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len_a][len_b]
}

/// Result type alias for tagterm operations.
pub type Result<T> = std::result::Result<T, TagtermError>;
