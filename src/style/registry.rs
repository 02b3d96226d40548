//! The tag-to-code lookup table used by the renderer.

use std::collections::{BTreeMap, HashMap};

use super::codes::{self, STANDARD};
use crate::error::{Result, TagtermError};

/// Immutable mapping from markup tag names to style codes.
///
/// Lookups of unknown tags never fail; they resolve to the empty style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: HashMap<String, String>,
    reset: String,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl StyleRegistry {
    /// The built-in ANSI table.
    pub fn standard() -> Self {
        Self {
            styles: STANDARD
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
            reset: codes::RESET.to_string(),
        }
    }

    /// Same tags as [`standard`](Self::standard), all mapped to nothing.
    ///
    /// Rendering through this registry strips markup and emits no escapes.
    pub fn plain() -> Self {
        Self {
            styles: STANDARD
                .iter()
                .map(|(name, _)| (name.to_string(), String::new()))
                .collect(),
            reset: String::new(),
        }
    }

    /// Pick [`standard`](Self::standard) or [`plain`](Self::plain).
    pub fn for_color(enabled: bool) -> Self {
        if enabled {
            Self::standard()
        } else {
            Self::plain()
        }
    }

    /// Look up a tag. `None` means the tag is not registered.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.styles.get(tag).map(String::as_str)
    }

    /// Look up a tag, falling back to the empty style.
    pub fn resolve(&self, tag: &str) -> &str {
        self.get(tag).unwrap_or("")
    }

    /// The code emitted for every closing tag and at the end of each render.
    pub fn reset(&self) -> &str {
        &self.reset
    }

    /// Check whether a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.styles.contains_key(tag)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry has no tags.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registered tag names in alphabetical order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Register or replace a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagtermError::InvalidTagName`] if `tag` is not uppercase-only.
    pub fn insert(&mut self, tag: &str, code: impl Into<String>) -> Result<()> {
        if !is_valid_tag_name(tag) {
            return Err(TagtermError::InvalidTagName {
                tag: tag.to_string(),
            });
        }
        let code = code.into();
        if tag == "RESET" {
            self.reset = code.clone();
        }
        self.styles.insert(tag.to_string(), code);
        Ok(())
    }

    /// Apply style overrides from configuration.
    ///
    /// Each override is a list of components, each either a registered tag
    /// (resolved against the registry as it was before any override) or raw
    /// SGR parameters like `"38;5;208"`. The codes are concatenated in order.
    ///
    /// # Errors
    ///
    /// Fails on the first bad tag name or unknown component; the registry is
    /// left untouched in that case.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, Vec<String>>) -> Result<()> {
        let mut staged = self.clone();

        for (tag, components) in overrides {
            let mut code = String::new();
            for component in components {
                if let Some(existing) = self.get(component) {
                    code.push_str(existing);
                } else if let Some(raw) = codes::sgr(component) {
                    code.push_str(&raw);
                } else {
                    return Err(TagtermError::unknown_component_with_suggestions(
                        tag,
                        component,
                        &self.tags(),
                    ));
                }
            }
            log::debug!("style override {tag} = {components:?}");
            staged.insert(tag, code)?;
        }

        *self = staged;
        Ok(())
    }
}

/// Tag names are uppercase ASCII letters, digits and `_`, with at least one letter.
pub fn is_valid_tag_name(tag: &str) -> bool {
    tag.bytes().any(|b| b.is_ascii_uppercase())
        && tag
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_')
}
