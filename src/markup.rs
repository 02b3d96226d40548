//! Inline markup rendering.
//!
//! Text may contain `<TAG>` and `</TAG>` markers where `TAG` is one or more
//! word characters. An opening marker becomes the registry's code for `TAG`
//! (nothing if the tag is unknown). A closing marker always becomes the reset
//! code, whatever its name, so closing any tag clears every active style.
//!
//! ```
//! use tagterm::markup::render;
//! use tagterm::style::StyleRegistry;
//!
//! let registry = StyleRegistry::standard();
//! let out = render("<RED>stop</RED>", &registry);
//! assert_eq!(out, "\x1b[31mstop\x1b[0m\x1b[0m");
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::style::StyleRegistry;

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)(\w+)>").expect("marker pattern is valid"));

/// A piece of marked-up text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text between markers.
    Text(&'a str),
    /// `<name>`
    Open(&'a str),
    /// `</name>`
    Close(&'a str),
}

/// Split text into literal runs and markers.
pub fn parse(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in MARKER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(&text[last..whole.start()]));
        }
        let name = caps.get(2).map_or("", |m| m.as_str());
        if caps[1].is_empty() {
            segments.push(Segment::Open(name));
        } else {
            segments.push(Segment::Close(name));
        }
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Replace markers with style codes, without the trailing reset.
pub fn transform(text: &str, registry: &StyleRegistry) -> String {
    MARKER
        .replace_all(text, |caps: &Captures| {
            if caps[1].is_empty() {
                registry.resolve(&caps[2]).to_string()
            } else {
                registry.reset().to_string()
            }
        })
        .into_owned()
}

/// Replace markers with style codes and append one reset.
///
/// The trailing reset keeps styling from leaking into whatever is written next.
pub fn render(text: &str, registry: &StyleRegistry) -> String {
    let mut out = transform(text, registry);
    out.push_str(registry.reset());
    out
}

/// Drop every marker, keeping only the literal text.
pub fn strip(text: &str) -> String {
    MARKER.replace_all(text, "").into_owned()
}
