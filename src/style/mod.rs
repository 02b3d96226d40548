//! Style registry for markup rendering.
//!
//! Maps tag names such as `RED` or `GOOD_TEXT` to ANSI escape sequences.
//! The table is declared statically in [`codes`] and can be extended or
//! overridden from configuration.

pub mod codes;
mod registry;

pub use registry::{is_valid_tag_name, StyleRegistry};
