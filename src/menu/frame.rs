//! Markup for one menu frame.

use std::io::{BufRead, Write};

use super::spec::MenuSpec;
use crate::console::Console;
use crate::error::Result;

/// Title line, padded with blank lines above and below.
pub fn title_line(title: &str) -> String {
    format!("\n<RED>---</RED><MAGENTA>{title}</MAGENTA><RED>---</RED>\n")
}

/// Bracketed 1-based index, at least two digits wide: `[01]`, `[10]`, `[100]`.
pub fn index_label(index: usize) -> String {
    format!("[{index:02}]")
}

/// One numbered option.
pub fn option_line(index: usize, label: &str) -> String {
    format!("<GREEN>{}</GREEN> - <YELLOW>{label}</YELLOW>", index_label(index))
}

/// The input prompt, preceded by a blank line.
pub fn prompt_line(prompt: &str) -> String {
    format!("\n<CYAN>{prompt}</CYAN>")
}

/// Every printed line of a frame, in order, excluding the prompt.
pub fn frame_lines(spec: &MenuSpec) -> Vec<String> {
    let mut lines = Vec::with_capacity(spec.len() + 2);
    lines.push(title_line(spec.title()));
    if let Some(header) = spec.header() {
        lines.push(header.to_string());
    }
    lines.extend(
        spec.options()
            .iter()
            .enumerate()
            .map(|(i, label)| option_line(i + 1, label)),
    );
    lines
}

/// Clear, draw the frame and read the raw reply. No validation.
pub fn show<R: BufRead, W: Write>(console: &mut Console<R, W>, spec: &MenuSpec) -> Result<String> {
    console.clear()?;
    for line in frame_lines(spec) {
        console.print(&line)?;
    }
    console.prompt(&prompt_line(spec.prompt()))
}
