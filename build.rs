//! Build script for tagterm.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "tagterm")]
#[command(
    author,
    version,
    about = "Inline-markup terminal styling and validated numbered menus"
)]
#[command(
    long_about = "tagterm renders inline markup such as <GOOD_TEXT>done</GOOD_TEXT> into \
    ANSI terminal styling, and runs numbered menus that re-prompt until the reply is a \
    valid choice.\n\n\
    Closing any tag resets all styling. Unknown tags render as nothing. Run 'tagterm tags' \
    to list the registered tag names."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// When to emit colour
    #[arg(long, value_name = "WHEN", value_enum, global = true)]
    color: Option<Color>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    no_config: bool,

    /// Never clear the screen between menu frames
    #[arg(long, global = true)]
    no_clear: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Subcommand)]
enum Command {
    /// Render marked-up text and print it
    Print {
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// Show a styled prompt and echo the raw reply
    Prompt {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Show a numbered menu and print the validated selection
    Menu {
        /// Menu title
        #[arg(short, long)]
        title: String,
        /// Input prompt
        #[arg(short, long)]
        prompt: Option<String>,
        /// Text shown between the title and the options
        #[arg(long)]
        header: Option<String>,
        /// Give up after this many rejected replies (0 = unlimited)
        #[arg(long, value_name = "N")]
        max_attempts: Option<usize>,
        /// Print the selection as JSON
        #[arg(long)]
        json: bool,
        /// Menu options, in display order
        #[arg(value_name = "OPTION", required = true)]
        options: Vec<String>,
    },
    /// List every registered style tag
    Tags,
    /// Walk through a sample menu and styled text
    Demo,
    /// Print an example config file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("TAGTERM_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("tagterm.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("tagterm.1"));
        }
    }
}
