//! CLI argument definitions for tagterm.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use tagterm::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Color override: {:?}", cli.color_override());
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::ColorMode;

/// Inline-markup terminal styling and validated numbered menus.
#[derive(Parser, Debug)]
#[command(name = "tagterm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// When to emit colour
    #[arg(long, value_name = "WHEN", value_enum, global = true)]
    pub color: Option<CliColor>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Never clear the screen between menu frames
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render marked-up text and print it
    Print {
        /// Text to render; multiple words are joined with spaces
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// Show a styled prompt and echo the raw reply
    Prompt {
        /// Prompt text
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Show a numbered menu and print the validated selection
    Menu {
        /// Menu title
        #[arg(short, long)]
        title: String,

        /// Input prompt (default from config)
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

/// Colour choice for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliColor {
    /// Colour on terminals only
    Auto,
    /// Always colour
    Always,
    /// Never colour
    Never,
}

impl From<CliColor> for ColorMode {
    fn from(color: CliColor) -> Self {
        match color {
            CliColor::Auto => ColorMode::Auto,
            CliColor::Always => ColorMode::Always,
            CliColor::Never => ColorMode::Never,
        }
    }
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the colour override.
    pub fn color_override(&self) -> Option<ColorMode> {
        self.color.map(Into::into)
    }

    /// Print the top-level help text.
    pub fn print_help() -> std::io::Result<()> {
        Cli::command().print_help()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "tagterm", &mut std::io::stdout());
    }
}
