//! tagterm - tagged terminal text
//!
//! Entry point for the tagterm CLI application.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use tagterm::cli::{Cli, Command};
use tagterm::config::{generate_example_config, load_config, Config};
use tagterm::console::Console;
use tagterm::error::{exit_code, TagtermError};
use tagterm::menu::{Menu, MenuSpec};
use tagterm::utils::{colors_enabled, no_color_requested, should_clear, stdout_is_terminal};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(tagterm_err) = err.downcast_ref::<TagtermError>() {
                eprintln!("Error: {tagterm_err}");
                return ExitCode::from(tagterm_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        Cli::print_help()?;
        return Ok(exit_code::SUCCESS);
    };

    log::debug!("CLI arguments = {cli:?}");

    let config = if cli.no_config {
        Config::default()
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        load_config(cli.config.as_deref(), &cwd).map_err(|e| TagtermError::ConfigError {
            message: format!("{e:#}"),
        })?
    };

    let is_terminal = stdout_is_terminal();
    let mode = cli.color_override().unwrap_or(config.appearance.color);
    let color = colors_enabled(mode, is_terminal, no_color_requested());
    let clear = should_clear(config.menu.clear_screen && !cli.no_clear, is_terminal);
    log::debug!("color mode {mode:?} -> {color}, clear screen {clear}");

    let registry = config.registry(color)?;
    let mut console = Console::stdio(registry).with_clear_screen(clear);

    match command {
        Command::Print { text } => {
            console.print(&text.join(" "))?;
        }
        Command::Prompt { text } => {
            let reply = console.prompt(&text)?;
            println!("{reply}");
        }
        Command::Menu {
            title,
            prompt,
            header,
            max_attempts,
            json,
            options,
        } => {
            let mut spec = MenuSpec::new(title, options)
                .with_prompt(prompt.unwrap_or_else(|| config.menu.prompt.clone()));
            if let Some(header) = header {
                spec = spec.with_header(header);
            }

            let limit = max_attempts.or(config.menu.attempt_limit());
            let selection = Menu::new(spec)
                .with_max_attempts(limit)
                .select(&mut console)?;

            if json {
                println!("{}", serde_json::to_string(&selection)?);
            } else {
                println!("{selection}");
            }
        }
        Command::Tags => {
            list_tags(&mut console)?;
        }
        Command::Demo => {
            run_demo(&mut console, &config)?;
        }
        Command::InitConfig => {
            print!("{}", generate_example_config());
        }
    }

    Ok(exit_code::SUCCESS)
}

/// Set up `log` output on stderr. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Print every registered tag in its own style.
fn list_tags<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let tags: Vec<String> = console
        .registry()
        .tags()
        .into_iter()
        .map(String::from)
        .collect();

    for tag in &tags {
        console.print(&format!("<{tag}>{tag}</{tag}>"))?;
    }
    console.print(&format!("\n<INFO_TEXT>{} tags</INFO_TEXT>", tags.len()))?;
    Ok(())
}

/// Interactive tour: a sample menu, then the styling samples.
fn run_demo<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    let spec = MenuSpec::new("Sample Menu", ["option 1", "option 2", "option 3", "exit"])
        .with_prompt(config.menu.prompt.clone());
    let selection = Menu::new(spec)
        .with_max_attempts(config.menu.attempt_limit())
        .select(console)?;

    if selection.label == "exit" {
        return Ok(());
    }

    console.print(&format!(
        "\nyou picked <DATA>{}</DATA>. this is <FUNCTION>print()</FUNCTION> on the \
         <CLASS>Console</CLASS> type; <FUNCTION>clear()</FUNCTION> just wiped the screen.",
        selection.label
    ))?;
    console.print(
        "closing <RED>any</RED> tag resets <BOLD><GREEN>every</GREEN> active</BOLD> style, \
         and <NOPE>unknown</NOPE> tags render as nothing.",
    )?;
    console.prompt("\nthis is <FUNCTION>prompt()</FUNCTION>, press <KEY>ENTER</KEY> to continue...")?;
    Ok(())
}
