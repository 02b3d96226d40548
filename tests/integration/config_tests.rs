//! Integration tests for configuration loading.

use std::fs;

use tagterm::config::{load_config, ColorMode, Config};
use tagterm::markup::render;
use tagterm::menu::DEFAULT_PROMPT;
use tagterm::TagtermError;

use crate::integration::fixtures::dir_with_local_config;

#[test]
fn test_local_config_applies() {
    let temp = dir_with_local_config(
        r#"
[appearance]
color = "always"

[menu]
prompt = "go: "
clear_screen = false
max_attempts = 5
"#,
    );

    let config = load_config(None, temp.path()).unwrap();

    assert_eq!(config.appearance.color, ColorMode::Always);
    assert_eq!(config.menu.prompt, "go: ");
    assert!(!config.menu.clear_screen);
    assert_eq!(config.menu.attempt_limit(), Some(5));
}

#[test]
fn test_empty_local_config_keeps_defaults() {
    let temp = dir_with_local_config("");

    let config = load_config(None, temp.path()).unwrap();

    assert_eq!(config.menu.prompt, DEFAULT_PROMPT);
    assert!(config.menu.clear_screen);
    assert_eq!(config.menu.attempt_limit(), None);
}

#[test]
fn test_style_overrides_reach_rendering() {
    let temp = dir_with_local_config(
        r#"
[styles]
GOOD_TEXT = ["BRIGHT_GREEN", "BOLD"]
ORANGE = ["38;5;208"]
"#,
    );

    let config = load_config(None, temp.path()).unwrap();
    let registry = config.registry(true).unwrap();

    assert_eq!(
        render("<GOOD_TEXT>ok</GOOD_TEXT>", &registry),
        "\x1b[92m\x1b[1mok\x1b[0m\x1b[0m"
    );
    assert_eq!(render("<ORANGE>!", &registry), "\x1b[38;5;208m!\x1b[0m");
    // Untouched tags keep their standard codes
    assert_eq!(registry.get("RED"), Some("\x1b[31m"));
}

#[test]
fn test_override_components_resolve_before_overrides() {
    let temp = dir_with_local_config(
        r#"
[styles]
RED = ["BLUE"]
ALERT = ["RED"]
"#,
    );

    let registry = load_config(None, temp.path())
        .unwrap()
        .registry(true)
        .unwrap();

    assert_eq!(registry.get("RED"), Some("\x1b[34m"));
    assert_eq!(registry.get("ALERT"), Some("\x1b[31m"));
}

#[test]
fn test_lowercase_override_is_rejected() {
    let temp = dir_with_local_config(
        r#"
[styles]
good = ["GREEN"]
"#,
    );

    let config = load_config(None, temp.path()).unwrap();
    let err = config.registry(true).unwrap_err();

    assert!(matches!(err, TagtermError::InvalidTagName { ref tag } if tag == "good"));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_misspelled_component_suggests_tags() {
    let mut config = Config::default();
    config
        .styles
        .insert("ALERT".to_string(), vec!["GREN".to_string()]);

    let err = config.registry(true).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Unknown style component 'GREN'"));
    assert!(message.contains("'GREEN'"));
}

#[test]
fn test_colour_off_ignores_overrides() {
    let temp = dir_with_local_config(
        r#"
[styles]
good = ["NOT_A_TAG"]
"#,
    );

    let registry = load_config(None, temp.path())
        .unwrap()
        .registry(false)
        .unwrap();

    assert_eq!(render("<RED>x</RED>", &registry), "x");
}

#[test]
fn test_cli_config_beats_local_config() {
    let temp = dir_with_local_config(
        r#"
[appearance]
color = "never"

[menu]
prompt = "local: "
"#,
    );
    let cli_path = temp.path().join("override.toml");
    fs::write(
        &cli_path,
        r#"
[appearance]
color = "always"
"#,
    )
    .unwrap();

    let config = load_config(Some(&cli_path), temp.path()).unwrap();

    assert_eq!(config.appearance.color, ColorMode::Always);
    assert_eq!(config.menu.prompt, "local: ");
}

#[test]
fn test_unknown_color_value_fails_for_cli_path() {
    let temp = tempfile::TempDir::new().unwrap();
    let cli_path = temp.path().join("bad.toml");
    fs::write(&cli_path, "[appearance]\ncolor = \"sometimes\"\n").unwrap();

    let err = load_config(Some(&cli_path), temp.path()).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"));
}

#[test]
fn test_cli_config_without_appearance_keeps_local_values() {
    let temp = dir_with_local_config(
        r#"
[appearance]
color = "never"

[menu]
clear_screen = false
max_attempts = 3
"#,
    );
    let cli_path = temp.path().join("styles-only.toml");
    fs::write(&cli_path, "[styles]\nORANGE = [\"38;5;208\"]\n").unwrap();

    let config = load_config(Some(&cli_path), temp.path()).unwrap();

    assert_eq!(config.appearance.color, ColorMode::Never);
    assert!(!config.menu.clear_screen);
    assert_eq!(config.menu.attempt_limit(), Some(3));
    assert!(config.styles.contains_key("ORANGE"));
}

#[test]
fn test_cli_config_can_reset_to_defaults() {
    let temp = dir_with_local_config(
        r#"
[menu]
prompt = "local: "
max_attempts = 3
"#,
    );
    let cli_path = temp.path().join("defaults.toml");
    fs::write(
        &cli_path,
        format!("[menu]\nprompt = \"{DEFAULT_PROMPT}\"\nmax_attempts = 0\n"),
    )
    .unwrap();

    let config = load_config(Some(&cli_path), temp.path()).unwrap();

    assert_eq!(config.menu.prompt, DEFAULT_PROMPT);
    assert_eq!(config.menu.attempt_limit(), None);
}
