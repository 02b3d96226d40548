//! Integration tests for validated menus.

use std::io::Cursor;

use tagterm::console::Console;
use tagterm::menu::{
    index_label, Menu, MenuSpec, MenuState, Selection, SelectionLoop, DEFAULT_PROMPT,
};
use tagterm::style::StyleRegistry;
use tagterm::TagtermError;

use crate::integration::fixtures::{plain_console, styled_console, unread, written};

fn abc() -> Menu {
    Menu::new(MenuSpec::new("letters", ["A", "B", "C"]))
}

// ==================== Valid Replies ====================

#[test]
fn test_two_selects_b() {
    let mut console = plain_console("2\n");
    let selection = abc().select(&mut console).unwrap();

    assert_eq!(
        selection,
        Selection {
            index: 2,
            label: "B".to_string()
        }
    );
}

#[test]
fn test_padded_reply_is_accepted() {
    let mut console = plain_console("  2  \n");
    assert_eq!(abc().select(&mut console).unwrap().label, "B");
}

#[test]
fn test_bounds_are_inclusive() {
    let mut console = plain_console("1\n");
    assert_eq!(abc().select(&mut console).unwrap().index, 1);

    let mut console = plain_console("3\n");
    assert_eq!(abc().select(&mut console).unwrap().index, 3);
}

// ==================== Rejected Replies ====================

#[test]
fn test_zero_and_four_are_out_of_range() {
    for bad in ["0", "4"] {
        let mut console = plain_console(&format!("{bad}\n\n2\n"));
        let selection = abc().select(&mut console).unwrap();
        assert_eq!(selection.index, 2);

        let out = written(console);
        assert_eq!(out.matches("out of the menu range").count(), 1, "reply {bad}");
        assert!(!out.contains("non-numeric"));
    }
}

#[test]
fn test_letter_is_non_numeric() {
    let mut console = plain_console("x\n\n2\n");
    assert_eq!(abc().select(&mut console).unwrap().index, 2);

    let out = written(console);
    assert_eq!(out.matches("non-numeric").count(), 1);
    assert!(out.contains("Press ENTER to continue..."));
}

#[test]
fn test_undecodable_reply_is_non_numeric() {
    let mut console = Console::new(
        StyleRegistry::plain(),
        Cursor::new(b"\xff\xfe\n\n2\n".to_vec()),
        Vec::new(),
    )
    .with_clear_screen(false);

    let selection = abc().select(&mut console).unwrap();
    assert_eq!(selection.index, 2);
    assert_eq!(written(console).matches("non-numeric").count(), 1);
}

#[test]
fn test_menu_is_redrawn_after_each_rejection() {
    let mut console = plain_console("x\n\n0\n\n1\n");
    abc().select(&mut console).unwrap();

    let out = written(console);
    assert_eq!(out.matches("---letters---").count(), 3);
    assert_eq!(out.matches("[02] - B").count(), 3);
}

#[test]
fn test_warnings_are_styled() {
    let mut console = styled_console("x\n\n1\n");
    abc().select(&mut console).unwrap();

    let out = written(console);
    // BAD is red, KEY is magenta on green
    assert!(out.contains("\x1b[31m\nyour input is non-numeric. Press \x1b[0m\x1b[35m\x1b[42mENTER"));
}

#[test]
fn test_screen_cleared_around_each_frame() {
    let mut console = styled_console("9\n\n1\n");
    abc().select(&mut console).unwrap();

    // Before and after each of the two frames
    assert_eq!(written(console).matches("\x1b[2J").count(), 4);
}

#[test]
fn test_nothing_read_past_selection() {
    let mut console = plain_console("3\nleftover\n");
    abc().select(&mut console).unwrap();
    assert_eq!(unread(console), "leftover\n");
}

#[test]
fn test_last_rejection_is_explained_before_giving_up() {
    let mut console = plain_console("x\nleftover\n");
    let err = abc()
        .with_max_attempts(Some(1))
        .select(&mut console)
        .unwrap_err();
    assert!(matches!(err, TagtermError::AttemptsExhausted { attempts: 1 }));

    // The warning is printed, but no acknowledgement line is read
    assert_eq!(unread(console), "leftover\n");
}

#[test]
fn test_out_of_range_warning_shown_at_limit() {
    let mut console = plain_console("9\n");
    let err = abc()
        .with_max_attempts(Some(1))
        .select(&mut console)
        .unwrap_err();
    assert!(matches!(err, TagtermError::AttemptsExhausted { .. }));
    assert!(written(console).contains("your input is out of the menu range."));
}

// ==================== Empty Menus ====================

#[test]
fn test_empty_menu_rejected_before_reading() {
    let mut console = plain_console("1\n");
    let menu = Menu::new(MenuSpec::new("empty", Vec::<String>::new()));

    let err = menu.select(&mut console).unwrap_err();
    assert!(matches!(err, TagtermError::EmptyMenu { .. }));
    assert_eq!(unread(console), "1\n");
}

#[test]
fn test_empty_menu_loop_reads_once_per_attempt() {
    let spec = MenuSpec::new("empty", Vec::<String>::new());
    let mut console = plain_console("1\n\n1\n\n1\n\nextra\n");

    let err = SelectionLoop::new(&spec)
        .with_max_attempts(Some(3))
        .run(&mut console)
        .unwrap_err();

    assert!(matches!(err, TagtermError::AttemptsExhausted { attempts: 3 }));
    // Two acknowledged warnings, then the limit hit on the third reply
    let rest = unread(console);
    assert_eq!(rest, "\nextra\n");
}

#[test]
fn test_empty_menu_loop_stops_at_end_of_input() {
    let spec = MenuSpec::new("empty", Vec::<String>::new());
    let mut console = plain_console("1\n");
    let mut machine = SelectionLoop::new(&spec);

    // The single reply is out of range, then the acknowledgement hits EOF
    let err = machine.step(&mut console).unwrap_err();
    assert!(matches!(err, TagtermError::InputClosed));
    assert_eq!(machine.state(), &MenuState::AwaitingInput { attempts: 1 });

    let out = written(console);
    assert_eq!(out.matches("---empty---").count(), 1);
    assert!(out.contains("out of the menu range"));
}

// ==================== Index Labels ====================

#[test]
fn test_tenth_option_label() {
    let options: Vec<String> = (1..=12).map(|i| format!("item {i}")).collect();
    let mut console = plain_console("10\n");
    let selection = Menu::new(MenuSpec::new("long", options))
        .select(&mut console)
        .unwrap();

    assert_eq!(selection.label, "item 10");
    let out = written(console);
    assert!(out.contains("[09] - item 9"));
    assert!(out.contains("[10] - item 10"));
    assert!(!out.contains("[010]"));
}

#[test]
fn test_labels_widen_past_ninety_nine() {
    let options: Vec<String> = (1..=120).map(|i| format!("item {i}")).collect();
    let mut console = plain_console("120\n");
    let selection = Menu::new(MenuSpec::new("huge", options))
        .select(&mut console)
        .unwrap();

    assert_eq!(selection.index, 120);
    let out = written(console);
    assert!(out.contains("[99] - item 99"));
    assert!(out.contains("[100] - item 100"));
    assert!(out.contains("[120] - item 120"));
    assert_eq!(index_label(100), "[100]");
}

// ==================== Prompt and Header ====================

#[test]
fn test_default_and_custom_prompt() {
    let mut console = plain_console("1\n");
    abc().select(&mut console).unwrap();
    assert!(written(console).ends_with(&format!("\n{DEFAULT_PROMPT}")));

    let mut console = plain_console("1\n");
    Menu::new(MenuSpec::new("m", ["x"]).with_prompt("which? "))
        .select(&mut console)
        .unwrap();
    assert!(written(console).ends_with("\nwhich? "));
}

#[test]
fn test_header_sits_between_title_and_options() {
    let spec = MenuSpec::new("csv menu", ["load csv", "return"])
        .with_header("<BAD>csv file not selected.</BAD>");
    let mut console = plain_console("2\n");
    Menu::new(spec).select(&mut console).unwrap();

    let out = written(console);
    let title = out.find("---csv menu---").unwrap();
    let header = out.find("csv file not selected.").unwrap();
    let first = out.find("[01] - load csv").unwrap();
    assert!(title < header && header < first);
}

#[test]
fn test_markup_in_labels_is_rendered_but_label_returned_raw() {
    let spec = MenuSpec::new("nav", ["stay", "<MENU_NAV_ITEM>return</MENU_NAV_ITEM>"]);
    let mut console = plain_console("2\n");
    let selection = Menu::new(spec).select(&mut console).unwrap();

    assert_eq!(selection.label, "<MENU_NAV_ITEM>return</MENU_NAV_ITEM>");
    assert!(written(console).contains("[02] - return"));
}
