//! ANSI style codes and the standard tag table.

/// Clears every active attribute and colour.
pub const RESET: &str = "\x1b[0m";

// Modifiers
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

// Regular colors
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

// Bright colors
pub const BRIGHT_BLACK: &str = "\x1b[90m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

// Regular backgrounds
pub const BG_BLACK: &str = "\x1b[40m";
pub const BG_RED: &str = "\x1b[41m";
pub const BG_GREEN: &str = "\x1b[42m";
pub const BG_YELLOW: &str = "\x1b[43m";
pub const BG_BLUE: &str = "\x1b[44m";
pub const BG_MAGENTA: &str = "\x1b[45m";
pub const BG_CYAN: &str = "\x1b[46m";
pub const BG_WHITE: &str = "\x1b[47m";

// Bright backgrounds
pub const BG_BRIGHT_BLACK: &str = "\x1b[100m";
pub const BG_BRIGHT_RED: &str = "\x1b[101m";
pub const BG_BRIGHT_GREEN: &str = "\x1b[102m";
pub const BG_BRIGHT_YELLOW: &str = "\x1b[103m";
pub const BG_BRIGHT_BLUE: &str = "\x1b[104m";
pub const BG_BRIGHT_MAGENTA: &str = "\x1b[105m";
pub const BG_BRIGHT_CYAN: &str = "\x1b[106m";
pub const BG_BRIGHT_WHITE: &str = "\x1b[107m";

// Semantic aliases. Composites are spelled out since `&str` consts can't be concatenated.
pub const GOOD_TEXT: &str = GREEN;
pub const BAD_TEXT: &str = RED;
pub const WARNING_TEXT: &str = YELLOW;
pub const ACTION_TEXT: &str = CYAN;
pub const INFO_TEXT: &str = MAGENTA;
pub const FUNCTION: &str = "\x1b[34m\x1b[4m";
pub const CLASS: &str = "\x1b[34m\x1b[4m";
pub const KEY: &str = "\x1b[35m\x1b[42m";

// Short aliases used in menu headers and navigation entries
pub const GOOD: &str = GREEN;
pub const BAD: &str = RED;
pub const DATA: &str = BRIGHT_CYAN;
pub const MENU_NAV_ITEM: &str = BRIGHT_BLACK;

/// Every built-in tag with its code.
pub const STANDARD: &[(&str, &str)] = &[
    ("RESET", RESET),
    ("BOLD", BOLD),
    ("UNDERLINE", UNDERLINE),
    ("BLACK", BLACK),
    ("RED", RED),
    ("GREEN", GREEN),
    ("YELLOW", YELLOW),
    ("BLUE", BLUE),
    ("MAGENTA", MAGENTA),
    ("CYAN", CYAN),
    ("WHITE", WHITE),
    ("BRIGHT_BLACK", BRIGHT_BLACK),
    ("BRIGHT_RED", BRIGHT_RED),
    ("BRIGHT_GREEN", BRIGHT_GREEN),
    ("BRIGHT_YELLOW", BRIGHT_YELLOW),
    ("BRIGHT_BLUE", BRIGHT_BLUE),
    ("BRIGHT_MAGENTA", BRIGHT_MAGENTA),
    ("BRIGHT_CYAN", BRIGHT_CYAN),
    ("BRIGHT_WHITE", BRIGHT_WHITE),
    ("BG_BLACK", BG_BLACK),
    ("BG_RED", BG_RED),
    ("BG_GREEN", BG_GREEN),
    ("BG_YELLOW", BG_YELLOW),
    ("BG_BLUE", BG_BLUE),
    ("BG_MAGENTA", BG_MAGENTA),
    ("BG_CYAN", BG_CYAN),
    ("BG_WHITE", BG_WHITE),
    ("BG_BRIGHT_BLACK", BG_BRIGHT_BLACK),
    ("BG_BRIGHT_RED", BG_BRIGHT_RED),
    ("BG_BRIGHT_GREEN", BG_BRIGHT_GREEN),
    ("BG_BRIGHT_YELLOW", BG_BRIGHT_YELLOW),
    ("BG_BRIGHT_BLUE", BG_BRIGHT_BLUE),
    ("BG_BRIGHT_MAGENTA", BG_BRIGHT_MAGENTA),
    ("BG_BRIGHT_CYAN", BG_BRIGHT_CYAN),
    ("BG_BRIGHT_WHITE", BG_BRIGHT_WHITE),
    ("GOOD_TEXT", GOOD_TEXT),
    ("BAD_TEXT", BAD_TEXT),
    ("WARNING_TEXT", WARNING_TEXT),
    ("ACTION_TEXT", ACTION_TEXT),
    ("INFO_TEXT", INFO_TEXT),
    ("FUNCTION", FUNCTION),
    ("CLASS", CLASS),
    ("KEY", KEY),
    ("GOOD", GOOD),
    ("BAD", BAD),
    ("DATA", DATA),
    ("MENU_NAV_ITEM", MENU_NAV_ITEM),
];

/// Build an SGR sequence from raw parameters such as `"1;31"` or `"38;5;208"`.
///
/// Returns `None` unless the parameters are non-empty digits separated by `;`.
pub fn sgr(params: &str) -> Option<String> {
    let valid = !params.is_empty()
        && params
            .split(';')
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    valid.then(|| format!("\x1b[{params}m"))
}
