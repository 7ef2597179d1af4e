//! Centralized notices for CLI output.

use super::quiet;
use crate::pass::Strength;
use crate::terminal::{RESET, strength_color};

const YELLOW: &str = "\x1b[33m";

/// Print a warning to stderr (yellow), suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print clipboard copied confirmation, suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Format a strength label, colored only when stdout is a terminal.
pub fn strength_label(strength: Strength) -> String {
    if quiet::stdout_is_terminal() {
        format!("{}{}{RESET}", strength_color(strength), strength)
    } else {
        strength.to_string()
    }
}
