//! Terminal output utilities.
//!
//! Box drawing, strength badge, length slider, ANSI helpers.

use crossterm::terminal::{disable_raw_mode, is_raw_mode_enabled};
use std::io::{self, Write};

use crate::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const AMBER: &str = "\x1b[38;5;214m";
pub const GREEN: &str = "\x1b[38;5;34m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Color for a strength label: red, amber, green.
pub fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => RED,
        Strength::Medium => AMBER,
        Strength::Strong => GREEN,
    }
}

/// `Strength: Medium` wrapped in the label's color.
pub fn strength_badge(strength: Strength) -> String {
    format!("{}{BOLD}Strength: {}{RESET}", strength_color(strength), strength)
}

/// Render a slider like `[=======-------]` for `value` within `min..=max`.
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = value.clamp(min, max) - min;
    let filled = (pos * width + span / 2) / span;
    format!("[{}{}]", "=".repeat(filled), "-".repeat(width - filled))
}

/// `[x] label` or `[ ] label`.
pub fn checkbox(checked: bool, label: &str) -> String {
    format!("[{}] {}", if checked { 'x' } else { ' ' }, label)
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 56;

/// Line ending for the current mode: raw mode needs an explicit `\r`.
pub fn eol() -> &'static str {
    if is_raw_mode_enabled().unwrap_or(false) {
        "\r\n"
    } else {
        "\n"
    }
}

/// One padded box content line, terminated with [`eol`].
pub fn boxed(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │{}", content, " ".repeat(padding), eol())
}

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐{}", "─".repeat(BOX_WIDTH - 2), eol());
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        print!("┌{}{}┐{}", title_part, "─".repeat(remaining), eol());
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    print!("{}", boxed(content));
}

/// Print a line with `left` flush left and `right` flush right.
pub fn box_line_split(left: &str, right: &str) {
    let inner_width = BOX_WIDTH - 4;
    let used = console_width(left) + console_width(right);
    let gap = inner_width.saturating_sub(used).max(1);
    box_line(&format!("{}{}{}", left, " ".repeat(gap), right));
}

/// Print a horizontal rule (box style).
pub fn box_rule() {
    print!("├{}┤{}", "─".repeat(BOX_WIDTH - 2), eol());
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    print!("└{}┘{}", "─".repeat(BOX_WIDTH - 2), eol());
}

/// Print a help option with flag and description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 22;
    let flag_padded = format!("{:<width$}", flag, width = flag_col);
    box_line(&format!("{}{}", flag_padded, desc));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_width_skips_escapes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&strength_badge(Strength::Weak)), "Strength: Weak".len());
    }

    #[test]
    fn test_strength_colors() {
        assert_eq!(strength_color(Strength::Weak), RED);
        assert_eq!(strength_color(Strength::Medium), AMBER);
        assert_eq!(strength_color(Strength::Strong), GREEN);
    }

    #[test]
    fn test_slider_ends() {
        assert_eq!(slider(6, 6, 30, 12), format!("[{}]", "-".repeat(12)));
        assert_eq!(slider(30, 6, 30, 12), format!("[{}]", "=".repeat(12)));
        assert_eq!(slider(18, 6, 30, 12), "[======------]");
        assert_eq!(slider(99, 6, 30, 4), "[====]");
    }

    #[test]
    fn test_cooked_mode_lines_have_no_carriage_return() {
        // Tests never enable raw mode, like a piped `passform -h`.
        assert_eq!(eol(), "\n");
        let line = boxed("  -h, --help");
        assert!(line.ends_with("│\n"));
        assert!(!line.contains('\r'));
        assert_eq!(line.chars().count(), BOX_WIDTH + 1);
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(true, "Numbers"), "[x] Numbers");
        assert_eq!(checkbox(false, "Symbols"), "[ ] Symbols");
    }
}
