use crate::form::Form;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    BOLD, DIM, RESET, box_bottom, box_line, box_line_split, box_opt, box_rule, box_top,
    checkbox, clear, eol, flush, slider, strength_badge,
};

const SLIDER_WIDTH: usize = 20;

/// Redraw the whole form. `status` is shown on the last line when non-empty.
pub fn print_form(form: &Form, status: &str) {
    let settings = form.settings();

    clear();
    box_top("Password Generator");
    box_line("");
    box_line(&format!("  {BOLD}{}{RESET}", form.password()));
    box_line("");
    box_rule();
    box_line_split(
        &format!(
            "Length: {:>2} {}",
            settings.length,
            slider(settings.length, MIN_LENGTH, MAX_LENGTH, SLIDER_WIDTH)
        ),
        &strength_badge(form.strength()),
    );
    box_line_split("", &format!("{DIM}~{:.0} bits{RESET}", form.entropy_bits()));
    box_rule();
    box_line(&format!(
        "1 {}   2 {}",
        checkbox(settings.use_upper_case, "Uppercase"),
        checkbox(settings.use_lower_case, "Lowercase"),
    ));
    box_line(&format!(
        "3 {}     4 {}",
        checkbox(settings.number_allowed, "Numbers"),
        checkbox(settings.characters_allowed, "Symbols"),
    ));
    box_rule();
    box_line(&format!("{DIM}<-/-> length  1-4 toggle  g generate{RESET}"));
    box_line(&format!("{DIM}c copy  ? help  q quit{RESET}"));
    box_bottom();
    if !status.is_empty() {
        print!("{status}{}", eol());
    }
    flush();
}

pub fn print_help() {
    box_top("passform");
    box_line("Password generator with strength rating.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform            interactive form");
    box_line("  passform [OPTIONS]  print passwords and exit");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Length, 6-30 (default 8)");
    box_opt("  -n, --number <N>", "How many to generate");
    box_opt("      --no-upper", "Exclude A-Z");
    box_opt("      --no-lower", "Exclude a-z");
    box_opt("  -d, --digits", "Include 0-9");
    box_opt("  -s, --symbols", "Include !@#$%^&*... symbols");
    box_opt("  -a, --all", "Include every class");
    box_opt("  -b, --board", "Copy to clipboard");
    box_opt("      --strength", "Print the strength label");
    box_opt("  -q, --quiet", "Suppress notices");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("FORM KEYS:");
    box_opt("  Left/Right, -/+", "Change length");
    box_opt("  1-4 or u/l/n/s", "Toggle a class");
    box_opt("  g, Enter, Space", "Generate again");
    box_opt("  c", "Copy to clipboard");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line("ENVIRONMENT:");
    box_opt("  RUST_LOG", "Log filter (default warn)");
    box_opt("  PASSFORM_LOG_FILE", "Write logs to this file");
    box_bottom();
    flush();
}
