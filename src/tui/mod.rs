//! Interactive terminal form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::form::Form;
use crate::settings::Settings;
use crate::terminal::{print_error, reset_terminal};

/// Run TUI interactive mode.
pub fn run(settings: Settings) {
    reset_terminal();
    log::info!("starting interactive form");

    let mut form = Form::new(settings);
    if let Err(e) = form_loop(&mut form) {
        reset_terminal();
        print_error(&format!("Terminal error: {}", e));
    }
}
