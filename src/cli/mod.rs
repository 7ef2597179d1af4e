//! Non-interactive mode: parse flags, print or copy passwords, exit.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, settings_from_flags, write_passwords};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::terminal::print_error;

/// Run CLI mode. Returns the process exit code.
pub fn run(args: &[String]) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            print_error(&e.to_string());
            print_error("Try --help");
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done) => 0,
    }
}
