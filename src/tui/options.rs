use std::io;

use crossterm::event::{Event, read};

use crate::clipboard::SystemClipboard;
use crate::form::Form;
use crate::terminal::{GREEN, RESET, RawModeGuard, clear, eol};

use super::{Action, action_for, print_form, print_help};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Drive the form from key presses until the user quits.
pub fn form_loop(form: &mut Form) -> io::Result<()> {
    let mut guard = RawModeGuard::new()?;
    let mut clipboard: Option<SystemClipboard> = None;
    let mut status = String::new();

    print_form(form, &status);

    loop {
        let event = read()?;
        let action = match event {
            Event::Key(key) => match action_for(key) {
                Some(a) => a,
                None => continue,
            },
            Event::Resize(_, _) => {
                print_form(form, &status);
                continue;
            }
            _ => continue,
        };

        status.clear();

        if action == Action::Help {
            clear();
            print_help();
            print!("Press any key to return{}", eol());
            wait_for_key()?;
            print_form(form, &status);
            continue;
        }

        if let Break = apply(form, action, &mut clipboard, &mut status) {
            break;
        }
        print_form(form, &status);
    }

    guard.release();
    clear();
    Ok(())
}

/// Apply one action. Every settings change regenerates inside `Form`.
fn apply(
    form: &mut Form,
    action: Action,
    clipboard: &mut Option<SystemClipboard>,
    status: &mut String,
) -> LoopAction {
    match action {
        Action::Longer => form.increase_length(),
        Action::Shorter => form.decrease_length(),
        Action::ToggleUpper => form.toggle_upper(),
        Action::ToggleLower => form.toggle_lower(),
        Action::ToggleDigits => form.toggle_digits(),
        Action::ToggleSymbols => form.toggle_symbols(),
        Action::Generate => form.regenerate(),
        Action::Copy => {
            if clipboard.is_none() {
                match SystemClipboard::new() {
                    Ok(c) => *clipboard = Some(c),
                    Err(e) => log::debug!("{e}"),
                }
            }
            if let Some(c) = clipboard.as_mut()
                && form.copy_to(c)
            {
                *status = format!("{GREEN}Copied to clipboard{RESET}");
            }
        }
        Action::Help => {}
        Action::Quit => return Break,
    }
    Continue
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = read()?
            && key.kind != crossterm::event::KeyEventKind::Release
        {
            return Ok(());
        }
    }
}
