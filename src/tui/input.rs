use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Longer,
    Shorter,
    ToggleUpper,
    ToggleLower,
    ToggleDigits,
    ToggleSymbols,
    Generate,
    Copy,
    Help,
    Quit,
}

/// Map a key event to a form action. Releases and unknown keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Longer)
        }
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') => {
            Some(Action::Shorter)
        }
        KeyCode::Char('1') | KeyCode::Char('u') => Some(Action::ToggleUpper),
        KeyCode::Char('2') | KeyCode::Char('l') => Some(Action::ToggleLower),
        KeyCode::Char('3') | KeyCode::Char('n') => Some(Action::ToggleDigits),
        KeyCode::Char('4') | KeyCode::Char('s') => Some(Action::ToggleSymbols),
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Some(Action::Generate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::Help),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
