//! Key bindings

use crate::catalog::Catalog;
use crate::state_machine::{Category, Event, Phase, PickerState, Step};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front end to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    CursorUp,
    CursorDown,
    /// Toggle the option under the cursor
    ToggleCursor,
    Dispatch(Event),
}

/// Translate a key press for the screen `state` is showing
#[must_use]
pub fn map_key(state: &PickerState, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return Some(Command::Quit);
    }

    match state.phase() {
        Phase::Prompting => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Command::Dispatch(Event::Accept)),
            KeyCode::Char('n') => Some(Command::Dispatch(Event::Decline)),
            _ => None,
        },
        Phase::Sad => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(Command::Dispatch(Event::Accept)),
            KeyCode::Char('r') => Some(Command::Dispatch(Event::Reset)),
            _ => None,
        },
        Phase::Planning => map_planner_key(state, key.code),
    }
}

fn map_planner_key(state: &PickerState, code: KeyCode) -> Option<Command> {
    let on_movies = state.step == Step::Movies;
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::CursorDown),
        KeyCode::Char(' ') => Some(Command::ToggleCursor),
        KeyCode::Left | KeyCode::Char('b') => Some(Command::Dispatch(Event::Back)),
        KeyCode::Right | KeyCode::Tab => Some(Command::Dispatch(Event::Next)),
        KeyCode::Char(c @ '1'..='3') => c
            .to_digit(10)
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Step::from_number)
            .map(|target| Command::Dispatch(Event::Jump { target })),
        KeyCode::Char('h') => Some(Command::Dispatch(Event::Home)),
        KeyCode::Char('x') if on_movies => Some(Command::Dispatch(Event::randomize_movies())),
        KeyCode::Char('c') if on_movies => Some(Command::Dispatch(Event::Clear {
            category: Category::Movie,
        })),
        KeyCode::Char('s') if state.can_submit() && !state.submit_status.is_sending() => {
            Some(Command::Dispatch(Event::submit_now()))
        }
        _ => None,
    }
}

/// A full list greys out its unpicked rows
#[must_use]
pub fn row_disabled(state: &PickerState, category: Category, key: &str) -> bool {
    let selection = state.selection(category);
    !selection.contains(key) && selection.is_full()
}

/// Toggle event for the row under the cursor, unless that row is disabled
#[must_use]
pub fn toggle_at(catalog: &Catalog, state: &PickerState, cursor: usize) -> Option<Event> {
    let category = state.step.category();
    let keys = catalog.keys(category);
    let key = keys.get(cursor)?;
    if row_disabled(state, category, key) {
        return None;
    }
    Some(Event::toggle(category, *key))
}
