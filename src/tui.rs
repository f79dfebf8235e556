//! Terminal front end
//!
//! Draws the current snapshot and turns key presses into session events.
//! Runs on a blocking thread; the session itself lives on the tokio runtime.

mod input;
mod render;

use crate::catalog::Catalog;
use crate::runtime::PickerHandle;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use input::Command;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

/// Redraw cadence while idle, so background status changes show up
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Raw mode and the alternate screen, restored on drop
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// # Errors
    ///
    /// Fails if the terminal cannot be switched to raw mode.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run until the user quits or the session stops
///
/// # Errors
///
/// Returns any terminal I/O error.
pub fn run(catalog: &Catalog, handle: &PickerHandle) -> io::Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut cursor = 0usize;
    let mut shown_step = None;

    loop {
        let state = handle.snapshot();

        // Cursor starts at the top of each list
        let step = state.accepted.then_some(state.step);
        if step != shown_step {
            cursor = 0;
            shown_step = step;
        }

        guard
            .terminal
            .draw(|frame| render::draw(frame, catalog, &state, cursor))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(command) = input::map_key(&state, key) else {
            continue;
        };

        let rows = catalog.keys(state.step.category()).len();
        let event = match command {
            Command::Quit => break,
            Command::CursorUp => {
                cursor = cursor.saturating_sub(1);
                None
            }
            Command::CursorDown => {
                cursor = (cursor + 1).min(rows.saturating_sub(1));
                None
            }
            Command::ToggleCursor => input::toggle_at(catalog, &state, cursor),
            Command::Dispatch(event) => Some(event),
        };

        if let Some(event) = event {
            tracing::debug!(event = event.name(), "Dispatching key press");
            if handle.blocking_send(event).is_err() {
                tracing::warn!("Session stopped; closing the front end");
                break;
            }
        }
    }

    Ok(())
}
