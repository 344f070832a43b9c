//! Interactive terminal UI
//!
//! Full-screen table of outdated packages built on ratatui/crossterm. The
//! loop blocks on the next terminal event; all state changes happen in
//! [`App::handle_key`].

mod app;
mod view;

pub use app::{render_rows, App, AppState, Outcome, RowView};

use crate::domain::OutdatedEntry;
use crate::error::UiError;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::io::{self, IsTerminal};

/// Show the selection list for `entries` until the user confirms or quits.
///
/// Fails with [`UiError::Init`] when stdout is not a terminal.
pub fn run(entries: Vec<OutdatedEntry>) -> Result<Outcome, UiError> {
    if !io::stdout().is_terminal() {
        return Err(UiError::Init(io::Error::other("stdout is not a terminal")));
    }

    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            ratatui::restore();
            return Err(UiError::Init(e));
        }
    };

    let mut app = App::new(entries);
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();

    result.map(|()| app.into_outcome())
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), UiError> {
    while !app.is_finished() {
        terminal
            .draw(|frame| view::render(frame, app))
            .map_err(UiError::Draw)?;

        if let Event::Key(key) = event::read().map_err(UiError::Event)? {
            app.handle_key(key);
        }
    }
    Ok(())
}
