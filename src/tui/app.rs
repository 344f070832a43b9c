//! Selection state machine for the interactive list
//!
//! `App` owns the entries and the selection. Key events move it from
//! `Browsing` to `Confirmed` or `Cancelled`; nothing here performs I/O, so the
//! whole key handling is testable without a terminal.

use crate::domain::{OutdatedEntry, SelectionSet, VersionChangeType};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::TableState;

/// Rows moved by PageUp/PageDown until the first frame reports its height
const DEFAULT_PAGE_ROWS: usize = 10;

/// Interactive session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Moving the cursor and toggling packages
    Browsing,
    /// User asked to upgrade the selection
    Confirmed,
    /// User quit without upgrading
    Cancelled,
}

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Install the given selection
    Confirmed(SelectionSet),
    /// Exit without side effects
    Cancelled,
}

/// Read-only projection of one entry for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Whether the package is marked for upgrade
    pub selected: bool,
    /// Package name
    pub name: String,
    /// Installed version
    pub current: String,
    /// Latest published version
    pub latest: String,
    /// Whether the package is outside `dependencies`
    pub is_dev: bool,
    /// Kind of version bump from current to latest
    pub change: VersionChangeType,
}

impl RowView {
    /// Cell texts for the `?`, `Name`, `Current`, `Latest`, `Dev Dep` columns
    pub fn cells(&self) -> [String; 5] {
        [
            marker(self.selected).to_string(),
            self.name.clone(),
            self.current.clone(),
            self.latest.clone(),
            marker(self.is_dev).to_string(),
        ]
    }
}

fn marker(flag: bool) -> &'static str {
    if flag {
        "x"
    } else {
        ""
    }
}

/// Project entries and selection into rows, keeping entry order
pub fn render_rows(entries: &[OutdatedEntry], selection: &SelectionSet) -> Vec<RowView> {
    entries
        .iter()
        .map(|entry| RowView {
            selected: selection.contains(&entry.name),
            name: entry.name.clone(),
            current: entry.current.clone(),
            latest: entry.latest.clone(),
            is_dev: entry.is_dev,
            change: entry.change_type(),
        })
        .collect()
}

/// Interactive list state
#[derive(Debug)]
pub struct App {
    entries: Vec<OutdatedEntry>,
    selection: SelectionSet,
    state: AppState,
    pub(crate) table_state: TableState,
    pub(crate) page_rows: usize,
}

impl App {
    /// Start browsing `entries` with nothing selected and the cursor on the
    /// first row (no cursor when empty)
    pub fn new(entries: Vec<OutdatedEntry>) -> Self {
        let cursor = if entries.is_empty() { None } else { Some(0) };
        Self {
            entries,
            selection: SelectionSet::new(),
            state: AppState::Browsing,
            table_state: TableState::default().with_selected(cursor),
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }

    pub fn entries(&self) -> &[OutdatedEntry] {
        &self.entries
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Index of the highlighted row
    pub fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Returns true once the session reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.state != AppState::Browsing
    }

    /// Rows for the current selection
    pub fn rows(&self) -> Vec<RowView> {
        render_rows(&self.entries, &self.selection)
    }

    /// Apply one key event. Keys after a terminal state are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Windows reports release events too
        if key.kind != KeyEventKind::Press || self.is_finished() {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state = AppState::Cancelled;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.state = AppState::Cancelled,
            KeyCode::Enter => self.state = AppState::Confirmed,
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-(self.page_rows.max(1) as isize)),
            KeyCode::PageDown => self.move_cursor(self.page_rows.max(1) as isize),
            KeyCode::Home | KeyCode::Char('g') => self.jump_to(0),
            KeyCode::End | KeyCode::Char('G') => self.jump_to(self.entries.len().saturating_sub(1)),
            _ => {}
        }
    }

    /// Consume the app, handing the selection to the caller on confirm
    pub fn into_outcome(self) -> Outcome {
        match self.state {
            AppState::Confirmed => Outcome::Confirmed(self.selection),
            AppState::Browsing | AppState::Cancelled => Outcome::Cancelled,
        }
    }

    fn toggle_current(&mut self) {
        if let Some(entry) = self.cursor().and_then(|i| self.entries.get(i)) {
            self.selection.toggle(&entry.name);
        }
    }

    /// Move by `delta` rows, clamping at both ends
    fn move_cursor(&mut self, delta: isize) {
        let Some(current) = self.cursor() else {
            return;
        };
        let last = self.entries.len().saturating_sub(1) as isize;
        let next = (current as isize + delta).clamp(0, last);
        self.table_state.select(Some(next as usize));
    }

    fn jump_to(&mut self, index: usize) {
        if self.entries.is_empty() {
            return;
        }
        self.table_state.select(Some(index.min(self.entries.len() - 1)));
    }
}
