//! Table rendering for the interactive list

use super::app::{App, RowView};
use crate::domain::VersionChangeType;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};

const HEADERS: [&str; 5] = ["?", "Name", "Current", "Latest", "Dev Dep"];
const WIDTHS: [u16; 5] = [4, 30, 10, 10, 7];

const BORDER: Color = Color::Indexed(240);
const HIGHLIGHT_FG: Color = Color::Indexed(229);
const HIGHLIGHT_BG: Color = Color::Indexed(57);

/// Draw the table and the key help footer
pub fn render(frame: &mut Frame, app: &mut App) {
    let [table_area, footer_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    // borders + header row
    app.page_rows = usize::from(table_area.height.saturating_sub(3)).max(1);

    let rows: Vec<Row> = app.rows().iter().map(table_row).collect();
    let header = Row::new(HEADERS).style(Style::new().add_modifier(Modifier::BOLD));
    let table = Table::new(rows, WIDTHS.map(Constraint::Length))
        .header(header)
        .block(Block::bordered().border_style(Style::new().fg(BORDER)))
        .row_highlight_style(Style::new().fg(HIGHLIGHT_FG).bg(HIGHLIGHT_BG));

    frame.render_stateful_widget(table, table_area, &mut app.table_state);
    frame.render_widget(footer(app), footer_area);
}

fn table_row(row: &RowView) -> Row<'static> {
    let [selected, name, current, latest, dev] = row.cells();
    Row::new(vec![
        Cell::from(selected),
        Cell::from(name),
        Cell::from(current),
        Cell::from(Span::styled(latest, change_style(row.change))),
        Cell::from(dev),
    ])
}

fn change_style(change: VersionChangeType) -> Style {
    match change {
        VersionChangeType::Major => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        VersionChangeType::Minor => Style::new().fg(Color::Yellow),
        VersionChangeType::Patch => Style::new().fg(Color::Green),
        VersionChangeType::Unknown => Style::new(),
    }
}

fn footer(app: &App) -> Paragraph<'static> {
    let dim = Style::new().fg(BORDER);
    let mut spans = vec![
        Span::styled(" space toggle  enter upgrade  q/esc quit", dim),
        Span::raw("  "),
        Span::raw(format!("{} selected", app.selection().len())),
    ];
    if app.entries().is_empty() {
        spans.push(Span::styled("  (nothing to upgrade)", dim));
    }
    Paragraph::new(Line::from(spans))
}
