//! Two-pane layout and the status bar

use crate::app::{App, PaneFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into editor (left) and preview (right) panes,
/// reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Schema editor
            Constraint::Percentage(50), // Form preview
        ])
        .split(chunks[0]);

    (panes[0], panes[1])
}

/// Submit shortcut display for the status bar
pub const SUBMIT_HINT: &str = "^S:submit";

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Parse indicator
    let parse_status = if app.editor.error.is_some() {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(parse_status);

    let hints = get_focus_hints(&app.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused pane
fn get_focus_hints(focus: &PaneFocus) -> String {
    match focus {
        PaneFocus::Editor => "Tab:form  arrows:move  type to edit".to_string(),
        PaneFocus::Form => format!("Tab:editor  ↑/↓:field  ←/→:choose  {SUBMIT_HINT}"),
    }
}
