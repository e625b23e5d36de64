//! Schema editor pane rendering

use crate::app::{App, PaneFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the schema editor pane: parse banner on top, text below
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.focus, PaneFocus::Editor);
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Schema (JSON) ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Parse banner
            Constraint::Min(0),    // Text
        ])
        .split(inner);

    let banner = match &app.editor.error {
        Some(err) => Line::from(Span::styled(
            format!("✗ {err}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "✓ Schema OK, preview is live",
            Style::default().fg(Color::Green),
        )),
    };
    frame.render_widget(Paragraph::new(banner), chunks[0]);

    draw_text(frame, chunks[1], app, is_focused);
}

/// Draw the editor text with a cursor glyph, scrolled so the cursor
/// line stays visible
fn draw_text(frame: &mut Frame, area: Rect, app: &App, is_focused: bool) {
    let (cursor_line, cursor_col) = app.editor.cursor_position();

    let text_style = if is_focused {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = app
        .editor
        .text()
        .split('\n')
        .enumerate()
        .map(|(i, l)| {
            if is_focused && i == cursor_line {
                let before: String = l.chars().take(cursor_col).collect();
                let after: String = l.chars().skip(cursor_col).collect();
                Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled("▌", Style::default().fg(Color::Cyan)),
                    Span::styled(after, text_style),
                ])
            } else {
                Line::from(Span::styled(l.to_string(), text_style))
            }
        })
        .collect();

    let height = area.height as usize;
    let scroll = if height > 0 && cursor_line + 1 > height {
        (cursor_line + 1 - height) as u16
    } else {
        0
    };

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
