//! Form preview pane rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::{App, PaneFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the form preview pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.focus, PaneFocus::Form);
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Form Preview ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(preview) = &app.preview else {
        let placeholder = Paragraph::new("No schema yet: enter a valid form schema on the left")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        frame.render_widget(placeholder, inner);
        return;
    };

    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(1), // Description
        Constraint::Length(1), // Success banner
    ];
    for field in &preview.fields {
        constraints.push(Constraint::Length(field_height(field)));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        preview.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let description = Paragraph::new(Line::from(Span::styled(
        preview.description.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(description, chunks[1]);

    draw_success_banner(frame, chunks[2], preview.is_success());

    for (i, field) in preview.fields.iter().enumerate() {
        let is_active = is_focused && i == preview.active;
        draw_field(frame, chunks[3 + i], field, is_active);
    }
}

fn draw_success_banner(frame: &mut Frame, area: Rect, is_success: bool) {
    if is_success {
        let banner = Paragraph::new(Line::from(Span::styled(
            "✓ Form submitted successfully!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(banner, area);
    }
}
