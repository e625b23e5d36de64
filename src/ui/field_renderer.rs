//! Field rendering: one bordered control per schema field

use crate::schema::FieldType;
use crate::state::{FieldInput, FieldState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies, including borders and its error line
pub fn field_height(field: &FieldState) -> u16 {
    let body = match field.schema.kind {
        FieldType::Textarea => 4,
        FieldType::Select => field.schema.options.len() as u16 + 1,
        FieldType::Radio => field.schema.options.len().max(1) as u16,
        _ => 1,
    };
    let error = if field.error.is_some() { 1 } else { 0 };
    body + error + 2
}

/// Draw one form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldState, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(format!(" {}", field.schema.label))];
    if field.schema.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if field.schema.kind == FieldType::Email {
        title.push(Span::styled(" (email)", Style::default().fg(Color::DarkGray)));
    }
    title.push(Span::raw(" "));

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = match field.schema.kind {
        FieldType::Select => select_lines(field, is_active),
        FieldType::Radio => radio_lines(field, is_active),
        FieldType::Textarea => textarea_lines(field, is_active),
        _ => text_lines(field, is_active),
    };

    if let Some(err) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("! {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn cursor_span(is_active: bool) -> Span<'static> {
    let glyph = if is_active { "▌" } else { "" };
    Span::styled(glyph, Style::default().fg(Color::Cyan))
}

/// Single-line input (text, email, and the unknown-kind fallback)
fn text_lines(field: &FieldState, is_active: bool) -> Vec<Line<'static>> {
    let value = match &field.input {
        FieldInput::Text(s) => s.clone(),
        FieldInput::Choice(_) => String::new(),
    };

    if value.is_empty() && !is_active {
        let hint = field.schema.placeholder.clone().unwrap_or_default();
        return vec![Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    vec![Line::from(vec![
        Span::styled(value, value_style(is_active)),
        cursor_span(is_active),
    ])]
}

/// Multi-line input
fn textarea_lines(field: &FieldState, is_active: bool) -> Vec<Line<'static>> {
    let value = match &field.input {
        FieldInput::Text(s) => s.clone(),
        FieldInput::Choice(_) => String::new(),
    };

    if value.is_empty() && !is_active {
        let hint = field.schema.placeholder.clone().unwrap_or_default();
        return vec![Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let style = value_style(is_active);
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span(true));
        }
    }
    lines
}

/// Dropdown rows: a leading empty placeholder entry, then one row per
/// option; nothing pre-selected
fn select_lines(field: &FieldState, is_active: bool) -> Vec<Line<'static>> {
    let selected = field.choice();
    let mut lines = vec![choice_row(
        "Select an option",
        selected.is_none(),
        is_active,
        true,
    )];
    for (i, opt) in field.schema.options.iter().enumerate() {
        lines.push(choice_row(
            &opt.label,
            selected == Some(i),
            is_active,
            false,
        ));
    }
    lines
}

/// One row per option, mutually exclusive, nothing pre-selected
fn radio_lines(field: &FieldState, is_active: bool) -> Vec<Line<'static>> {
    if field.schema.options.is_empty() {
        return vec![Line::from(Span::styled(
            "(no options)",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    let selected = field.choice();
    field
        .schema
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| choice_row(&opt.label, selected == Some(i), is_active, false))
        .collect()
}

fn choice_row(label: &str, is_selected: bool, is_active: bool, is_placeholder: bool) -> Line<'static> {
    let mark = if is_selected { "(•)" } else { "( )" };
    let style = if is_selected && is_active {
        Style::default().fg(Color::Cyan)
    } else if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("{mark} {label}"), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldOption, FormField};

    fn field(kind: FieldType, options: &[&str]) -> FieldState {
        FieldState::new(FormField {
            id: "f".to_string(),
            kind,
            label: "F".to_string(),
            required: false,
            placeholder: None,
            validation: None,
            options: options
                .iter()
                .map(|v| FieldOption {
                    value: v.to_string(),
                    label: v.to_string(),
                })
                .collect(),
        })
    }

    #[test]
    fn test_field_height_by_kind() {
        assert_eq!(field_height(&field(FieldType::Text, &[])), 3);
        assert_eq!(field_height(&field(FieldType::Email, &[])), 3);
        assert_eq!(field_height(&field(FieldType::Unknown, &[])), 3);
        assert_eq!(field_height(&field(FieldType::Textarea, &[])), 6);
        // Placeholder entry plus two options
        assert_eq!(field_height(&field(FieldType::Select, &["a", "b"])), 5);
        assert_eq!(field_height(&field(FieldType::Radio, &["a", "b"])), 4);
        // Radio with no options keeps one row for the notice
        assert_eq!(field_height(&field(FieldType::Radio, &[])), 3);
    }

    #[test]
    fn test_field_height_grows_with_error() {
        let mut f = field(FieldType::Text, &[]);
        assert_eq!(field_height(&f), 3);
        f.error = Some("nope".to_string());
        assert_eq!(field_height(&f), 4);
    }

    #[test]
    fn test_select_rows_lead_with_placeholder() {
        let f = field(FieldType::Select, &["a", "b"]);
        let lines = select_lines(&f, false);
        assert_eq!(lines.len(), 3);
        let first: String = lines[0].spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(first, "(•) Select an option");
        let second: String = lines[1].spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(second, "( ) a");
    }

    #[test]
    fn test_select_marks_chosen_option() {
        let mut f = field(FieldType::Select, &["a", "b"]);
        f.next_choice();
        let lines = select_lines(&f, false);
        let first: String = lines[0].spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(first, "( ) Select an option");
        let second: String = lines[1].spans.iter().map(|s| s.content.clone()).collect();
        assert_eq!(second, "(•) a");
    }

    #[test]
    fn test_radio_rows_have_no_placeholder() {
        let f = field(FieldType::Radio, &["low", "high"]);
        let lines = radio_lines(&f, false);
        assert_eq!(lines.len(), 2);
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.clone()).collect())
            .collect();
        assert_eq!(rendered, vec!["( ) low", "( ) high"]);
    }
}
