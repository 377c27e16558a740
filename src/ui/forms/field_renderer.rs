//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs below its box for the error message
pub const ERROR_ROWS: u16 = 1;

/// Draw a form field: bordered input with its error line underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    label: &str,
    placeholder: &str,
    is_active: bool,
) {
    let input_area = Rect {
        height: area.height.saturating_sub(ERROR_ROWS),
        ..area
    };

    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Green),
    );

    let content = if field.as_text().is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(
                placeholder.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::raw(field.as_text()), cursor]))
    };

    let title = if field.required {
        format!(" {label} * ")
    } else {
        format!(" {label} ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        content.wrap(Wrap { trim: false }).block(block),
        input_area,
    );

    if let Some(ref error) = field.error {
        let error_area = Rect {
            y: input_area.y + input_area.height,
            height: ERROR_ROWS.min(area.height),
            ..area
        };
        frame.render_widget(
            Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }
}
