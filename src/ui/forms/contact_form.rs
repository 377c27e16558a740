//! Contact form rendering

use super::field_renderer::{draw_field, ERROR_ROWS};
use crate::app::App;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line input box plus its error row
const FIELD_HEIGHT: u16 = 3 + ERROR_ROWS;

/// Draw the contact form with its submit button and status banner
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    let block = Block::default()
        .title(format!(" {} ", app.text("contact.title")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Success banner
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone
            Constraint::Min(4 + ERROR_ROWS),   // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    if let Some(banner) = app.success_banner() {
        frame.render_widget(
            Paragraph::new(Line::from(format!("✔ {banner}")).centered()).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            chunks[0],
        );
    }

    for index in 0..4 {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[index + 1],
                field,
                &app.text(&field.label_key),
                &app.text(&field.placeholder_key()),
                form.active_field() == index,
            );
        }
    }

    // Disabled with a loading label while a submission is in flight
    let busy = app.coordinator.is_busy();
    let label = if busy {
        app.text("form.sending")
    } else {
        app.text("form.submit")
    };
    let button_width = (label.chars().count() as u16 + 6).min(chunks[5].width);
    let button_area = Rect {
        x: chunks[5].x + (chunks[5].width - button_width) / 2,
        width: button_width,
        ..chunks[5]
    };
    render_button(
        frame,
        button_area,
        &label,
        form.is_submit_row_active(),
        !busy,
    );
}
