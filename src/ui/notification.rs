//! Toast notification that slides in from the right edge

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_HEIGHT: u16 = 3;

/// Area of the toast for a given visibility; None while fully off screen
fn toast_area(area: Rect, message: &str, visibility: f32) -> Option<Rect> {
    let full_width = (message.chars().count() as u16 + 4).min(area.width);
    let shown = (f32::from(full_width) * visibility.clamp(0.0, 1.0)).round() as u16;
    if shown == 0 || area.height < TOAST_HEIGHT {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - shown,
        y: area.y + 1,
        width: shown,
        height: TOAST_HEIGHT,
    })
}

pub fn draw(frame: &mut Frame, area: Rect, notification: &Notification, now: Instant) {
    let Some(toast) = toast_area(area, &notification.message, notification.visibility(now)) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Clear, toast);
    frame.render_widget(
        Paragraph::new(format!(" {}", notification.message)).block(block),
        toast,
    );
}
