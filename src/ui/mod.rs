//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod notification;
mod page;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.in_splash() {
        if let Some(ref splash_state) = app.splash_state {
            splash::draw(
                frame,
                area,
                splash_state,
                &app.text("site.title"),
                &app.text("hints.splash"),
            );
        }
        return;
    }

    let navbar_visible =
        app.state.current_view == View::Contact || app.state.scroll.navbar_visible();
    let (navbar_area, content_area, status_area) = layout::create_layout(area, navbar_visible);

    match app.state.current_view {
        View::Splash => {}
        View::Page => page::draw(frame, content_area, app),
        View::Contact => forms::draw_contact(frame, content_area, app),
    }

    if let Some(navbar_area) = navbar_area {
        layout::draw_navbar(frame, navbar_area, app);
    }

    if app.state.menu.open {
        layout::draw_menu(frame, content_area, app);
    }

    if let Some(ref notification) = app.state.notification {
        notification::draw(frame, content_area, notification, Instant::now());
    }

    layout::draw_status_bar(frame, status_area, app);
}
