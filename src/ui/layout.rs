//! Layout components (navbar, menu, status bar)

use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, WIDE_LAYOUT_COLUMNS};
use crate::state::{ScrollState, Section, View};
use crate::submission::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Split the screen into navbar (when shown), content and status bar
pub fn create_layout(area: Rect, navbar_visible: bool) -> (Option<Rect>, Rect, Rect) {
    let navbar_height = if navbar_visible {
        ScrollState::NAVBAR_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(navbar_height), // Navbar
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let navbar = navbar_visible.then_some(chunks[0]);
    (navbar, chunks[1], chunks[2])
}

/// Section the navbar marks as current
fn current_section(app: &App) -> Section {
    match app.state.current_view {
        View::Contact => Section::Contact,
        _ => Section::at(app.state.scroll.offset),
    }
}

/// Draw the navbar: site title, section links and the language toggle
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.state.locale;
    let scrolled = app.state.current_view == View::Page && app.state.scroll.is_scrolled();

    // Compact "scrolled" style once the page moves off the top
    let (border_style, background) = if scrolled {
        (Style::default().fg(Color::Green), Style::default().bg(Color::Black))
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.text("site.title")),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    if area.width > WIDE_LAYOUT_COLUMNS {
        let current = current_section(app);
        for section in Section::ALL {
            spans.push(Span::raw(" "));
            let style = if section == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(app.text(section.nav_key()), style));
        }
    } else {
        let marker = if app.state.menu.open { "✕" } else { "☰" };
        spans.push(Span::styled(
            format!("  {marker} m:{}", app.text("nav.menu")),
            Style::default().fg(Color::Yellow),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(background);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    // Language toggle shows the language it switches to
    let toggle_key = if app.state.current_view == View::Contact {
        "^L"
    } else {
        "l"
    };
    let toggle = format!(" {toggle_key}:{} ", locale.toggle().native_name());
    let width = toggle.chars().count() as u16;
    if area.width > width + 2 {
        let toggle_area = Rect {
            x: area.x + area.width - width - 1,
            y: area.y + 1,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(toggle).style(Style::default().fg(Color::Cyan)),
            toggle_area,
        );
    }
}

/// Draw the collapsible menu over the top-right of the content
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let width = 28.min(area.width);
    let height = (Section::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(idx, section)| {
            let style = if idx == app.state.menu.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {} ", app.text(section.nav_key()))).style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", app.text("nav.menu")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(List::new(items).block(block), menu_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let state = app.coordinator.state();
    let indicator = match state {
        SubmissionState::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionState::Submitting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        SubmissionState::Success => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    spans.push(indicator);
    if state != SubmissionState::Idle {
        spans.push(Span::styled(
            format!("{} | ", app.text(&format!("state.{}", state.label()))),
            Style::default().fg(Color::Gray),
        ));
    }

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Quit hint on the right
    let quit_hint = format!(" {} ", app.text("hints.quit"));
    let quit_width = quit_hint.chars().count() as u16;

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view, in the active language
fn get_view_hints(app: &App) -> String {
    if app.state.menu.open {
        return app.text("hints.menu");
    }
    match app.state.current_view {
        View::Splash => app.text("hints.splash"),
        View::Page => {
            let mut hints = app.text("hints.page");
            if app.state.scroll.back_to_top_visible() {
                hints.push_str("  ");
                hints.push_str(&app.text("hints.page.top"));
            }
            hints
        }
        View::Contact => app.catalog.format(
            "hints.contact",
            app.state.locale,
            &[("shortcut", SUBMIT_SHORTCUT)],
        ),
    }
}
