//! Scrolling page with the informational sections

use crate::app::App;
use crate::state::{Section, YogaType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Style for text in a section that has not scrolled into view yet
const HIDDEN: Style = Style::new().fg(Color::DarkGray);

/// Pad or cut section lines to the rows the section occupies
fn fit(mut lines: Vec<Line<'static>>, section: Section) -> Vec<Line<'static>> {
    let height = section.height() as usize;
    lines.truncate(height);
    lines.resize(height, Line::default());
    lines
}

fn title(app: &App, key: &str, revealed: bool) -> Line<'static> {
    let style = if revealed {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        HIDDEN
    };
    Line::from(Span::styled(format!("  {}", app.text(key)), style))
}

fn body(text: String, revealed: bool) -> Line<'static> {
    let style = if revealed { Style::default() } else { HIDDEN };
    Line::from(Span::styled(format!("  {text}"), style))
}

fn home_lines(app: &App, revealed: bool) -> Vec<Line<'static>> {
    let (headline, accent) = if revealed {
        (
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (HIDDEN, HIDDEN)
    };
    vec![
        Line::default(),
        Line::from(Span::styled(app.text("hero.title"), headline)).centered(),
        Line::from(app.text("hero.subtitle")).centered(),
        Line::default(),
        Line::from(Span::styled(
            format!("[ x: {} ]", app.text("hero.cta")),
            accent,
        ))
        .centered(),
    ]
}

fn about_lines(app: &App, revealed: bool) -> Vec<Line<'static>> {
    let mut lines = vec![title(app, "about.title", revealed), Line::default()];
    lines.extend(
        app.text("about.body")
            .lines()
            .map(|l| body(l.to_string(), revealed)),
    );
    lines
}

fn types_lines(app: &App, revealed: bool) -> Vec<Line<'static>> {
    let mut lines = vec![title(app, "types.title", revealed), Line::default()];
    let selected = app.state.selected_yoga_type();

    for yoga_type in YogaType::ALL {
        let is_selected = yoga_type == selected;
        let name_style = match (revealed, is_selected) {
            (false, _) => HIDDEN,
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::BOLD),
        };
        let marker = if is_selected { "▶" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("  {marker} {}", app.text(yoga_type.name_key())),
            name_style,
        )));
        lines.push(body(format!("    {}", app.text(yoga_type.body_key())), revealed));
        if is_selected {
            lines.push(Line::from(Span::styled(
                format!("    [Enter] {}", app.text("types.learn-more")),
                if revealed {
                    Style::default().fg(Color::Yellow)
                } else {
                    HIDDEN
                },
            )));
        } else {
            lines.push(Line::default());
        }
        lines.push(Line::default());
    }
    lines
}

fn benefits_lines(app: &App, revealed: bool) -> Vec<Line<'static>> {
    let mut lines = vec![title(app, "benefits.title", revealed), Line::default()];
    for key in ["benefits.physical", "benefits.mental", "benefits.spiritual"] {
        lines.push(body(format!("• {}", app.text(key)), revealed));
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            app.text("footer.copyright"),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );
    lines
}

/// Draw the page scrolled to the current offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for section in Section::SCROLLED {
        let revealed = app.state.reveal.is_revealed(section);
        let section_lines = match section {
            Section::Home => home_lines(app, revealed),
            Section::About => about_lines(app, revealed),
            Section::Types => types_lines(app, revealed),
            Section::Benefits => benefits_lines(app, revealed),
            Section::Contact => Vec::new(),
        };
        lines.extend(fit(section_lines, section));
    }

    let paragraph = Paragraph::new(lines).scroll((app.state.scroll.offset, 0));
    frame.render_widget(paragraph, area);

    if app.state.scroll.back_to_top_visible() {
        draw_back_to_top(frame, area, app);
    }
}

/// Back-to-top control in the bottom-right corner
fn draw_back_to_top(frame: &mut Frame, area: Rect, app: &App) {
    let label = format!(" ↑ t:{} ", app.text("back-to-top"));
    let width = (label.chars().count() as u16).min(area.width);
    if area.height == 0 {
        return;
    }
    let button_area = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - 1,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(label).style(Style::default().fg(Color::Black).bg(Color::Green)),
        button_area,
    );
}
