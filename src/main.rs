//! Yoga Awareness TUI - a bilingual terminal rendition of the yoga awareness site
//!
//! A Ratatui-based TUI that presents the site's sections in English or
//! Marathi and runs its contact form through validation and submission.

mod app;
mod config;
mod i18n;
mod platform;
mod state;
mod submission;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use config::{SiteConfig, LOCALE_ENV};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use i18n::Catalog;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use submission::{SimulatedSubmitter, Submitter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yoga_contact_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut app = build_app()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Load configuration and messages, and wire up the submission transport
fn build_app() -> Result<App> {
    let config = SiteConfig::load()?;

    let mut catalog = Catalog::embedded()?;
    if let Some(ref path) = config.messages_path {
        catalog.merge_file(path)?;
    }

    let locale = config.resolve_locale(std::env::var(LOCALE_ENV).ok().as_deref());
    let timings = config.timings();
    let submitter: Arc<dyn Submitter> = if config.simulate_failure() {
        tracing::info!("Simulated transport will fail every submission");
        Arc::new(SimulatedSubmitter::failing(timings.submit_delay))
    } else {
        Arc::new(SimulatedSubmitter::new(timings.submit_delay))
    };

    tracing::info!("Starting in {}", locale.code());
    Ok(App::new(
        catalog,
        locale,
        timings,
        config.notification_duration(),
        submitter,
    ))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    loop {
        app.tick(Instant::now());

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while anything is animating (16ms = ~60fps)
        let animating = app.in_splash() || app.state.notification.is_some();
        let poll_duration = if animating {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
