//! Application state and core logic

use crate::i18n::{Catalog, Locale, MessageKey};
use crate::platform::{SUBMIT_MODIFIER, WIDE_LAYOUT_COLUMNS};
use crate::state::{AppState, Form, Notification, ScrollState, Section, SplashState, View};
use crate::submission::{
    Completion, SubmissionCoordinator, SubmissionError, SubmissionOutcome, SubmissionTicket,
    SubmissionTimings, Submitter,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Rows scrolled by PageUp/PageDown
const PAGE_SCROLL: i32 = 10;

type CompletionMessage = (SubmissionTicket, Result<(), SubmissionError>);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Localized strings
    pub catalog: Catalog,
    /// Contact form submission workflow
    pub coordinator: SubmissionCoordinator,
    /// Transport that delivers accepted submissions
    submitter: Arc<dyn Submitter>,
    completions_tx: mpsc::UnboundedSender<CompletionMessage>,
    completions_rx: mpsc::UnboundedReceiver<CompletionMessage>,
    /// Whether the app should quit
    quit: bool,
    /// Intro animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// How long notifications stay up
    notification_display: Duration,
}

impl App {
    pub fn new(
        catalog: Catalog,
        locale: Locale,
        timings: SubmissionTimings,
        notification_display: Duration,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(locale);

        // Start with the intro animation
        state.current_view = View::Splash;

        Self {
            state,
            catalog,
            coordinator: SubmissionCoordinator::new(timings),
            submitter,
            completions_tx,
            completions_rx,
            quit: false,
            splash_state: Some(SplashState::new(Instant::now())),
            terminal_size: None,
            notification_display,
        }
    }

    /// Localized text in the active locale
    pub fn text(&self, key: &str) -> String {
        self.catalog.text(key, self.state.locale)
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Rows of page visible below the navbar and above the status bar
    fn viewport_height(&self) -> u16 {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        height.saturating_sub(1 + ScrollState::NAVBAR_HEIGHT)
    }

    fn observe_viewport(&mut self) {
        let height = self.viewport_height();
        self.state.reveal.observe(self.state.scroll.offset, height);
    }

    /// Advance animations, timers and finished submissions to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(ref mut splash) = self.splash_state {
            let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
            splash.update(now, height);
            if splash.is_complete() {
                self.finish_splash();
            }
        }

        while let Ok((ticket, result)) = self.completions_rx.try_recv() {
            self.finish_submission(ticket, result, now);
        }

        if self.coordinator.tick(now) {
            tracing::debug!("Success banner dismissed");
        }

        if self
            .state
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.state.notification = None;
        }
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Page;
        self.observe_viewport();
    }

    /// Show a toast notification
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.state.notification = Some(Notification::new(
            message,
            now,
            self.notification_display,
        ));
    }

    /// Handle terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        if width > WIDE_LAYOUT_COLUMNS {
            self.state.menu.close();
        }
        self.observe_viewport();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();

        if self.in_splash() {
            if let Some(ref mut splash) = self.splash_state {
                splash.skip();
            }
            self.finish_splash();
            return;
        }

        if self.state.menu.open {
            self.handle_menu_key(key);
            return;
        }

        match self.state.current_view {
            View::Splash => {}
            View::Page => self.handle_page_key(key, now),
            View::Contact => self.handle_contact_key(key, now),
        }
    }

    /// Switch every piece of localized text to the other language
    pub fn toggle_language(&mut self) {
        self.state.locale = self.state.locale.toggle();
        tracing::info!("Language switched to {}", self.state.locale.code());
        self.state
            .contact_form
            .relocalize(self.state.locale, &self.catalog);
    }

    /// Go to a section, switching views when it lives outside the page
    pub fn navigate_to(&mut self, section: Section) {
        self.state.menu.close();
        if section == Section::Contact {
            self.state.reveal.reveal(Section::Contact);
            self.state.current_view = View::Contact;
            return;
        }
        if self.state.current_view == View::Contact {
            self.leave_contact();
        }
        self.state.current_view = View::Page;
        self.state.scroll.scroll_to_section(section);
        self.observe_viewport();
    }

    fn leave_contact(&mut self) {
        self.coordinator.dismiss();
        self.state.current_view = View::Page;
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.menu.next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.menu.prev(),
            KeyCode::Enter => {
                let section = self.state.menu.selected_section();
                self.navigate_to(section);
            }
            KeyCode::Char('m') | KeyCode::Esc => self.state.menu.close(),
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::Char('d') | KeyCode::PageDown => self.scroll_by(PAGE_SCROLL),
            KeyCode::Char('u') | KeyCode::PageUp => self.scroll_by(-PAGE_SCROLL),
            KeyCode::Char('t') | KeyCode::Home => {
                self.state.scroll.to_top();
                self.observe_viewport();
            }
            KeyCode::Char('m') => self.state.menu.toggle(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('x') => self.navigate_to(Section::Types),
            KeyCode::Char('c') => self.navigate_to(Section::Contact),
            KeyCode::Left | KeyCode::Char('[') => self.state.prev_card(),
            KeyCode::Right | KeyCode::Char(']') => self.state.next_card(),
            KeyCode::Enter => self.learn_more(now),
            _ => {}
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        self.state.scroll.scroll_by(delta);
        self.observe_viewport();
    }

    /// Placeholder detail view: announce that details are coming
    fn learn_more(&mut self, now: Instant) {
        let locale = self.state.locale;
        let name = self
            .catalog
            .text(self.state.selected_yoga_type().name_key(), locale);
        let message = self
            .catalog
            .format("learn-more-coming-soon", locale, &[("name", &name)]);
        self.notify(message, now);
    }

    fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) {
        let locale = self.state.locale;
        let on_submit_row = self.state.contact_form.is_submit_row_active();

        match key.code {
            KeyCode::Esc => self.leave_contact(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form(now)
            }
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.submit_contact_form(now)
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_language()
            }
            KeyCode::Tab => {
                self.state.contact_form.blur_active(locale, &self.catalog);
                self.state.contact_form.next_field();
            }
            KeyCode::BackTab => {
                self.state.contact_form.blur_active(locale, &self.catalog);
                self.state.contact_form.prev_field();
            }
            KeyCode::Enter if on_submit_row => self.submit_contact_form(now),
            KeyCode::Enter => {
                let form = &mut self.state.contact_form;
                match form.get_active_field_mut() {
                    Some(field) if field.is_multiline => field.push_char('\n'),
                    _ => {
                        form.blur_active(locale, &self.catalog);
                        form.next_field();
                    }
                }
            }
            KeyCode::Char(c)
                if !on_submit_row && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                if let Some(field) = self.state.contact_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_submit_row => {
                if let Some(field) = self.state.contact_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Validate the form and, when every field passes, start the submission
    pub fn submit_contact_form(&mut self, now: Instant) {
        let locale = self.state.locale;
        let inputs = self.state.contact_form.inputs();

        match self.coordinator.submit(&inputs, locale, &self.catalog) {
            SubmissionOutcome::Rejected { fields } => {
                self.state.contact_form.apply_results(&fields);
            }
            SubmissionOutcome::AlreadyInProgress => {
                let message = self
                    .catalog
                    .message(MessageKey::SubmissionInProgress, locale);
                self.notify(message, now);
            }
            SubmissionOutcome::Accepted {
                ticket,
                fields,
                submission,
            } => {
                self.state.contact_form.apply_results(&fields);
                let submitter = Arc::clone(&self.submitter);
                let tx = self.completions_tx.clone();
                tokio::spawn(async move {
                    // A panicking transport must still settle the form
                    let result = tokio::spawn(async move { submitter.submit(submission).await })
                        .await
                        .unwrap_or_else(|err| {
                            tracing::error!("Submission task failed: {err}");
                            Err(SubmissionError::Interrupted)
                        });
                    if tx.send((ticket, result)).is_err() {
                        tracing::debug!("Submission finished after the app closed");
                    }
                });
            }
        }
    }

    fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmissionError>,
        now: Instant,
    ) {
        let locale = self.state.locale;
        match self
            .coordinator
            .complete(ticket, result, locale, &self.catalog, now)
        {
            Completion::Succeeded => self.state.contact_form.reset(),
            Completion::Failed { message } => self.notify(message, now),
            Completion::Stale => {}
        }
    }

    /// Text of the success banner, while it is showing
    pub fn success_banner(&self) -> Option<String> {
        self.coordinator
            .success_message(self.state.locale, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{MockSubmitter, SimulatedSubmitter, SubmissionState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(submitter: Arc<dyn Submitter>) -> App {
        let mut app = App::new(
            Catalog::embedded().unwrap(),
            Locale::En,
            SubmissionTimings::default(),
            Duration::from_secs(3),
            submitter,
        );
        app.terminal_size = Some((24, 80));
        app
    }

    fn app() -> App {
        app_with(Arc::new(SimulatedSubmitter::new(Duration::ZERO)))
    }

    /// App past the intro, showing the contact form
    fn contact_app(submitter: Arc<dyn Submitter>) -> App {
        let mut app = app_with(submitter);
        app.handle_key(key(KeyCode::Char(' ')));
        app.navigate_to(Section::Contact);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_valid_form(app: &mut App) {
        type_text(app, "Asha Patil");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "asha@example.com");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab)); // phone stays empty
        type_text(app, "Please tell me about evening classes.");
    }

    mod splash {
        use super::*;

        #[test]
        fn test_starts_in_splash() {
            let app = app();
            assert!(app.in_splash());
            assert!(app.splash_state.is_some());
        }

        #[test]
        fn test_any_key_skips_splash() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('z')));
            assert!(!app.in_splash());
            assert_eq!(app.state.current_view, View::Page);
            assert!(app.splash_state.is_none());
            assert!(app.state.reveal.is_revealed(Section::Home));
        }

        #[test]
        fn test_tick_finishes_splash_after_animation() {
            let mut app = app();
            app.tick(Instant::now() + Duration::from_secs(3));
            assert_eq!(app.state.current_view, View::Page);
        }
    }

    mod page {
        use super::*;

        fn page_app() -> App {
            let mut app = app();
            app.handle_key(key(KeyCode::Esc));
            app
        }

        #[test]
        fn test_q_quits() {
            let mut app = page_app();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_scrolling_reveals_sections() {
            let mut app = page_app();
            assert!(!app.state.reveal.is_revealed(Section::Benefits));
            for _ in 0..3 {
                app.handle_key(key(KeyCode::PageDown));
            }
            assert!(app.state.reveal.is_revealed(Section::Benefits));
        }

        #[test]
        fn test_back_to_top() {
            let mut app = page_app();
            app.handle_key(key(KeyCode::PageDown));
            app.handle_key(key(KeyCode::PageDown));
            assert!(app.state.scroll.back_to_top_visible());
            app.handle_key(key(KeyCode::Char('t')));
            assert_eq!(app.state.scroll.offset, 0);
        }

        #[test]
        fn test_menu_navigation_closes_menu() {
            let mut app = page_app();
            app.handle_key(key(KeyCode::Char('m')));
            assert!(app.state.menu.open);

            // Home -> About -> Types
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Enter));

            assert!(!app.state.menu.open);
            assert_eq!(
                app.state.scroll.offset,
                Section::Types.offset() - ScrollState::NAVBAR_HEIGHT
            );
            assert!(app.state.reveal.is_revealed(Section::Types));
        }

        #[test]
        fn test_menu_contact_entry_opens_form() {
            let mut app = page_app();
            app.handle_key(key(KeyCode::Char('m')));
            app.handle_key(key(KeyCode::Up)); // wraps to Contact
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.current_view, View::Contact);
        }

        #[test]
        fn test_wide_resize_closes_menu() {
            let mut app = page_app();
            app.handle_key(key(KeyCode::Char('m')));
            app.handle_resize(80, 24);
            assert!(app.state.menu.open);
            app.handle_resize(120, 40);
            assert!(!app.state.menu.open);
        }

        #[test]
        fn test_language_toggle() {
            let mut app = page_app();
            assert_eq!(app.text("nav.home"), "Home");
            app.handle_key(key(KeyCode::Char('l')));
            assert_eq!(app.state.locale, Locale::Mr);
            assert_eq!(app.text("nav.home"), "मुख्यपृष्ठ");
            app.handle_key(key(KeyCode::Char('l')));
            assert_eq!(app.state.locale, Locale::En);
        }

        #[test]
        fn test_learn_more_shows_localized_notification() {
            let mut app = page_app();
            app.handle_key(key(KeyCode::Right)); // Vinyasa
            app.handle_key(key(KeyCode::Enter));
            let notification = app.state.notification.as_ref().unwrap();
            assert_eq!(
                notification.message,
                "Learn more about Vinyasa Yoga coming soon!"
            );
        }

        #[test]
        fn test_notification_expires_on_tick() {
            let mut app = page_app();
            let now = Instant::now();
            app.notify("hello", now);
            app.tick(now + Duration::from_secs(1));
            assert!(app.state.notification.is_some());
            app.tick(now + Duration::from_secs(4));
            assert!(app.state.notification.is_none());
        }
    }

    mod contact_form {
        use super::*;

        #[test]
        fn test_tab_validates_field_being_left() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            type_text(&mut app, "A");
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(
                app.state.contact_form.name.error.as_deref(),
                Some("Name must be at least 2 characters long")
            );
            assert_eq!(app.state.contact_form.active_field_index, 1);
        }

        #[test]
        fn test_typing_clears_field_error() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.state.contact_form.name.has_error());
            type_text(&mut app, "Al");
            assert!(!app.state.contact_form.name.has_error());
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            app.state.contact_form.set_active_field(3);
            type_text(&mut app, "Hi");
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.contact_form.message.as_text(), "Hi\n");
        }

        #[test]
        fn test_invalid_submit_shows_all_errors() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            app.handle_key(ctrl('s'));
            assert_eq!(app.state.contact_form.error_count(), 3);
            assert_eq!(app.coordinator.state(), SubmissionState::Idle);
        }

        #[test]
        fn test_language_toggle_relocalizes_errors_only() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            app.handle_key(ctrl('s'));
            app.handle_key(ctrl('l'));
            assert_eq!(app.state.locale, Locale::Mr);
            assert_eq!(app.state.contact_form.error_count(), 3);
            assert_eq!(
                app.state.contact_form.name.error.as_deref(),
                Some("हे फील्ड आवश्यक आहे")
            );
            assert!(!app.state.contact_form.phone.has_error());
        }

        #[test]
        fn test_escape_returns_to_page() {
            let mut app = contact_app(Arc::new(MockSubmitter::new()));
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.current_view, View::Page);
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_successful_submission_flow() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .withf(|s| s.value("email") == Some("asha@example.com"))
                .returning(|_| Ok(()));
            let mut app = contact_app(Arc::new(mock));
            fill_valid_form(&mut app);

            let now = Instant::now();
            app.submit_contact_form(now);
            assert_eq!(app.coordinator.state(), SubmissionState::Submitting);

            let (ticket, result) = app.completions_rx.recv().await.unwrap();
            app.finish_submission(ticket, result, now);

            assert_eq!(app.coordinator.state(), SubmissionState::Success);
            assert_eq!(
                app.success_banner().as_deref(),
                Some("Thank you! Your message has been sent successfully.")
            );
            assert!(app.state.contact_form.name.as_text().is_empty());

            app.toggle_language();
            assert_eq!(
                app.success_banner().as_deref(),
                Some("धन्यवाद! आपला संदेश यशस्वीरित्या पाठवला गेला आहे.")
            );
            app.toggle_language();

            app.tick(now + Duration::from_secs(5));
            assert_eq!(app.coordinator.state(), SubmissionState::Idle);
            assert!(app.success_banner().is_none());
        }

        #[tokio::test]
        async fn test_second_submit_while_submitting_notifies() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = contact_app(Arc::new(mock));
            fill_valid_form(&mut app);

            let now = Instant::now();
            app.submit_contact_form(now);
            app.submit_contact_form(now);

            assert_eq!(app.coordinator.state(), SubmissionState::Submitting);
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Your message is already being sent.")
            );

            let (ticket, result) = app.completions_rx.recv().await.unwrap();
            app.finish_submission(ticket, result, now);
            assert_eq!(app.coordinator.state(), SubmissionState::Success);
        }

        #[tokio::test]
        async fn test_failed_submission_keeps_values_and_notifies() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmissionError::Transport("offline".to_string())));
            let mut app = contact_app(Arc::new(mock));
            fill_valid_form(&mut app);

            let now = Instant::now();
            app.submit_contact_form(now);
            let (ticket, result) = app.completions_rx.recv().await.unwrap();
            app.finish_submission(ticket, result, now);

            assert_eq!(app.coordinator.state(), SubmissionState::Idle);
            assert_eq!(app.state.contact_form.name.as_text(), "Asha Patil");
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Sorry, your message could not be sent. Please try again.")
            );
        }

        #[tokio::test]
        async fn test_panicking_transport_settles_form_as_failed() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit()
                .returning(|_| panic!("transport crashed"));
            let mut app = contact_app(Arc::new(mock));
            fill_valid_form(&mut app);

            let now = Instant::now();
            app.submit_contact_form(now);
            let (ticket, result) = app.completions_rx.recv().await.unwrap();
            assert!(matches!(result, Err(SubmissionError::Interrupted)));
            app.finish_submission(ticket, result, now);

            assert_eq!(app.coordinator.state(), SubmissionState::Idle);
            assert_eq!(app.state.contact_form.name.as_text(), "Asha Patil");
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Sorry, your message could not be sent. Please try again.")
            );
        }

        #[tokio::test]
        async fn test_leaving_form_dismisses_success_banner() {
            let mut app = contact_app(Arc::new(SimulatedSubmitter::new(Duration::ZERO)));
            fill_valid_form(&mut app);

            let now = Instant::now();
            app.submit_contact_form(now);
            let (ticket, result) = app.completions_rx.recv().await.unwrap();
            app.finish_submission(ticket, result, now);
            assert!(app.coordinator.has_pending_dismiss());

            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.coordinator.state(), SubmissionState::Idle);
            assert!(!app.coordinator.has_pending_dismiss());
        }
    }
}
