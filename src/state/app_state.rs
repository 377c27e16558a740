//! Application state definitions

use super::forms::ContactForm;
use super::notification::Notification;
use super::page::{MenuState, RevealState, ScrollState, YogaType};
use crate::i18n::Locale;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Intro screen with logo animation
    Splash,
    /// Scrolling page with the informational sections
    #[default]
    Page,
    /// Contact form
    Contact,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Active display language; changed only by the language toggle
    pub locale: Locale,
    pub scroll: ScrollState,
    pub menu: MenuState,
    pub reveal: RevealState,
    /// Highlighted card in the Types section
    pub selected_card: usize,
    pub contact_form: ContactForm,
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn selected_yoga_type(&self) -> YogaType {
        YogaType::ALL[self.selected_card.min(YogaType::ALL.len() - 1)]
    }

    pub fn next_card(&mut self) {
        self.selected_card = (self.selected_card + 1) % YogaType::ALL.len();
    }

    pub fn prev_card(&mut self) {
        self.selected_card = self
            .selected_card
            .checked_sub(1)
            .unwrap_or(YogaType::ALL.len() - 1);
    }
}
