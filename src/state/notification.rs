//! Toast notification animation state

use std::time::{Duration, Instant};

/// A transient message that slides in from the right edge and back out
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub shown_at: Instant,
    /// Time fully on screen, excluding the slide in and out
    pub display: Duration,
}

impl Notification {
    /// Duration of each slide animation
    pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

    pub fn new(message: impl Into<String>, shown_at: Instant, display: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at,
            display,
        }
    }

    /// How far the toast is on screen, 0.0 (hidden) to 1.0 (fully in)
    pub fn visibility(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let slide = Self::SLIDE_DURATION.as_secs_f32();

        if elapsed < Self::SLIDE_DURATION {
            simple_easing::cubic_out(elapsed.as_secs_f32() / slide)
        } else if elapsed < Self::SLIDE_DURATION + self.display {
            1.0
        } else {
            let out = elapsed - Self::SLIDE_DURATION - self.display;
            let progress = (out.as_secs_f32() / slide).min(1.0);
            1.0 - simple_easing::cubic_in(progress)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at)
            >= Self::SLIDE_DURATION * 2 + self.display
    }
}
