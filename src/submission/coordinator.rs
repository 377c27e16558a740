//! Validate-then-submit workflow and its state machine
//!
//! ```text
//! Idle --submit(all valid)--> Submitting --ok--> Success --timeout--> Idle
//!                             Submitting --err--> Idle
//! ```
//!
//! Submit attempts while Submitting are rejected, not queued.

use super::scheduler::{Scheduler, TaskHandle};
use super::traits::SubmissionError;
use super::ContactSubmission;
use crate::i18n::{Catalog, Locale, MessageKey};
use crate::validation::{validate, FieldKind, FieldState};
use std::time::{Duration, Instant};

/// Lifecycle of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionState {
    pub fn can_transition_to(self, next: SubmissionState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Submitting)
                | (Self::Submitting, Self::Success)
                | (Self::Submitting, Self::Idle)
                | (Self::Success, Self::Idle)
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
        }
    }
}

/// Delays used by the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTimings {
    /// How long the simulated transport takes
    pub submit_delay: Duration,
    /// How long the success indicator stays up
    pub success_display: Duration,
}

impl Default for SubmissionTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_secs(2),
            success_display: Duration::from_secs(5),
        }
    }
}

/// Identifies one accepted submission so late completions can be discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// At least one field failed; every field's result is included
    Rejected { fields: Vec<FieldState> },
    /// A submission is already in flight; nothing changed
    AlreadyInProgress,
    /// All fields passed and the form is now Submitting
    Accepted {
        ticket: SubmissionTicket,
        fields: Vec<FieldState>,
        submission: ContactSubmission,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Now in Success; the banner text comes from [`SubmissionCoordinator::success_message`]
    Succeeded,
    Failed { message: String },
    /// The ticket no longer matches the in-flight submission
    Stale,
}

#[derive(Debug)]
enum Task {
    DismissSuccess,
}

#[derive(Debug)]
pub struct SubmissionCoordinator {
    state: SubmissionState,
    timings: SubmissionTimings,
    scheduler: Scheduler<Task>,
    dismiss: Option<TaskHandle>,
    in_flight: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl Default for SubmissionCoordinator {
    fn default() -> Self {
        Self::new(SubmissionTimings::default())
    }
}

impl SubmissionCoordinator {
    pub fn new(timings: SubmissionTimings) -> Self {
        Self {
            state: SubmissionState::Idle,
            timings,
            scheduler: Scheduler::new(),
            dismiss: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// True while the submit trigger must be disabled
    pub fn is_busy(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Whether the success indicator has an auto-dismiss pending
    #[cfg(test)]
    pub fn has_pending_dismiss(&self) -> bool {
        self.dismiss
            .is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::info!(
            "Contact form {} -> {}",
            self.state.label(),
            next.label()
        );
        self.state = next;
    }

    fn cancel_dismiss(&mut self) {
        if let Some(handle) = self.dismiss.take() {
            self.scheduler.cancel(handle);
        }
    }

    /// Validate every field and, if all pass, move to Submitting.
    ///
    /// Required fields and optional fields with a value are validated; all
    /// results are returned so every error can be shown at once.
    pub fn submit(
        &mut self,
        fields: &[(FieldState, FieldKind)],
        locale: Locale,
        catalog: &Catalog,
    ) -> SubmissionOutcome {
        if self.is_busy() {
            tracing::debug!("Submit ignored: submission already in progress");
            return SubmissionOutcome::AlreadyInProgress;
        }

        let results: Vec<FieldState> = fields
            .iter()
            .map(|(field, kind)| {
                if field.needs_validation() {
                    validate(field.clone(), *kind, locale, catalog)
                } else {
                    field.clone().into_valid()
                }
            })
            .collect();

        // A new attempt supersedes any success indicator still on screen
        if self.state == SubmissionState::Success {
            self.cancel_dismiss();
            self.transition(SubmissionState::Idle);
        }

        let invalid = results.iter().filter(|f| !f.is_valid).count();
        if invalid > 0 {
            tracing::debug!("Submit rejected: {invalid} invalid field(s)");
            return SubmissionOutcome::Rejected { fields: results };
        }

        self.transition(SubmissionState::Submitting);
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);

        let submission = ContactSubmission::from_fields(&results, locale);
        SubmissionOutcome::Accepted {
            ticket,
            fields: results,
            submission,
        }
    }

    /// Record the transport's result for `ticket`
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmissionError>,
        locale: Locale,
        catalog: &Catalog,
        now: Instant,
    ) -> Completion {
        if self.in_flight != Some(ticket) || !self.is_busy() {
            tracing::debug!("Discarding stale completion {ticket:?}");
            return Completion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.transition(SubmissionState::Success);
                self.dismiss = Some(
                    self.scheduler
                        .schedule(now + self.timings.success_display, Task::DismissSuccess),
                );
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err}");
                self.transition(SubmissionState::Idle);
                Completion::Failed {
                    message: catalog.message(MessageKey::SubmissionFailure, locale),
                }
            }
        }
    }

    /// Run due timers; returns true if the success indicator was dismissed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut dismissed = false;
        for task in self.scheduler.drain_due(now) {
            match task {
                Task::DismissSuccess => {
                    self.dismiss = None;
                    if self.state == SubmissionState::Success {
                        self.transition(SubmissionState::Idle);
                        dismissed = true;
                    }
                }
            }
        }
        dismissed
    }

    /// Success text in `locale` while the success indicator is showing
    pub fn success_message(&self, locale: Locale, catalog: &Catalog) -> Option<String> {
        (self.state == SubmissionState::Success)
            .then(|| catalog.message(MessageKey::SubmissionSuccess, locale))
    }

    /// Drop the success indicator early (the user left the form)
    pub fn dismiss(&mut self) {
        if self.state == SubmissionState::Success {
            self.cancel_dismiss();
            self.transition(SubmissionState::Idle);
        }
    }
}
