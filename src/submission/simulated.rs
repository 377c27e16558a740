//! Stand-in transport: waits, then reports the configured outcome

use super::traits::{SubmissionError, Submitter};
use super::ContactSubmission;
use async_trait::async_trait;
use std::time::Duration;

pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    /// A transport that always succeeds after `delay`
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// A transport that always fails after `delay`
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError> {
        let body = serde_json::to_string(&submission)?;
        tracing::debug!(
            "Simulating submission {} ({} bytes)",
            submission.id,
            body.len()
        );

        tokio::time::sleep(self.delay).await;

        if self.fail {
            tracing::warn!("Simulated transport failed submission {}", submission.id);
            return Err(SubmissionError::Transport(
                "simulated transport failure".to_string(),
            ));
        }
        tracing::info!(
            "Submission {} from {} delivered",
            submission.id,
            submission.value("email").unwrap_or("unknown sender")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::validation::FieldState;

    fn submission() -> ContactSubmission {
        ContactSubmission::from_fields(&[FieldState::new("name", "Asha", true)], Locale::En)
    }

    #[tokio::test]
    async fn test_succeeds_after_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1));
        assert!(submitter.submit(submission()).await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_variant_reports_transport_error() {
        let submitter = SimulatedSubmitter::failing(Duration::ZERO);
        let result = submitter.submit(submission()).await;
        assert!(matches!(result, Err(SubmissionError::Transport(_))));
    }

    #[test]
    fn test_pending_until_delay_elapses() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let _guard = rt.enter();

        let submitter = SimulatedSubmitter::new(Duration::from_secs(60));
        let mut task = tokio_test::task::spawn(submitter.submit(submission()));
        tokio_test::assert_pending!(task.poll());
    }
}
