//! Trait abstraction over the submission transport to enable mocking in tests

use super::ContactSubmission;
use async_trait::async_trait;
use thiserror::Error;

/// Whole-form failure; the form returns to Idle and the user may retry
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport rejected submission: {0}")]
    Transport(String),
    #[error("submission task ended without reporting a result")]
    Interrupted,
}

/// Delivers a validated contact submission somewhere
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError>;
}
