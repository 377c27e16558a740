//! Contact form submission workflow

mod coordinator;
mod payload;
mod scheduler;
mod simulated;
mod traits;

pub use coordinator::{
    Completion, SubmissionCoordinator, SubmissionOutcome, SubmissionState, SubmissionTicket,
    SubmissionTimings,
};
pub use payload::ContactSubmission;
pub use simulated::SimulatedSubmitter;
pub use traits::{SubmissionError, Submitter};

#[cfg(test)]
pub use traits::MockSubmitter;
