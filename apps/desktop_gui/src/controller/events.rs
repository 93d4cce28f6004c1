//! Events flowing from the backend worker to the UI thread.

use client_core::SubmitOutcome;

#[derive(Debug)]
pub enum UiEvent {
    WorkerReady,
    /// Cause of the failure; the UI adds the localized prefix.
    BackendStartupFailed(String),
    SubmissionResolved { seq: u64, outcome: SubmitOutcome },
}
