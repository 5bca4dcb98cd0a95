//! Submission gate: the monotonic idle→submitted state machine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of a panel's submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionStatus {
    /// No submission has been accepted yet
    #[default]
    Idle,
    /// A submission was accepted; never returns to `Idle`
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitted => "submitted",
        }
    }
}

/// Why a submit attempt was not accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Nothing is selected. Surfaced to the user as an actionable notice.
    #[error("No option selected")]
    EmptySelection,

    /// The gate already accepted a submission. Callers treat this as a
    /// no-op, not an error.
    #[error("Already submitted")]
    AlreadySubmitted,
}

/// The at-most-once submission state machine (Entity)
///
/// Shared by the question and start panels. The gate accepts a submit
/// only while `Idle` with a non-empty selection, and flips to
/// `Submitted` at acceptance time, before the backing action runs, so
/// the action is invoked at most once per panel instance even when it
/// later fails. The action's accepted/visible flag is recorded
/// separately via [`resolve`](SubmissionGate::resolve); a gate that is
/// `Submitted` but unresolved is the permanently-pending state left
/// behind by an action that never resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubmissionGate {
    status: SubmissionStatus,
    resolved: Option<bool>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Attempt to accept a submission.
    ///
    /// Checks run in order: an already-submitted gate wins over an empty
    /// selection, so a second submit on a completed panel is always the
    /// quiet no-op rather than a validation notice.
    pub fn try_accept(&mut self, selection_empty: bool) -> Result<(), SubmitRejection> {
        if self.is_submitted() {
            return Err(SubmitRejection::AlreadySubmitted);
        }
        if selection_empty {
            return Err(SubmitRejection::EmptySelection);
        }
        self.status = SubmissionStatus::Submitted;
        Ok(())
    }

    /// Record the action's accepted/visible flag. First write wins;
    /// later calls are ignored.
    pub fn resolve(&mut self, accepted: bool) {
        if self.resolved.is_none() {
            self.resolved = Some(accepted);
        }
    }

    /// True once the action has resolved, whatever the flag's value.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// The action's resolved flag: `None` while pending, then the flag.
    pub fn resolved_flag(&self) -> Option<bool> {
        self.resolved
    }

    /// True iff the action resolved and confirmed the submission.
    pub fn accepted(&self) -> bool {
        self.resolved == Some(true)
    }
}
