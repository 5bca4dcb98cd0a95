//! Port for structured transcript event logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording quiz events
//! (starts, submissions, resolutions) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures what happened to
//! the conversation in a structured format (JSONL in the shipped
//! adapter).

use serde_json::Value;

/// A structured quiz event for logging.
pub struct TranscriptEvent {
    /// Event type identifier.
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A quiz-start submission resolved by the action layer.
    pub fn quiz_started(topic: &str, question_count: usize, quiz_started: bool) -> Self {
        Self::new(
            "quiz_started",
            serde_json::json!({
                "topic": topic,
                "questions": question_count,
                "visible": quiz_started,
            }),
        )
    }

    /// An answer submission resolved by the action layer.
    pub fn answer_submitted(selection: &str, answer_visible: bool) -> Self {
        Self::new(
            "answer_submitted",
            serde_json::json!({
                "selection": selection,
                "visible": answer_visible,
            }),
        )
    }
}

/// Port for logging quiz events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible to
/// avoid disrupting the submission flow; logging failures are silently
/// ignored.
pub trait TranscriptLogger: Send + Sync {
    /// Record a quiz event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
