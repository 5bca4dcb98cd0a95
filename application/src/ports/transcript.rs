//! Transcript sink port
//!
//! The conversation transcript is owned by the surrounding conversation
//! engine. Panels only ever append: they never read, reorder, or remove
//! entries. The sink assigns entry ids from a monotonic counter rather
//! than a wall-clock timestamp, so two appends in the same instant can
//! never collide.

use quizflow_domain::{MessageDraft, TranscriptEntry};

/// Append-only channel into the shared conversation transcript.
///
/// `append` is intentionally synchronous and infallible: the optimistic
/// user entry must land before the action is invoked, and a transcript
/// that cannot accept an append is a hosting bug, not a recoverable
/// condition for the panel.
pub trait TranscriptSink: Send + Sync {
    /// Append a draft, returning the entry as recorded (id and
    /// timestamp assigned by the sink).
    fn append(&self, draft: MessageDraft) -> TranscriptEntry;
}
