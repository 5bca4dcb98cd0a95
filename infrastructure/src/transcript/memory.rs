//! In-memory transcript sink.
//!
//! Reference implementation of the externally-owned conversation
//! transcript: an append-only list with sink-assigned ids. Ids come
//! from a monotonic counter, so two appends in the same instant can
//! never collide the way time-derived ids could.

use chrono::Utc;
use quizflow_application::TranscriptSink;
use quizflow_domain::{EntryId, MessageDraft, TranscriptEntry};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Append-only in-memory transcript.
///
/// Thread-safe behind `&self`: the id counter is atomic and the entry
/// list is mutex-guarded. Panels only append; the hosting layer reads
/// through [`entries`](Self::entries).
pub struct InMemoryTranscript {
    entries: Mutex<Vec<TranscriptEntry>>,
    next_id: AtomicU64,
}

impl InMemoryTranscript {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptSink for InMemoryTranscript {
    fn append(&self, draft: MessageDraft) -> TranscriptEntry {
        let id = EntryId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let entry = TranscriptEntry::from_draft(id, draft, Utc::now());
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizflow_domain::Author;

    #[test]
    fn test_append_preserves_order_and_assigns_increasing_ids() {
        let transcript = InMemoryTranscript::new();
        let first = transcript.append(MessageDraft::user("My answer is: \"B\""));
        let second = transcript.append(MessageDraft::assistant("Correct!"));

        assert!(first.id < second.id);

        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, Author::User);
        assert_eq!(entries[1].author, Author::Assistant);
        assert_eq!(entries[0].id, first.id);
    }

    #[test]
    fn test_ids_are_unique_across_many_appends() {
        let transcript = InMemoryTranscript::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            let entry = transcript.append(MessageDraft::user(format!("msg {i}")));
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
        assert_eq!(transcript.len(), 100);
    }
}
