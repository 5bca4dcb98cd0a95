//! Transcript domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a transcript entry (Value Object)
///
/// Unique and monotonically increasing within one transcript. Assigned
/// by the transcript owner at append time, never by the appending
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn as_str(&self) -> &str {
        match self {
            Author::User => "user",
            Author::Assistant => "assistant",
        }
    }
}

/// A message not yet appended to the transcript (Value Object)
///
/// What panels and the action layer hand to the transcript owner; the
/// owner turns it into a [`TranscriptEntry`] by assigning the id and
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    pub author: Author,
    pub content: String,
}

impl MessageDraft {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            author: Author::Assistant,
            content: content.into(),
        }
    }
}

/// A message in the conversation transcript (Entity)
///
/// Never mutated or removed after append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub author: Author,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn from_draft(id: EntryId, draft: MessageDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            author: draft.author,
            content: draft.content,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_constructors() {
        let draft = MessageDraft::user("My answer is: \"B\"");
        assert_eq!(draft.author, Author::User);

        let draft = MessageDraft::assistant("Correct!");
        assert_eq!(draft.author, Author::Assistant);
    }

    #[test]
    fn test_entry_from_draft_keeps_content() {
        let draft = MessageDraft::user("hello");
        let entry = TranscriptEntry::from_draft(EntryId::new(7), draft, Utc::now());
        assert_eq!(entry.id.value(), 7);
        assert_eq!(entry.author, Author::User);
        assert_eq!(entry.content, "hello");
    }

    #[test]
    fn test_entry_ids_order() {
        assert!(EntryId::new(1) < EntryId::new(2));
    }
}
