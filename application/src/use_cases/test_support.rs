//! Shared mocks for use-case tests.

use crate::ports::quiz_gateway::{AnswerOutcome, GatewayError, QuizGateway, StartOutcome};
use crate::ports::transcript::TranscriptSink;
use crate::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use async_trait::async_trait;
use chrono::Utc;
use quizflow_domain::{EntryId, MessageDraft, Selection, StartRequest, TranscriptEntry};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Gateway returning a fixed reply, counting invocations.
pub struct MockGateway {
    visible: bool,
    reply: String,
    submit_calls: AtomicUsize,
    start_calls: AtomicUsize,
}

impl MockGateway {
    /// Gateway that confirms the submission (`answer_visible`/
    /// `quiz_started` = true).
    pub fn accepting(reply: &str) -> Self {
        Self {
            visible: true,
            reply: reply.to_string(),
            submit_calls: AtomicUsize::new(0),
            start_calls: AtomicUsize::new(0),
        }
    }

    /// Gateway that resolves but withholds the flag (server-side policy).
    pub fn withholding(reply: &str) -> Self {
        Self {
            visible: false,
            ..Self::accepting(reply)
        }
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuizGateway for MockGateway {
    async fn submit_answer(&self, _selection: &Selection) -> Result<AnswerOutcome, GatewayError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        Ok(AnswerOutcome {
            answer_visible: self.visible,
            reply: MessageDraft::assistant(self.reply.clone()),
        })
    }

    async fn start_quiz(&self, _request: &StartRequest) -> Result<StartOutcome, GatewayError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        Ok(StartOutcome {
            quiz_started: self.visible,
            reply: MessageDraft::assistant(self.reply.clone()),
        })
    }
}

/// Gateway whose every call fails.
pub struct FailingGateway;

#[async_trait]
impl QuizGateway for FailingGateway {
    async fn submit_answer(&self, _selection: &Selection) -> Result<AnswerOutcome, GatewayError> {
        Err(GatewayError::RequestFailed("network stall".to_string()))
    }

    async fn start_quiz(&self, _request: &StartRequest) -> Result<StartOutcome, GatewayError> {
        Err(GatewayError::RequestFailed("network stall".to_string()))
    }
}

/// In-memory transcript sink with a monotonic id counter.
pub struct MockTranscript {
    entries: Mutex<Vec<TranscriptEntry>>,
    next_id: AtomicU64,
}

impl MockTranscript {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl TranscriptSink for MockTranscript {
    fn append(&self, draft: MessageDraft) -> TranscriptEntry {
        let id = EntryId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let entry = TranscriptEntry::from_draft(id, draft, Utc::now());
        self.entries.lock().unwrap().push(entry.clone());
        entry
    }
}

/// Logger capturing (event_type, payload) pairs.
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl TranscriptLogger for RecordingLogger {
    fn log(&self, event: TranscriptEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
