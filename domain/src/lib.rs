//! Domain layer for quizflow
//!
//! This crate contains the quiz interaction state machines and value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Panels
//!
//! A quiz session is driven through two panel types embedded in a
//! conversation:
//!
//! - **Start panel**: collects topic, question count, and the
//!   answer-reveal preference, then starts the quiz.
//! - **Question panel**: collects a single- or multiple-choice answer
//!   for one question, then submits it.
//!
//! Each panel is an independent unit owning its own selection state and
//! its own [`SubmissionGate`]; there is no shared mutable state between
//! panels.
//!
//! ## Submission Gate
//!
//! Both panels submit exactly once. The gate is monotonic: once it
//! accepts a submission it never returns to idle, which guarantees the
//! backing action is invoked at most once per panel instance.
//!
//! ## Transcript
//!
//! Panels append to an externally-owned, append-only conversation
//! transcript and never read from it. Entry ids are assigned by the
//! transcript owner, not by the panels.

pub mod core;
pub mod quiz;
pub mod topic;
pub mod transcript;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use quiz::{
    config::{MAX_QUESTIONS, MIN_QUESTIONS, QuizConfig, StartPanel, StartRequest},
    panel::{QuestionPanel, RevealPayload},
    question::{Question, QuestionMode},
    reveal::can_reveal,
    selection::Selection,
    submission::{SubmissionGate, SubmissionStatus, SubmitRejection},
};
pub use topic::{Topic, TopicNode};
pub use transcript::entities::{Author, EntryId, MessageDraft, TranscriptEntry};
