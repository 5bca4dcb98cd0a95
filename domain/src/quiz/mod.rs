//! Quiz interaction state machines.
//!
//! - [`question::Question`] — an externally supplied, immutable question
//! - [`selection::Selection`] — the user's chosen option(s) for one question
//! - [`submission::SubmissionGate`] — the monotonic idle→submitted gate
//! - [`reveal`] — the answer-reveal AND-gate
//! - [`panel::QuestionPanel`] — one question's selection + gate + reveal state
//! - [`config::StartPanel`] — the quiz-start configuration and its gate

pub mod config;
pub mod panel;
pub mod question;
pub mod reveal;
pub mod selection;
pub mod submission;
