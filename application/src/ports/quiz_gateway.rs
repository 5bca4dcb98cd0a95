//! Quiz action gateway port
//!
//! Defines the interface for the conversational action layer that
//! interprets a submission and produces the next conversational turn.

use async_trait::async_trait;
use quizflow_domain::{MessageDraft, Selection, StartRequest};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// The use cases never catch these: a failed action propagates to the
/// caller, and the submitting panel stays permanently pending. There is
/// no retry and no timeout at this layer.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// What the action layer returns for a submitted answer.
///
/// `answer_visible` is the server-confirmed half of the reveal gate;
/// `reply` is the next conversational turn, appended to the transcript
/// after the user's restatement.
#[derive(Debug, Clone)]
pub struct AnswerOutcome {
    pub answer_visible: bool,
    pub reply: MessageDraft,
}

/// What the action layer returns for a quiz-start request.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    pub quiz_started: bool,
    pub reply: MessageDraft,
}

/// Gateway to the conversational action layer
///
/// This port defines how the application layer reaches the hosted
/// conversation-state API. Implementations (adapters) live in the
/// infrastructure layer. Each method must be invoked at most once per
/// panel instance; the use cases enforce this through the panel's
/// submission gate.
#[async_trait]
pub trait QuizGateway: Send + Sync {
    /// Interpret a submitted answer and produce the next turn.
    async fn submit_answer(&self, selection: &Selection) -> Result<AnswerOutcome, GatewayError>;

    /// Begin a quiz session and produce the next turn.
    async fn start_quiz(&self, request: &StartRequest) -> Result<StartOutcome, GatewayError>;
}
