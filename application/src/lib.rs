//! Application layer for quizflow
//!
//! This crate contains use cases, port definitions, and the default
//! panel configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizDefaults;
pub use ports::{
    quiz_gateway::{AnswerOutcome, GatewayError, QuizGateway, StartOutcome},
    topic_source::TopicSource,
    transcript::TranscriptSink,
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::start_quiz::{StartQuizError, StartQuizOutput, StartQuizUseCase};
pub use use_cases::submit_answer::{SubmitAnswerError, SubmitAnswerOutput, SubmitAnswerUseCase};
