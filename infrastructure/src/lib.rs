//! Infrastructure layer for quizflow
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod transcript;

// Re-export commonly used types
pub use catalog::{StaticTopicCatalog, TopicTreeCatalog};
pub use config::{ConfigLoader, FileConfig, FileLogConfig, FileQuizConfig};
pub use gateway::{QuestionBank, ScriptedQuizGateway};
pub use logging::JsonlTranscriptLogger;
pub use transcript::InMemoryTranscript;
