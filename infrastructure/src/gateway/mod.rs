//! Quiz gateway adapters.

mod scripted;

pub use scripted::{QuestionBank, ScriptedQuizGateway};
