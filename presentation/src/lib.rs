//! Presentation layer for quizflow
//!
//! This crate contains CLI definitions, console output formatting,
//! the in-flight spinner, and the interactive quiz REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::PendingSpinner;
pub use repl::quiz_repl::QuizRepl;
