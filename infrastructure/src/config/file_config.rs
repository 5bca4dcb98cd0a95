//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and merged into the application-level
//! defaults.

use quizflow_application::QuizDefaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Start-panel defaults
    pub quiz: FileQuizConfig,
    /// Log destinations
    pub log: FileLogConfig,
}

/// Start-panel defaults from TOML (`[quiz]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Preselected topic key
    pub topic: Option<String>,
    /// Prefilled question count
    pub questions: Option<usize>,
    /// Initial state of the answer-reveal toggle
    pub reveal: Option<bool>,
}

/// Log configuration from TOML (`[log]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL transcript event log destination
    pub transcript_file: Option<PathBuf>,
    /// Diagnostic (tracing) log destination; stderr when unset
    pub file: Option<PathBuf>,
}

impl FileConfig {
    /// Merge the file values over the built-in panel defaults.
    pub fn quiz_defaults(&self) -> QuizDefaults {
        let mut defaults = QuizDefaults::default();
        if let Some(topic) = &self.quiz.topic {
            defaults.topic = topic.clone();
        }
        if let Some(questions) = self.quiz.questions {
            defaults.question_count = questions;
        }
        if let Some(reveal) = self.quiz.reveal {
            defaults.reveal = reveal;
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_builtin_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        let defaults = config.quiz_defaults();
        assert_eq!(defaults.topic, "reactjs");
        assert_eq!(defaults.question_count, 3);
    }

    #[test]
    fn test_quiz_section_overrides() {
        let config: FileConfig = toml::from_str(
            r#"
[quiz]
topic = "javascript"
questions = 10
reveal = true
"#,
        )
        .unwrap();
        let defaults = config.quiz_defaults();
        assert_eq!(defaults.topic, "javascript");
        assert_eq!(defaults.question_count, 10);
        assert!(defaults.reveal);
    }

    #[test]
    fn test_log_section() {
        let config: FileConfig = toml::from_str(
            r#"
[log]
transcript_file = "quiz.transcript.jsonl"
"#,
        )
        .unwrap();
        assert_eq!(
            config.log.transcript_file,
            Some(PathBuf::from("quiz.transcript.jsonl"))
        );
        assert!(config.log.file.is_none());
    }
}
