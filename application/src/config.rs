//! Default start-panel configuration

use serde::{Deserialize, Serialize};

/// Seed values for a freshly mounted start panel.
///
/// The hosting layer merges these from its own configuration sources;
/// the defaults here mirror a bare mount with no caller overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefaults {
    /// Preselected topic key.
    pub topic: String,
    /// Prefilled question count.
    pub question_count: usize,
    /// Initial state of the answer-reveal toggle.
    pub reveal: bool,
}

impl Default for QuizDefaults {
    fn default() -> Self {
        Self {
            topic: "reactjs".to_string(),
            question_count: 3,
            reveal: false,
        }
    }
}

impl QuizDefaults {
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bare_mount() {
        let defaults = QuizDefaults::default();
        assert_eq!(defaults.topic, "reactjs");
        assert_eq!(defaults.question_count, 3);
        assert!(!defaults.reveal);
    }

    #[test]
    fn test_builder_overrides() {
        let defaults = QuizDefaults::default()
            .with_topic("javascript")
            .with_question_count(10)
            .with_reveal(true);
        assert_eq!(defaults.topic, "javascript");
        assert_eq!(defaults.question_count, 10);
        assert!(defaults.reveal);
    }
}
