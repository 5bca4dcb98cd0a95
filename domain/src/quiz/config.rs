//! Quiz-start configuration panel

use super::submission::{SubmissionGate, SubmitRejection};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Advertised bounds for the question-count input.
pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 50;

/// The quiz-start configuration (Entity)
///
/// Setters are plain state updates; all validation happens at submit
/// time. The question count is kept as the raw input string so that
/// non-numeric input surfaces as a validation failure at the gate
/// instead of being silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    topic: String,
    question_count: String,
    reveal_preference: bool,
}

impl QuizConfig {
    pub fn new(topic: impl Into<String>, question_count: usize) -> Self {
        Self {
            topic: topic.into(),
            question_count: question_count.to_string(),
            reveal_preference: false,
        }
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn set_question_count(&mut self, raw: impl Into<String>) {
        self.question_count = raw.into();
    }

    pub fn set_reveal_preference(&mut self, reveal: bool) {
        self.reveal_preference = reveal;
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The raw question-count input, as typed.
    pub fn question_count_input(&self) -> &str {
        &self.question_count
    }

    pub fn reveal_preference(&self) -> bool {
        self.reveal_preference
    }

    /// Validate the configuration into a start request.
    pub fn validate(&self) -> Result<StartRequest, DomainError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(DomainError::BlankTopic);
        }

        let raw = self.question_count.trim();
        let question_count: usize = raw
            .parse()
            .map_err(|_| DomainError::InvalidQuestionCount(raw.to_string()))?;

        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&question_count) {
            return Err(DomainError::QuestionCountOutOfRange {
                got: question_count,
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
            });
        }

        Ok(StartRequest {
            topic: topic.to_string(),
            question_count,
            reveal_preference: self.reveal_preference,
        })
    }
}

/// A validated quiz-start request (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartRequest {
    pub topic: String,
    pub question_count: usize,
    pub reveal_preference: bool,
}

impl StartRequest {
    /// The user-authored restatement appended to the transcript.
    pub fn summary(&self) -> String {
        let reveal = if self.reveal_preference {
            "with"
        } else {
            "without"
        };
        format!(
            "A quiz with {} questions on the topic of {}, {} correct-answer reveal.",
            self.question_count, self.topic, reveal
        )
    }
}

/// The quiz-start panel: configuration plus its submission gate (Aggregate)
///
/// The gate mirrors the question panel's: starting is accepted at most
/// once per panel instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPanel {
    config: QuizConfig,
    gate: SubmissionGate,
}

impl StartPanel {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            gate: SubmissionGate::new(),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut QuizConfig {
        &mut self.config
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    pub fn is_started(&self) -> bool {
        self.gate.is_submitted()
    }

    /// Validate without touching the gate. Used by hosts to preview
    /// notices and by the use case before accepting.
    pub fn validate(&self) -> Result<StartRequest, DomainError> {
        self.config.validate()
    }

    /// Accept the start submission. The caller must have validated the
    /// configuration first; the gate itself only guards re-entry.
    pub fn try_accept(&mut self) -> Result<(), SubmitRejection> {
        self.gate.try_accept(false)
    }

    /// Record the action's quiz-started flag.
    pub fn resolve(&mut self, quiz_started: bool) {
        self.gate.resolve(quiz_started);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_happy_path() {
        let mut config = QuizConfig::new("reactjs", 3);
        config.set_question_count("10");
        config.set_reveal_preference(true);

        let request = config.validate().unwrap();
        assert_eq!(request.topic, "reactjs");
        assert_eq!(request.question_count, 10);
        assert!(request.reveal_preference);
    }

    #[test]
    fn test_validate_rejects_non_numeric_count() {
        let mut config = QuizConfig::new("reactjs", 3);
        config.set_question_count("ten");
        assert_eq!(
            config.validate(),
            Err(DomainError::InvalidQuestionCount("ten".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_count() {
        let mut config = QuizConfig::new("reactjs", 3);
        config.set_question_count("0");
        assert!(matches!(
            config.validate(),
            Err(DomainError::QuestionCountOutOfRange { got: 0, .. })
        ));

        config.set_question_count("51");
        assert!(matches!(
            config.validate(),
            Err(DomainError::QuestionCountOutOfRange { got: 51, .. })
        ));

        config.set_question_count("50");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_topic() {
        let mut config = QuizConfig::new("  ", 3);
        assert_eq!(config.validate(), Err(DomainError::BlankTopic));
        config.set_topic("javascript");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_summary_phrasing() {
        let request = StartRequest {
            topic: "reactjs".to_string(),
            question_count: 5,
            reveal_preference: true,
        };
        assert_eq!(
            request.summary(),
            "A quiz with 5 questions on the topic of reactjs, with correct-answer reveal."
        );

        let request = StartRequest {
            reveal_preference: false,
            ..request
        };
        assert_eq!(
            request.summary(),
            "A quiz with 5 questions on the topic of reactjs, without correct-answer reveal."
        );
    }

    #[test]
    fn test_start_panel_gate_is_monotonic() {
        let mut panel = StartPanel::new(QuizConfig::new("reactjs", 3));
        assert!(!panel.is_started());
        assert_eq!(panel.try_accept(), Ok(()));
        assert_eq!(panel.try_accept(), Err(SubmitRejection::AlreadySubmitted));
        assert!(panel.is_started());
    }

    #[test]
    fn test_failed_validation_leaves_gate_idle() {
        let mut panel = StartPanel::new(QuizConfig::new("reactjs", 3));
        panel.config_mut().set_question_count("NaN");
        assert!(panel.validate().is_err());
        assert!(!panel.is_started());

        panel.config_mut().set_question_count("3");
        assert!(panel.validate().is_ok());
        assert_eq!(panel.try_accept(), Ok(()));
    }
}
