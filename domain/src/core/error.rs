//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are validation failures: they leave the panel state
/// untouched, and the operation that raised them can be retried after
/// the user corrects the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Please select a topic")]
    BlankTopic,

    #[error("Total number of questions must be a number, got {0:?}")]
    InvalidQuestionCount(String),

    #[error("Total number of questions must be between {min} and {max}, got {got}")]
    QuestionCountOutOfRange { got: usize, min: usize, max: usize },
}

impl DomainError {
    /// Check whether this error should be surfaced as a user-actionable
    /// notice. `UnknownOption` can only come from a host wiring bug, not
    /// from user input, since option controls are rendered from the
    /// question's own option list.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DomainError::UnknownOption(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = DomainError::QuestionCountOutOfRange {
            got: 99,
            min: 1,
            max: 50,
        };
        assert_eq!(
            error.to_string(),
            "Total number of questions must be between 1 and 50, got 99"
        );
    }

    #[test]
    fn test_user_facing_check() {
        assert!(DomainError::BlankTopic.is_user_facing());
        assert!(DomainError::InvalidQuestionCount("abc".to_string()).is_user_facing());
        assert!(!DomainError::UnknownOption("x".to_string()).is_user_facing());
    }
}
