//! Question value object

use serde::{Deserialize, Serialize};

/// How many options a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionMode {
    /// Radio-button semantics: picking an option replaces the selection.
    SingleChoice,
    /// Checkbox semantics: picking an option toggles its membership.
    MultipleChoice,
}

impl QuestionMode {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionMode::SingleChoice => "single-choice",
            QuestionMode::MultipleChoice => "multiple-choice",
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, QuestionMode::MultipleChoice)
    }

    /// The notice shown when the user submits with nothing selected.
    pub fn empty_selection_prompt(&self) -> &'static str {
        match self {
            QuestionMode::SingleChoice => "Please select an option.",
            QuestionMode::MultipleChoice => "Please select at least one option.",
        }
    }
}

impl std::fmt::Display for QuestionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A quiz question (Value Object)
///
/// Externally supplied and immutable for the lifetime of its panel.
/// Option values are treated as unique selection keys. The answer,
/// explanation, and source are an opaque payload shown only once the
/// reveal gate opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    mode: QuestionMode,
    options: Vec<String>,
    reveal_enabled: bool,
    answer: String,
    explanation: Option<String>,
    source: Option<String>,
}

impl Question {
    /// Create a new question.
    ///
    /// # Panics
    /// Panics if `options` is empty.
    pub fn new(
        prompt: impl Into<String>,
        mode: QuestionMode,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        assert!(!options.is_empty(), "Question needs at least one option");
        Self {
            prompt: prompt.into(),
            mode,
            options,
            reveal_enabled: false,
            answer: answer.into(),
            explanation: None,
            source: None,
        }
    }

    /// Try to create a new question, returning None if it has no options.
    pub fn try_new(
        prompt: impl Into<String>,
        mode: QuestionMode,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Option<Self> {
        if options.is_empty() {
            None
        } else {
            Some(Self::new(prompt, mode, options, answer))
        }
    }

    /// Set whether the answer block may ever be shown for this question.
    pub fn with_reveal(mut self, enabled: bool) -> Self {
        self.reveal_enabled = enabled;
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn mode(&self) -> QuestionMode {
        self.mode
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    pub fn reveal_enabled(&self) -> bool {
        self.reveal_enabled
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
