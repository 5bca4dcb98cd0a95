//! Selection engine for one question

use super::question::QuestionMode;
use serde::{Deserialize, Serialize};

/// The user's current chosen option(s) for one question (Entity)
///
/// Scoped to a single question instance. Single-choice keeps at most one
/// option; multiple-choice keeps a duplicate-free list in the order the
/// options were first chosen. Membership against the question's option
/// list is enforced by [`QuestionPanel`](super::panel::QuestionPanel),
/// which owns both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl Selection {
    /// Create an empty selection matching the question's mode.
    pub fn for_mode(mode: QuestionMode) -> Self {
        match mode {
            QuestionMode::SingleChoice => Selection::Single(None),
            QuestionMode::MultipleChoice => Selection::Multiple(Vec::new()),
        }
    }

    /// Toggle an option.
    ///
    /// Multiple-choice: remove the option if present, add it otherwise.
    /// Single-choice: replace the entire selection with this option.
    pub fn toggle(&mut self, option: &str) {
        match self {
            Selection::Single(slot) => {
                *slot = Some(option.to_string());
            }
            Selection::Multiple(chosen) => {
                if let Some(index) = chosen.iter().position(|c| c == option) {
                    chosen.remove(index);
                } else {
                    chosen.push(option.to_string());
                }
            }
        }
    }

    /// Pure membership query, used to drive option control checked-state.
    pub fn is_selected(&self, option: &str) -> bool {
        match self {
            Selection::Single(slot) => slot.as_deref() == Some(option),
            Selection::Multiple(chosen) => chosen.iter().any(|c| c == option),
        }
    }

    /// True iff no option is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(slot) => slot.is_none(),
            Selection::Multiple(chosen) => chosen.is_empty(),
        }
    }

    /// The chosen option values, in selection order.
    pub fn chosen(&self) -> Vec<&str> {
        match self {
            Selection::Single(slot) => slot.as_deref().into_iter().collect(),
            Selection::Multiple(chosen) => chosen.iter().map(String::as_str).collect(),
        }
    }

    /// Render the selection for the user-authored transcript restatement.
    pub fn summary(&self) -> String {
        self.chosen().join(", ")
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
