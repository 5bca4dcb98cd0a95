//! Question panel aggregate

use super::question::Question;
use super::reveal::can_reveal;
use super::selection::Selection;
use super::submission::{SubmissionGate, SubmitRejection};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The answer payload exposed once the reveal gate opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealPayload<'a> {
    pub answer: &'a str,
    pub explanation: Option<&'a str>,
    pub source: Option<&'a str>,
}

/// One question's interaction state (Aggregate)
///
/// Owns the immutable [`Question`] together with its [`Selection`] and
/// [`SubmissionGate`]. Each panel is independent; remounting the same
/// logical question means constructing a fresh panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPanel {
    question: Question,
    selection: Selection,
    gate: SubmissionGate,
}

impl QuestionPanel {
    pub fn new(question: Question) -> Self {
        let selection = Selection::for_mode(question.mode());
        Self {
            question,
            selection,
            gate: SubmissionGate::new(),
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    /// Toggle an option, keeping the selection a subset of the
    /// question's option list.
    pub fn toggle(&mut self, option: &str) -> Result<(), DomainError> {
        if !self.question.has_option(option) {
            return Err(DomainError::UnknownOption(option.to_string()));
        }
        self.selection.toggle(option);
        Ok(())
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selection.is_selected(option)
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Run the gate's pre-check and, on acceptance, flip it to submitted.
    pub fn try_submit(&mut self) -> Result<(), SubmitRejection> {
        self.gate.try_accept(self.selection.is_empty())
    }

    /// Record the action's answer-visible flag.
    pub fn resolve(&mut self, answer_visible: bool) {
        self.gate.resolve(answer_visible);
    }

    /// The user-authored restatement appended to the transcript.
    pub fn answer_summary(&self) -> String {
        format!("My answer is: \"{}\"", self.selection.summary())
    }

    /// True iff the answer block may be displayed: the question allows
    /// reveal AND the action confirmed it.
    pub fn can_reveal(&self) -> bool {
        can_reveal(self.question.reveal_enabled(), self.gate.accepted())
    }

    /// The answer payload, present only while [`can_reveal`](Self::can_reveal) holds.
    pub fn reveal(&self) -> Option<RevealPayload<'_>> {
        if !self.can_reveal() {
            return None;
        }
        Some(RevealPayload {
            answer: self.question.answer(),
            explanation: self.question.explanation(),
            source: self.question.source(),
        })
    }
}
