//! Submit Answer use case.
//!
//! Executes one answer submission for a question panel: gate pre-check,
//! optimistic append of the user's restatement, a single call to the
//! action layer, then resolution capture and the reply append.
//!
//! Between the optimistic append and the action's resolution the panel
//! is pending: its gate is already flipped, so re-entry is impossible
//! even if the host fails to disable its submit control. If the action
//! fails, the error propagates untouched and the panel stays pending
//! forever; recovery means mounting a fresh panel.

use crate::ports::quiz_gateway::{GatewayError, QuizGateway};
use crate::ports::transcript::TranscriptSink;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use quizflow_domain::{MessageDraft, QuestionPanel, SubmitRejection, TranscriptEntry};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during answer submission.
#[derive(Error, Debug)]
pub enum SubmitAnswerError {
    /// Validation failure: nothing selected. No state transition
    /// happened; the panel can be submitted again once an option is
    /// chosen. The payload is the user-facing prompt for the question's
    /// mode.
    #[error("No option selected. {0}")]
    EmptySelection(&'static str),

    /// The action layer failed. The panel is permanently pending.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of a successful `execute` call.
#[derive(Debug)]
pub enum SubmitAnswerOutput {
    /// The gate had already accepted a submission; nothing happened.
    Ignored,
    /// The submission went through. Both appended entries are returned
    /// so hosts can render them without reading the transcript.
    Submitted {
        answer_visible: bool,
        user_entry: TranscriptEntry,
        reply_entry: TranscriptEntry,
    },
}

/// Use case for submitting one question panel's answer.
pub struct SubmitAnswerUseCase {
    gateway: Arc<dyn QuizGateway>,
    transcript: Arc<dyn TranscriptSink>,
    logger: Arc<dyn TranscriptLogger>,
}

impl SubmitAnswerUseCase {
    pub fn new(gateway: Arc<dyn QuizGateway>, transcript: Arc<dyn TranscriptSink>) -> Self {
        Self {
            gateway,
            transcript,
            logger: Arc::new(NoTranscriptLogger),
        }
    }

    /// Create with a transcript event logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the submission flow for `panel`.
    ///
    /// Taking the panel by `&mut` is what makes the pending window
    /// re-entry free: no second submit can start while this call is
    /// suspended on the gateway.
    pub async fn execute(
        &self,
        panel: &mut QuestionPanel,
    ) -> Result<SubmitAnswerOutput, SubmitAnswerError> {
        match panel.try_submit() {
            Err(SubmitRejection::AlreadySubmitted) => {
                debug!("Ignoring repeat submit for an already-submitted question");
                return Ok(SubmitAnswerOutput::Ignored);
            }
            Err(SubmitRejection::EmptySelection) => {
                return Err(SubmitAnswerError::EmptySelection(
                    panel.question().mode().empty_selection_prompt(),
                ));
            }
            Ok(()) => {}
        }

        // Optimistic append: the user's restatement lands before the
        // action is invoked.
        let user_entry = self.transcript.append(MessageDraft::user(panel.answer_summary()));

        info!(
            mode = panel.question().mode().as_str(),
            "Submitting answer: {}",
            panel.selection().summary()
        );
        let outcome = self.gateway.submit_answer(panel.selection()).await?;

        panel.resolve(outcome.answer_visible);
        let reply_entry = self.transcript.append(outcome.reply);

        self.logger.log(TranscriptEvent::answer_submitted(
            &panel.selection().summary(),
            outcome.answer_visible,
        ));

        Ok(SubmitAnswerOutput::Submitted {
            answer_visible: outcome.answer_visible,
            user_entry,
            reply_entry,
        })
    }
}
