//! Start Quiz use case.
//!
//! Executes the start panel's submission: configuration validation,
//! gate pre-check, optimistic append of the configuration restatement,
//! a single call to the action layer, then resolution capture and the
//! reply append.

use crate::ports::quiz_gateway::{GatewayError, QuizGateway};
use crate::ports::transcript::TranscriptSink;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use quizflow_domain::{DomainError, MessageDraft, StartPanel, StartRequest, TranscriptEntry};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when starting a quiz.
#[derive(Error, Debug)]
pub enum StartQuizError {
    /// Validation failure (blank topic, non-numeric or out-of-range
    /// question count). No state transition happened; the panel can be
    /// corrected and started again.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The action layer failed. The panel is permanently pending.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of a successful `execute` call.
#[derive(Debug)]
pub enum StartQuizOutput {
    /// The panel had already started a quiz; nothing happened.
    Ignored,
    /// The start went through.
    Started {
        quiz_started: bool,
        request: StartRequest,
        user_entry: TranscriptEntry,
        reply_entry: TranscriptEntry,
    },
}

/// Use case for submitting the quiz-start configuration.
pub struct StartQuizUseCase {
    gateway: Arc<dyn QuizGateway>,
    transcript: Arc<dyn TranscriptSink>,
    logger: Arc<dyn TranscriptLogger>,
}

impl StartQuizUseCase {
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

    /// Execute the start flow for `panel`.
    pub async fn execute(
        &self,
        panel: &mut StartPanel,
    ) -> Result<StartQuizOutput, StartQuizError> {
        if panel.is_started() {
            debug!("Ignoring repeat start for an already-started panel");
            return Ok(StartQuizOutput::Ignored);
        }

        // Validation precedes gate acceptance: a rejected configuration
        // must leave the gate idle.
        let request = panel.validate()?;
        if panel.try_accept().is_err() {
            return Ok(StartQuizOutput::Ignored);
        }

        let user_entry = self.transcript.append(MessageDraft::user(request.summary()));

        info!(
            topic = %request.topic,
            questions = request.question_count,
            "Starting quiz"
        );
        let outcome = self.gateway.start_quiz(&request).await?;

        panel.resolve(outcome.quiz_started);
        let reply_entry = self.transcript.append(outcome.reply);

        self.logger.log(TranscriptEvent::quiz_started(
            &request.topic,
            request.question_count,
            outcome.quiz_started,
        ));

        Ok(StartQuizOutput::Started {
            quiz_started: outcome.quiz_started,
            request,
            user_entry,
            reply_entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailingGateway, MockGateway, MockTranscript};
    use quizflow_domain::{Author, QuizConfig};

    fn panel() -> StartPanel {
        StartPanel::new(QuizConfig::new("reactjs", 3))
    }

    #[tokio::test]
    async fn test_start_appends_restatement_then_reply() {
        let gateway = Arc::new(MockGateway::accepting("Question 1 coming up."));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway.clone(), transcript.clone());

        let mut panel = panel();
        panel.config_mut().set_question_count("5");
        panel.config_mut().set_reveal_preference(true);

        let output = use_case.execute(&mut panel).await.unwrap();
        match output {
            StartQuizOutput::Started {
                quiz_started,
                request,
                user_entry,
                reply_entry,
            } => {
                assert!(quiz_started);
                assert_eq!(request.question_count, 5);
                assert_eq!(
                    user_entry.content,
                    "A quiz with 5 questions on the topic of reactjs, with correct-answer reveal."
                );
                assert_eq!(reply_entry.content, "Question 1 coming up.");
                assert!(user_entry.id < reply_entry.id);
            }
            other => panic!("Expected Started, got {:?}", other),
        }

        assert!(panel.is_started());
        assert_eq!(gateway.start_calls(), 1);

        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].author, Author::User);
        assert_eq!(entries[1].author, Author::Assistant);
    }

    #[tokio::test]
    async fn test_non_numeric_count_is_rejected_before_gateway() {
        let gateway = Arc::new(MockGateway::accepting("unused"));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway.clone(), transcript.clone());

        let mut panel = panel();
        panel.config_mut().set_question_count("lots");

        let err = use_case.execute(&mut panel).await.unwrap_err();
        assert!(matches!(
            err,
            StartQuizError::Validation(DomainError::InvalidQuestionCount(_))
        ));

        assert_eq!(gateway.start_calls(), 0);
        assert!(transcript.entries().is_empty());
        assert!(!panel.is_started());

        // Correct the input and start normally
        panel.config_mut().set_question_count("3");
        let output = use_case.execute(&mut panel).await.unwrap();
        assert!(matches!(output, StartQuizOutput::Started { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_count_is_rejected() {
        let gateway = Arc::new(MockGateway::accepting("unused"));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway.clone(), transcript);

        let mut panel = panel();
        panel.config_mut().set_question_count("51");

        let err = use_case.execute(&mut panel).await.unwrap_err();
        assert!(matches!(
            err,
            StartQuizError::Validation(DomainError::QuestionCountOutOfRange { got: 51, .. })
        ));
        assert_eq!(gateway.start_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_topic_is_rejected() {
        let gateway = Arc::new(MockGateway::accepting("unused"));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway, transcript);

        let mut panel = panel();
        panel.config_mut().set_topic("   ");

        let err = use_case.execute(&mut panel).await.unwrap_err();
        assert!(matches!(
            err,
            StartQuizError::Validation(DomainError::BlankTopic)
        ));
    }

    #[tokio::test]
    async fn test_repeat_start_is_a_no_op() {
        let gateway = Arc::new(MockGateway::accepting("go"));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway.clone(), transcript.clone());

        let mut panel = panel();
        use_case.execute(&mut panel).await.unwrap();
        let repeat = use_case.execute(&mut panel).await.unwrap();
        assert!(matches!(repeat, StartQuizOutput::Ignored));

        assert_eq!(gateway.start_calls(), 1);
        assert_eq!(transcript.entries().len(), 2);
    }

    #[tokio::test]
    async fn test_gateway_failure_leaves_panel_pending() {
        let gateway = Arc::new(FailingGateway);
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway, transcript.clone());

        let mut panel = panel();
        let err = use_case.execute(&mut panel).await.unwrap_err();
        assert!(matches!(err, StartQuizError::Gateway(_)));

        assert_eq!(transcript.entries().len(), 1);
        assert!(panel.is_started());
        assert!(!panel.gate().is_resolved());

        let repeat = use_case.execute(&mut panel).await.unwrap();
        assert!(matches!(repeat, StartQuizOutput::Ignored));
    }

    #[tokio::test]
    async fn test_start_withheld_by_action() {
        let gateway = Arc::new(MockGateway::withholding("Quizzes are disabled right now."));
        let transcript = Arc::new(MockTranscript::new());
        let use_case = StartQuizUseCase::new(gateway, transcript);

        let mut panel = panel();
        let output = use_case.execute(&mut panel).await.unwrap();
        match output {
            StartQuizOutput::Started { quiz_started, .. } => assert!(!quiz_started),
            other => panic!("Expected Started, got {:?}", other),
        }
        assert!(panel.gate().is_resolved());
        assert!(!panel.gate().accepted());
    }
}
