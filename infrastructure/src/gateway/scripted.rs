//! Scripted quiz gateway.
//!
//! A deterministic stand-in for the hosted conversational action layer,
//! used by the demo host and by integration-style tests. Replies are
//! canned; the visibility flags are configurable so hosts can exercise
//! the server-side half of the reveal gate.

use async_trait::async_trait;
use quizflow_application::{AnswerOutcome, GatewayError, QuizGateway, StartOutcome};
use quizflow_domain::{MessageDraft, Question, QuestionMode, Selection, StartRequest};
use std::collections::HashMap;
use tracing::debug;

/// A per-topic bank of prepared questions.
///
/// The hosted system generates question panels from its content
/// pipeline; the scripted gateway draws them from here instead. Topic
/// keys that share a prefix match their base topic, so tree leaves like
/// `reactjs-hooks.mdx` resolve to the `reactjs` bank.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    topics: HashMap<String, Vec<Question>>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, key: impl Into<String>, questions: Vec<Question>) -> Self {
        self.topics.insert(key.into(), questions);
        self
    }

    /// A small built-in bank covering the default catalog topics.
    pub fn builtin() -> Self {
        let reactjs = vec![
            Question::new(
                "Which hook memoizes a computed value between renders?",
                QuestionMode::SingleChoice,
                vec![
                    "useMemo".to_string(),
                    "useEffect".to_string(),
                    "useRef".to_string(),
                ],
                "useMemo",
            )
            .with_explanation(
                "useMemo recomputes its value only when one of its dependencies changes.",
            )
            .with_source("https://react.dev/reference/react/useMemo"),
            Question::new(
                "Which of these are valid ways to define a component?",
                QuestionMode::MultipleChoice,
                vec![
                    "A plain function returning JSX".to_string(),
                    "A class extending React.Component".to_string(),
                    "A CSS file".to_string(),
                ],
                "A plain function returning JSX, A class extending React.Component",
            )
            .with_explanation("Function and class components are both valid; CSS is not."),
            Question::new(
                "What does the dependency array of useEffect control?",
                QuestionMode::SingleChoice,
                vec![
                    "When the effect re-runs".to_string(),
                    "Which props the component receives".to_string(),
                    "The render order of children".to_string(),
                ],
                "When the effect re-runs",
            ),
        ];

        let javascript = vec![
            Question::new(
                "What does `typeof null` evaluate to?",
                QuestionMode::SingleChoice,
                vec![
                    "\"object\"".to_string(),
                    "\"null\"".to_string(),
                    "\"undefined\"".to_string(),
                ],
                "\"object\"",
            )
            .with_explanation("A long-standing quirk: null is reported as \"object\"."),
            Question::new(
                "Which declarations are block-scoped?",
                QuestionMode::MultipleChoice,
                vec!["let".to_string(), "const".to_string(), "var".to_string()],
                "let, const",
            )
            .with_explanation("let and const are block-scoped; var is function-scoped."),
        ];

        Self::new()
            .with_topic("reactjs", reactjs)
            .with_topic("javascript", javascript)
    }

    /// Questions for a topic key, cycling when more are requested than
    /// the bank holds. Empty when the topic is unknown.
    pub fn questions_for(&self, key: &str, count: usize) -> Vec<Question> {
        let Some(bank) = self.lookup(key) else {
            return Vec::new();
        };
        bank.iter().cycle().take(count).cloned().collect()
    }

    pub fn knows(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn lookup(&self, key: &str) -> Option<&Vec<Question>> {
        if let Some(bank) = self.topics.get(key) {
            return Some(bank);
        }
        // Tree leaves carry keys like "reactjs-hooks.mdx"
        self.topics
            .iter()
            .find(|(topic, _)| key.starts_with(topic.as_str()))
            .map(|(_, bank)| bank)
    }
}

/// Deterministic [`QuizGateway`] backed by a [`QuestionBank`].
pub struct ScriptedQuizGateway {
    bank: QuestionBank,
    answer_visible: bool,
    start_visible: bool,
}

impl ScriptedQuizGateway {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            answer_visible: true,
            start_visible: true,
        }
    }

    /// Withhold or grant the answer-reveal flag on resolutions.
    pub fn with_answer_visibility(mut self, visible: bool) -> Self {
        self.answer_visible = visible;
        self
    }

    /// Withhold or grant the quiz-started flag on resolutions.
    pub fn with_start_visibility(mut self, visible: bool) -> Self {
        self.start_visible = visible;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }
}

#[async_trait]
impl QuizGateway for ScriptedQuizGateway {
    async fn submit_answer(&self, selection: &Selection) -> Result<AnswerOutcome, GatewayError> {
        debug!("Scripted gateway received answer: {}", selection.summary());
        let reply = MessageDraft::assistant(format!(
            "Got it! I recorded \"{}\" as your answer.",
            selection.summary()
        ));
        Ok(AnswerOutcome {
            answer_visible: self.answer_visible,
            reply,
        })
    }

    async fn start_quiz(&self, request: &StartRequest) -> Result<StartOutcome, GatewayError> {
        if !self.bank.knows(&request.topic) {
            return Err(GatewayError::UnknownTopic(request.topic.clone()));
        }
        debug!(topic = %request.topic, "Scripted gateway starting quiz");
        let reveal = if request.reveal_preference {
            "I'll show the correct answer after each question."
        } else {
            "Answers will stay hidden until the end."
        };
        let reply = MessageDraft::assistant(format!(
            "Starting a {}-question quiz on {}. {}",
            request.question_count, request.topic, reveal
        ));
        Ok(StartOutcome {
            quiz_started: self.start_visible,
            reply,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizflow_domain::Author;

    fn request(topic: &str) -> StartRequest {
        StartRequest {
            topic: topic.to_string(),
            question_count: 3,
            reveal_preference: true,
        }
    }

    #[tokio::test]
    async fn test_start_known_topic() {
        let gateway = ScriptedQuizGateway::new(QuestionBank::builtin());
        let outcome = gateway.start_quiz(&request("reactjs")).await.unwrap();
        assert!(outcome.quiz_started);
        assert_eq!(outcome.reply.author, Author::Assistant);
        assert!(outcome.reply.content.contains("3-question quiz on reactjs"));
    }

    #[tokio::test]
    async fn test_start_unknown_topic_fails() {
        let gateway = ScriptedQuizGateway::new(QuestionBank::builtin());
        let err = gateway.start_quiz(&request("quantum-basketry")).await.unwrap_err();
        assert!(matches!(err, GatewayError::UnknownTopic(_)));
    }

    #[tokio::test]
    async fn test_submit_echoes_selection() {
        let gateway = ScriptedQuizGateway::new(QuestionBank::builtin());
        let mut selection = Selection::for_mode(QuestionMode::SingleChoice);
        selection.toggle("useMemo");

        let outcome = gateway.submit_answer(&selection).await.unwrap();
        assert!(outcome.answer_visible);
        assert!(outcome.reply.content.contains("useMemo"));
    }

    #[tokio::test]
    async fn test_visibility_knobs() {
        let gateway = ScriptedQuizGateway::new(QuestionBank::builtin())
            .with_answer_visibility(false)
            .with_start_visibility(false);

        let selection = {
            let mut s = Selection::for_mode(QuestionMode::SingleChoice);
            s.toggle("x");
            s
        };
        assert!(!gateway.submit_answer(&selection).await.unwrap().answer_visible);
        assert!(!gateway.start_quiz(&request("javascript")).await.unwrap().quiz_started);
    }

    #[test]
    fn test_bank_cycles_questions() {
        let bank = QuestionBank::builtin();
        let questions = bank.questions_for("javascript", 5);
        assert_eq!(questions.len(), 5);
        // Cycled: first and third are the same question
        assert_eq!(questions[0], questions[2]);
    }

    #[test]
    fn test_bank_resolves_tree_leaf_keys() {
        let bank = QuestionBank::builtin();
        assert!(bank.knows("reactjs-hooks.mdx"));
        assert!(!bank.knows("fortran"));
        assert!(!bank.questions_for("reactjs-hooks.mdx", 2).is_empty());
    }
}
