//! REPL driving the quiz panels over stdin

use crate::ConsoleFormatter;
use crate::PendingSpinner;
use quizflow_application::{
    StartQuizError, StartQuizOutput, StartQuizUseCase, SubmitAnswerError, SubmitAnswerOutput,
    SubmitAnswerUseCase, TopicSource,
};
use quizflow_domain::{Question, QuestionPanel, QuizConfig, StartPanel, StartRequest};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Supplies the question panels for a started quiz.
///
/// In the hosted system the conversation engine mounts question panels
/// as the quiz progresses; here the host injects where they come from.
pub type QuestionSupplier = Box<dyn Fn(&StartRequest) -> Vec<Question> + Send + Sync>;

type InputLines = Lines<BufReader<Stdin>>;

/// Interactive quiz REPL
///
/// Runs the start panel until a quiz begins, then walks through the
/// question panels one at a time. All submission logic goes through the
/// injected use cases; the REPL is rendering and input routing only.
pub struct QuizRepl {
    start_use_case: StartQuizUseCase,
    submit_use_case: SubmitAnswerUseCase,
    topic_source: Arc<dyn TopicSource>,
    questions: QuestionSupplier,
    show_spinner: bool,
}

impl QuizRepl {
    pub fn new(
        start_use_case: StartQuizUseCase,
        submit_use_case: SubmitAnswerUseCase,
        topic_source: Arc<dyn TopicSource>,
        questions: QuestionSupplier,
    ) -> Self {
        Self {
            start_use_case,
            submit_use_case,
            topic_source,
            questions,
            show_spinner: true,
        }
    }

    /// Set whether to show the in-flight spinner.
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Run the interactive REPL over a prepared start configuration.
    pub async fn run(&self, config: QuizConfig) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.print_welcome();

        let Some(request) = self.run_start_phase(&mut lines, config).await? else {
            println!("Bye!");
            return Ok(());
        };

        let questions = (self.questions)(&request);
        if questions.is_empty() {
            println!("No questions available for {}.", request.topic);
            return Ok(());
        }

        let total = questions.len();
        for (number, question) in questions.into_iter().enumerate() {
            println!();
            println!("--- Question {} of {} ---", number + 1, total);
            if !self.run_question(&mut lines, question).await? {
                println!("Bye!");
                return Ok(());
            }
        }

        println!();
        println!("Quiz complete! Thanks for playing.");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             Quizflow - Quiz Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Start-panel commands:");
        println!("  topics          - List available topics");
        println!("  topic <key>     - Select a topic");
        println!("  count <n>       - Set the number of questions (1-50)");
        println!("  reveal on|off   - Toggle the correct-answer reveal");
        println!("  show            - Show the panel");
        println!("  start           - Start the quiz");
        println!("  quit            - Exit");
        println!();
    }

    /// Drive the start panel. Returns the accepted request once the
    /// action layer confirms the start, or `None` to exit.
    async fn run_start_phase(
        &self,
        lines: &mut InputLines,
        config: QuizConfig,
    ) -> std::io::Result<Option<StartRequest>> {
        let mut panel = StartPanel::new(config);

        let topics = self.topic_source.topics();
        print!("{}", ConsoleFormatter::format_start_panel(&panel, &topics));

        loop {
            let Some(line) = Self::read_line(lines, "quiz> ").await? else {
                return Ok(None);
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (command, rest) = match line.split_once(' ') {
                Some((command, rest)) => (command, rest.trim()),
                None => (line, ""),
            };

            match command {
                "quit" | "exit" | "q" => return Ok(None),
                "topics" => {
                    for topic in &topics {
                        println!("  - {} ({})", topic.name(), topic.key());
                    }
                }
                "topic" => {
                    if self.topic_source.contains(rest) {
                        panel.config_mut().set_topic(rest);
                        println!("Topic set to {}.", rest);
                    } else {
                        println!(
                            "{}",
                            ConsoleFormatter::format_notice(
                                "Unknown topic",
                                "Use `topics` to list the available keys.",
                            )
                        );
                    }
                }
                "count" => {
                    // Raw input on purpose: validation happens at start
                    panel.config_mut().set_question_count(rest);
                    println!("Question count set to {}.", rest);
                }
                "reveal" => match rest {
                    "on" => panel.config_mut().set_reveal_preference(true),
                    "off" => panel.config_mut().set_reveal_preference(false),
                    _ => println!("Usage: reveal on|off"),
                },
                "show" => {
                    print!("{}", ConsoleFormatter::format_start_panel(&panel, &topics));
                }
                "start" => {
                    if let Some(request) = self.try_start(&mut panel).await {
                        return Ok(Some(request));
                    }
                    if panel.is_started() {
                        // Started but declined or failed: the panel is
                        // spent, nothing left to drive
                        return Ok(None);
                    }
                }
                _ => {
                    println!("Unknown command: {}", command);
                    println!("Commands: topics, topic, count, reveal, show, start, quit");
                }
            }
        }
    }

    /// Submit the start panel once. Returns the request when the quiz
    /// is confirmed started.
    async fn try_start(&self, panel: &mut StartPanel) -> Option<StartRequest> {
        let spinner = self.spinner("Starting your quiz...");
        let result = self.start_use_case.execute(panel).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        match result {
            Ok(StartQuizOutput::Started {
                quiz_started,
                request,
                user_entry,
                reply_entry,
            }) => {
                println!("{}", ConsoleFormatter::format_entry(&user_entry));
                println!("{}", ConsoleFormatter::format_entry(&reply_entry));
                if quiz_started {
                    Some(request)
                } else {
                    println!(
                        "{}",
                        ConsoleFormatter::format_notice(
                            "Quiz not started",
                            "The assistant declined to start a quiz right now.",
                        )
                    );
                    None
                }
            }
            Ok(StartQuizOutput::Ignored) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_notice("Already started", "This panel is spent.")
                );
                None
            }
            Err(StartQuizError::Validation(e)) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_notice("Check your configuration", &e.to_string())
                );
                None
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                None
            }
        }
    }

    /// Drive one question panel to submission. Returns `false` when the
    /// user quits mid-quiz.
    async fn run_question(
        &self,
        lines: &mut InputLines,
        question: Question,
    ) -> std::io::Result<bool> {
        let mut panel = QuestionPanel::new(question);
        print!("{}", ConsoleFormatter::format_question_panel(&panel));

        loop {
            let Some(line) = Self::read_line(lines, "answer> ").await? else {
                return Ok(false);
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line {
                "quit" | "exit" | "q" => return Ok(false),
                "show" => {
                    print!("{}", ConsoleFormatter::format_question_panel(&panel));
                }
                "submit" => {
                    if self.try_submit(&mut panel).await {
                        return Ok(true);
                    }
                }
                _ => {
                    let Ok(index) = line.parse::<usize>() else {
                        println!("Toggle an option by number, `submit` to answer, `quit` to exit.");
                        continue;
                    };
                    let option = panel
                        .question()
                        .options()
                        .get(index.wrapping_sub(1))
                        .cloned();
                    match option {
                        Some(option) => {
                            // Options come from the panel itself, so
                            // toggling cannot name an unknown option
                            let _ = panel.toggle(&option);
                            print!("{}", ConsoleFormatter::format_question_panel(&panel));
                        }
                        None => {
                            println!(
                                "No option {}. Pick 1-{}.",
                                index,
                                panel.question().options().len()
                            );
                        }
                    }
                }
            }
        }
    }

    /// Submit the question panel once. Returns true when the question
    /// is finished (submitted, or stuck pending after an action error).
    async fn try_submit(&self, panel: &mut QuestionPanel) -> bool {
        let spinner = self.spinner("Checking your answer...");
        let result = self.submit_use_case.execute(panel).await;
        if let Some(spinner) = spinner {
            spinner.finish();
        }

        match result {
            Ok(SubmitAnswerOutput::Submitted {
                user_entry,
                reply_entry,
                ..
            }) => {
                println!("{}", ConsoleFormatter::format_entry(&user_entry));
                println!("{}", ConsoleFormatter::format_entry(&reply_entry));
                if let Some(payload) = panel.reveal() {
                    println!();
                    print!("{}", ConsoleFormatter::format_reveal(&payload));
                }
                true
            }
            Ok(SubmitAnswerOutput::Ignored) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_notice("Already submitted", "Moving on.")
                );
                true
            }
            Err(SubmitAnswerError::EmptySelection(prompt)) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_notice("No option selected", prompt)
                );
                false
            }
            Err(e) => {
                // The panel is permanently pending; only a fresh mount
                // could retry, so move on
                eprintln!("Error: {}", e);
                true
            }
        }
    }

    fn spinner(&self, message: &str) -> Option<PendingSpinner> {
        if self.show_spinner {
            Some(PendingSpinner::start(message.to_string()))
        } else {
            None
        }
    }

    async fn read_line(lines: &mut InputLines, prompt: &str) -> std::io::Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        lines.next_line().await
    }
}
