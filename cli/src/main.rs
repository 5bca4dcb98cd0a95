//! CLI entrypoint for quizflow
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizflow_application::{
    StartQuizOutput, StartQuizUseCase, SubmitAnswerOutput, SubmitAnswerUseCase, TopicSource,
    TranscriptLogger,
};
use quizflow_domain::{QuestionMode, QuestionPanel, QuizConfig, StartPanel};
use quizflow_infrastructure::{
    ConfigLoader, FileConfig, InMemoryTranscript, JsonlTranscriptLogger, QuestionBank,
    ScriptedQuizGateway, StaticTopicCatalog, TopicTreeCatalog,
};
use quizflow_presentation::{Cli, ConsoleFormatter, QuizRepl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // Initialize logging based on verbosity level
    let directive = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    // Keep the appender guard alive for the whole run
    let _appender_guard = init_tracing(&config, directive)?;

    info!("Starting quizflow");

    // === Dependency Injection ===
    let bank = QuestionBank::builtin();
    let gateway = Arc::new(ScriptedQuizGateway::new(bank.clone()));
    let transcript = Arc::new(InMemoryTranscript::new());

    let topic_source: Arc<dyn TopicSource> = if cli.tree {
        Arc::new(TopicTreeCatalog::builtin())
    } else {
        Arc::new(StaticTopicCatalog::builtin())
    };

    let mut start_use_case = StartQuizUseCase::new(gateway.clone(), transcript.clone());
    let mut submit_use_case = SubmitAnswerUseCase::new(gateway.clone(), transcript.clone());

    if let Some(path) = &config.log.transcript_file {
        match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                let logger: Arc<dyn TranscriptLogger> = Arc::new(logger);
                start_use_case = start_use_case.with_transcript_logger(logger.clone());
                submit_use_case = submit_use_case.with_transcript_logger(logger);
            }
            None => warn!("Transcript event log disabled"),
        }
    }

    // Seed the start panel: file config under CLI overrides. The raw
    // question-count string goes in untouched so validation happens at
    // start time, not here.
    let defaults = config.quiz_defaults();
    let mut panel_config = QuizConfig::new(defaults.topic, defaults.question_count);
    panel_config.set_reveal_preference(defaults.reveal);
    if let Some(topic) = &cli.topic {
        panel_config.set_topic(topic);
    }
    if let Some(raw) = &cli.questions {
        panel_config.set_question_count(raw);
    }
    if cli.reveal {
        panel_config.set_reveal_preference(true);
    }

    if cli.script {
        return run_script(&start_use_case, &submit_use_case, &bank, panel_config).await;
    }

    let supplier_bank = bank.clone();
    let repl = QuizRepl::new(
        start_use_case,
        submit_use_case,
        topic_source,
        Box::new(move |request: &quizflow_domain::StartRequest| {
            // The reveal preference accepted at start becomes each
            // question's static reveal flag
            supplier_bank
                .questions_for(&request.topic, request.question_count)
                .into_iter()
                .map(|q| q.with_reveal(request.reveal_preference))
                .collect()
        }),
    )
    .with_spinner(!cli.quiet);

    repl.run(panel_config).await?;
    Ok(())
}

fn init_tracing(
    config: &FileConfig,
    directive: &str,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if let Some(path) = &config.log.file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_target(false)
            .init();
        Ok(None)
    }
}

/// Non-interactive demo: start a quiz and answer every question with a
/// fixed policy, printing the conversation as it grows.
async fn run_script(
    start_use_case: &StartQuizUseCase,
    submit_use_case: &SubmitAnswerUseCase,
    bank: &QuestionBank,
    config: QuizConfig,
) -> Result<()> {
    let mut panel = StartPanel::new(config);

    let output = start_use_case.execute(&mut panel).await?;
    let request = match output {
        StartQuizOutput::Started {
            quiz_started,
            request,
            user_entry,
            reply_entry,
        } => {
            println!("{}", ConsoleFormatter::format_entry(&user_entry));
            println!("{}", ConsoleFormatter::format_entry(&reply_entry));
            if !quiz_started {
                bail!("The assistant declined to start a quiz");
            }
            request
        }
        StartQuizOutput::Ignored => bail!("Start panel was already spent"),
    };

    for question in bank.questions_for(&request.topic, request.question_count) {
        let mut panel = QuestionPanel::new(question.with_reveal(request.reveal_preference));

        // Fixed answering policy: first option, plus the second for
        // multiple choice
        let picks: Vec<String> = match panel.question().mode() {
            QuestionMode::SingleChoice => panel.question().options().iter().take(1).cloned().collect(),
            QuestionMode::MultipleChoice => panel.question().options().iter().take(2).cloned().collect(),
        };
        for pick in &picks {
            panel
                .toggle(pick)
                .map_err(|e| anyhow::anyhow!("Demo selection failed: {}", e))?;
        }

        println!();
        print!("{}", ConsoleFormatter::format_question_panel(&panel));

        match submit_use_case.execute(&mut panel).await? {
            SubmitAnswerOutput::Submitted {
                user_entry,
                reply_entry,
                ..
            } => {
                println!("{}", ConsoleFormatter::format_entry(&user_entry));
                println!("{}", ConsoleFormatter::format_entry(&reply_entry));
                if let Some(payload) = panel.reveal() {
                    print!("{}", ConsoleFormatter::format_reveal(&payload));
                }
            }
            SubmitAnswerOutput::Ignored => {}
        }
    }

    println!();
    println!("Demo complete.");
    Ok(())
}
