//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizflow
#[derive(Parser, Debug)]
#[command(name = "quizflow")]
#[command(author, version, about = "Interactive quiz panels embedded in a conversation")]
#[command(long_about = r#"
Quizflow hosts an interactive quiz inside a conversational session.

The flow has two panel types:
1. Start panel: pick a topic, the number of questions, and whether
   correct answers are revealed after each submission
2. Question panels: choose one or more options and submit; each
   submission appends your restatement and the assistant's reply to
   the conversation transcript

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizflow.toml     Project-level config
3. ~/.config/quizflow/config.toml   Global config

Example:
  quizflow
  quizflow --topic javascript -n 5 --reveal
  quizflow --tree --script
"#)]
pub struct Cli {
    /// Topic key to preselect in the start panel
    #[arg(short, long, value_name = "KEY")]
    pub topic: Option<String>,

    /// Number of questions to prefill (validated when the quiz starts)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub questions: Option<String>,

    /// Switch the answer-reveal toggle on
    #[arg(long)]
    pub reveal: bool,

    /// Use the hierarchical topic tree instead of the flat subject list
    #[arg(long)]
    pub tree: bool,

    /// Run the scripted demo instead of the interactive panels
    #[arg(long)]
    pub script: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the in-flight spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
