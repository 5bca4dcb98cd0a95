//! Console formatter for panels, transcript entries, and notices

use colored::Colorize;
use quizflow_domain::{
    Author, QuestionMode, QuestionPanel, RevealPayload, StartPanel, Topic, TranscriptEntry,
};

/// Formats quiz panels and transcript entries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the start panel with the available topics.
    pub fn format_start_panel(panel: &StartPanel, topics: &[Topic]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Start a Quiz".bold()));
        output.push_str(
            "Select your preferred topic, set the number of questions, and choose whether to show the correct answers.\n\n",
        );

        output.push_str(&format!("{}\n", "Topic:".cyan().bold()));
        for topic in topics {
            let marker = if topic.key() == panel.config().topic() {
                ">".green().bold().to_string()
            } else {
                " ".to_string()
            };
            output.push_str(&format!("  {} {} ({})\n", marker, topic.name(), topic.key()));
        }

        output.push_str(&format!(
            "\n{} {}   {} {}\n",
            "Total questions:".cyan().bold(),
            panel.config().question_count_input(),
            "Show correct answer:".cyan().bold(),
            if panel.config().reveal_preference() {
                "on"
            } else {
                "off"
            },
        ));

        if panel.is_started() {
            output.push_str(&format!("\n{}\n", "Quiz already started.".dimmed()));
        }

        output
    }

    /// Format a question panel: prompt plus option controls.
    pub fn format_question_panel(panel: &QuestionPanel) -> String {
        let mut output = String::new();
        let question = panel.question();

        output.push_str(&format!("{}\n\n", question.prompt().bold()));

        for (index, option) in question.options().iter().enumerate() {
            let marker = match (question.mode(), panel.is_selected(option)) {
                (QuestionMode::MultipleChoice, true) => "[x]",
                (QuestionMode::MultipleChoice, false) => "[ ]",
                (QuestionMode::SingleChoice, true) => "(o)",
                (QuestionMode::SingleChoice, false) => "( )",
            };
            output.push_str(&format!("  {} {} {}\n", marker, index + 1, option));
        }

        let hint = if panel.gate().is_submitted() {
            "Submitted.".dimmed().to_string()
        } else {
            format!(
                "Toggle an option by number, then `submit`. ({})",
                question.mode()
            )
            .dimmed()
            .to_string()
        };
        output.push_str(&format!("\n{}\n", hint));

        output
    }

    /// Format one transcript entry.
    pub fn format_entry(entry: &TranscriptEntry) -> String {
        match entry.author {
            Author::User => format!("{} {}", "You:".cyan().bold(), entry.content),
            Author::Assistant => format!("{} {}", "Quiz:".green().bold(), entry.content),
        }
    }

    /// Format the answer block shown once the reveal gate opens.
    pub fn format_reveal(payload: &RevealPayload<'_>) -> String {
        let mut output = String::new();

        if let Some(explanation) = payload.explanation {
            output.push_str(&format!("{}\n", explanation));
        }
        if let Some(source) = payload.source {
            output.push_str(&format!("Source: {}\n", source));
        }
        output.push_str(&format!("{}\n", "Explanation".bold()));
        output.push_str(&format!("The correct answer is: \"{}\".\n", payload.answer));

        output
    }

    /// Format a user-actionable validation notice.
    pub fn format_notice(title: &str, description: &str) -> String {
        format!("{} {}", format!("{}:", title).yellow().bold(), description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizflow_domain::{Question, QuizConfig};

    fn plain() {
        colored::control::set_override(false);
    }

    fn question_panel() -> QuestionPanel {
        QuestionPanel::new(
            Question::new(
                "Pick one",
                QuestionMode::SingleChoice,
                vec!["A".to_string(), "B".to_string()],
                "B",
            )
            .with_reveal(true)
            .with_explanation("B wins.")
            .with_source("https://example.com"),
        )
    }

    #[test]
    fn test_question_panel_markers() {
        plain();
        let mut panel = question_panel();
        panel.toggle("B").unwrap();

        let output = ConsoleFormatter::format_question_panel(&panel);
        assert!(output.contains("( ) 1 A"));
        assert!(output.contains("(o) 2 B"));
    }

    #[test]
    fn test_multi_markers() {
        plain();
        let mut panel = QuestionPanel::new(Question::new(
            "Pick all",
            QuestionMode::MultipleChoice,
            vec!["A".to_string(), "B".to_string()],
            "A",
        ));
        panel.toggle("A").unwrap();

        let output = ConsoleFormatter::format_question_panel(&panel);
        assert!(output.contains("[x] 1 A"));
        assert!(output.contains("[ ] 2 B"));
    }

    #[test]
    fn test_reveal_block() {
        plain();
        let mut panel = question_panel();
        panel.toggle("B").unwrap();
        panel.try_submit().unwrap();
        panel.resolve(true);

        let payload = panel.reveal().unwrap();
        let output = ConsoleFormatter::format_reveal(&payload);
        assert!(output.contains("B wins."));
        assert!(output.contains("Source: https://example.com"));
        assert!(output.contains("The correct answer is: \"B\"."));
    }

    #[test]
    fn test_start_panel_marks_selected_topic() {
        plain();
        let panel = StartPanel::new(QuizConfig::new("javascript", 3));
        let topics = vec![
            Topic::new("reactjs", "React"),
            Topic::new("javascript", "JavaScript"),
        ];

        let output = ConsoleFormatter::format_start_panel(&panel, &topics);
        assert!(output.contains("> JavaScript (javascript)"));
        assert!(output.contains("  React (reactjs)"));
        assert!(output.contains("Total questions: 3"));
    }

    #[test]
    fn test_notice() {
        plain();
        let notice = ConsoleFormatter::format_notice("No option selected", "Please select an option.");
        assert_eq!(notice, "No option selected: Please select an option.");
    }
}
