//! Flat subject-list catalog.

use quizflow_application::TopicSource;
use quizflow_domain::Topic;

/// Topic catalog backed by a fixed subject list.
pub struct StaticTopicCatalog {
    subjects: Vec<Topic>,
}

impl StaticTopicCatalog {
    pub fn new(subjects: Vec<Topic>) -> Self {
        Self { subjects }
    }

    /// The built-in subject list used by the demo host.
    pub fn builtin() -> Self {
        Self::new(vec![
            Topic::new("reactjs", "React"),
            Topic::new("javascript", "JavaScript"),
        ])
    }
}

impl TopicSource for StaticTopicCatalog {
    fn topics(&self) -> Vec<Topic> {
        self.subjects.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_subjects() {
        let catalog = StaticTopicCatalog::builtin();
        let topics = catalog.topics();
        assert!(topics.iter().any(|t| t.key() == "reactjs"));
        assert!(catalog.contains("javascript"));
        assert!(!catalog.contains("cooking"));
    }

    #[test]
    fn test_custom_subjects_keep_order() {
        let catalog = StaticTopicCatalog::new(vec![
            Topic::new("b", "B"),
            Topic::new("a", "A"),
        ]);
        let keys: Vec<_> = catalog.topics().iter().map(|t| t.key().to_string()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
