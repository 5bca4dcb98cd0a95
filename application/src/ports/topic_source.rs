//! Topic source port
//!
//! The start panel presents a topic picker backed by an external
//! catalog. A catalog may be a flat subject list or a hierarchical
//! content tree; the shape difference lives in the adapters, and the
//! panel sees one contract.

use quizflow_domain::Topic;

/// Catalog of selectable quiz topics.
pub trait TopicSource: Send + Sync {
    /// All selectable topics, in presentation order.
    fn topics(&self) -> Vec<Topic>;

    /// Whether a topic key is selectable in this catalog.
    fn contains(&self, key: &str) -> bool {
        self.topics().iter().any(|t| t.key() == key)
    }
}
