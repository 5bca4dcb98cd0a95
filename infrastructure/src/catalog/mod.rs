//! Topic catalog adapters.
//!
//! Two shapes of the same contract: a flat subject list and a
//! hierarchical content tree whose leaves are the selectable topics.

mod static_list;
mod tree;

pub use static_list::StaticTopicCatalog;
pub use tree::{TopicTreeCatalog, TopicTreeError};
