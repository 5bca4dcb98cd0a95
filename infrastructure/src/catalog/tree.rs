//! Hierarchical topic-tree catalog.
//!
//! Mirrors a content tree where groups are section labels and leaves
//! point at quizzable content files. Only leaves are selectable; the
//! flattening itself lives on [`TopicNode`] in the domain layer.

use quizflow_application::TopicSource;
use quizflow_domain::{Topic, TopicNode};
use thiserror::Error;

/// Errors raised when loading a topic tree from TOML.
#[derive(Error, Debug)]
pub enum TopicTreeError {
    #[error("Invalid topic tree: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Topic tree has no selectable topics")]
    NoLeaves,
}

/// Topic catalog backed by a hierarchical content tree.
pub struct TopicTreeCatalog {
    root: TopicNode,
}

impl TopicTreeCatalog {
    /// Build from an already-constructed tree.
    ///
    /// Returns an error if no leaf is reachable: a start panel over an
    /// empty catalog could never produce a valid topic.
    pub fn new(root: TopicNode) -> Result<Self, TopicTreeError> {
        if !root.has_leaves() {
            return Err(TopicTreeError::NoLeaves);
        }
        Ok(Self { root })
    }

    /// Parse a tree from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, TopicTreeError> {
        let root: TopicNode = toml::from_str(raw)?;
        Self::new(root)
    }

    /// The built-in content tree used by the demo host.
    pub fn builtin() -> Self {
        let root = TopicNode::group(
            "subjects",
            vec![
                TopicNode::group(
                    "React",
                    vec![
                        TopicNode::leaf("Hooks", "reactjs-hooks.mdx"),
                        TopicNode::leaf("Components", "reactjs-components.mdx"),
                    ],
                ),
                TopicNode::group(
                    "JavaScript",
                    vec![
                        TopicNode::leaf("Basics", "javascript-basics.mdx"),
                        TopicNode::leaf("Advanced", "javascript-advanced.mdx"),
                    ],
                ),
            ],
        );
        Self { root }
    }

    pub fn root(&self) -> &TopicNode {
        &self.root
    }
}

impl TopicSource for TopicTreeCatalog {
    fn topics(&self) -> Vec<Topic> {
        self.root.leaves()
    }
}
