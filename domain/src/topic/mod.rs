//! Topic catalog value objects.
//!
//! The start panel is parameterized by an injected topic source; the
//! source may be a flat subject list or a hierarchical content tree.
//! Both flatten to a list of [`Topic`]s for selection.

use serde::{Deserialize, Serialize};

/// A selectable quiz topic (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    key: String,
    name: String,
}

impl Topic {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// The opaque key handed to the action layer.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display name shown in the start panel.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A node in a hierarchical topic catalog
///
/// Groups carry no key of their own; only leaves are selectable. Groups
/// whose subtree holds no leaves disappear when flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicNode {
    Leaf { name: String, key: String },
    Group { name: String, children: Vec<TopicNode> },
}

impl TopicNode {
    pub fn leaf(name: impl Into<String>, key: impl Into<String>) -> Self {
        TopicNode::Leaf {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<TopicNode>) -> Self {
        TopicNode::Group {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TopicNode::Leaf { name, .. } => name,
            TopicNode::Group { name, .. } => name,
        }
    }

    /// True iff this subtree contains at least one selectable leaf.
    pub fn has_leaves(&self) -> bool {
        match self {
            TopicNode::Leaf { .. } => true,
            TopicNode::Group { children, .. } => children.iter().any(TopicNode::has_leaves),
        }
    }

    /// Flatten the subtree into selectable topics, depth-first.
    pub fn leaves(&self) -> Vec<Topic> {
        let mut topics = Vec::new();
        self.collect_leaves(&mut topics);
        topics
    }

    fn collect_leaves(&self, into: &mut Vec<Topic>) {
        match self {
            TopicNode::Leaf { name, key } => into.push(Topic::new(key, name)),
            TopicNode::Group { children, .. } => {
                for child in children {
                    child.collect_leaves(into);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TopicNode {
        TopicNode::group(
            "root",
            vec![
                TopicNode::group(
                    "React",
                    vec![
                        TopicNode::leaf("Hooks", "reactjs-hooks.mdx"),
                        TopicNode::leaf("Components", "reactjs-components.mdx"),
                    ],
                ),
                TopicNode::group("Empty section", vec![]),
                TopicNode::leaf("JavaScript Basics", "javascript-basics.mdx"),
            ],
        )
    }

    #[test]
    fn test_leaves_flatten_depth_first() {
        let keys: Vec<String> = sample_tree()
            .leaves()
            .iter()
            .map(|t| t.key().to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "reactjs-hooks.mdx",
                "reactjs-components.mdx",
                "javascript-basics.mdx"
            ]
        );
    }

    #[test]
    fn test_empty_groups_have_no_leaves() {
        let node = TopicNode::group("Empty section", vec![]);
        assert!(!node.has_leaves());
        assert!(node.leaves().is_empty());
    }

    #[test]
    fn test_leaf_display_uses_name() {
        let topic = Topic::new("reactjs-hooks.mdx", "Hooks");
        assert_eq!(topic.to_string(), "Hooks");
        assert_eq!(topic.key(), "reactjs-hooks.mdx");
    }
}
