//! Node predicates: the shape of a node we look for.

use std::fmt;

use crate::node::{Node, NodeType};

/// Test whether a node carries the attribute `key`.
///
/// With `Some(value)` the first attribute named `key` must also have exactly
/// that value. Comparison is case-sensitive and performs no normalization.
pub fn has_attribute(node: &Node, key: &str, value: Option<&str>) -> bool {
    match (node.attr(key), value) {
        (Some(found), Some(expected)) => found == expected,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// A template of node type, tag, and required attributes.
///
/// A node satisfies the predicate when type and tag are equal and every
/// required `(key, value)` pair is present with an exact value. Extra
/// attributes on the node are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Required node type
    pub node_type: NodeType,
    /// Required tag, lowercase
    pub tag: String,
    /// Required attributes; keys are unique
    attributes: Vec<(String, String)>,
}

impl Predicate {
    /// Match any element with the given tag
    pub fn element(tag: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            tag: tag.to_lowercase(),
            attributes: Vec::new(),
        }
    }

    /// Require an attribute with an exact value.
    ///
    /// Requiring the same key twice replaces the earlier value.
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => self.attributes.push((key.to_string(), value.to_string())),
        }
        self
    }

    /// Required attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Check if a node satisfies this predicate
    pub fn matches(&self, node: &Node) -> bool {
        if node.node_type != self.node_type || node.tag != self.tag {
            return false;
        }

        let satisfied = self
            .attributes
            .iter()
            .filter(|(key, value)| has_attribute(node, key, Some(value)))
            .count();

        satisfied == self.attributes.len()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        write!(f, ">")
    }
}
