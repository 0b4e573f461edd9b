//! Pre-order search for the first node matching a predicate.

use tracing::debug;

use crate::node::Node;
use crate::predicate::Predicate;
use crate::{ExtractError, Result};

/// Find the first node, in pre-order, that satisfies `predicate`.
///
/// The search visits a node before its children and children left to right,
/// and stops at the first match without visiting any further node.
pub fn find<'a>(root: &'a Node, predicate: &Predicate) -> Option<&'a Node> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if predicate.matches(node) {
            return Some(node);
        }
        // Reversed so the leftmost child is popped first
        stack.extend(node.children.iter().rev());
    }

    None
}

/// Try each candidate in order and return the first node matched by the
/// first candidate that matches anywhere in the tree.
///
/// Fails with [`ExtractError::NodeNotFound`] naming the last candidate tried,
/// or carrying no candidate when `candidates` is empty.
pub fn find_first<'a>(root: &'a Node, candidates: &[Predicate]) -> Result<&'a Node> {
    for predicate in candidates {
        debug!(%predicate, "searching for container");
        if let Some(node) = find(root, predicate) {
            debug!(%predicate, "container found");
            return Ok(node);
        }
    }

    Err(ExtractError::NodeNotFound {
        last_tried: candidates.last().cloned(),
    })
}
