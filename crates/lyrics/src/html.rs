//! HTML parsing support.
//!
//! This module parses HTML strings with `scraper` (html5ever) and converts
//! the result to the [`Node`] structure used by the extractor.

use ego_tree::NodeRef;
use scraper::{Html, Node as ScraperNode};

use crate::Node;

/// Parse a full HTML page into a document tree.
///
/// # Example
///
/// ```rust
/// use lyrics::parse_document;
///
/// let doc = parse_document("<!DOCTYPE html><div class=\"lyrics\"><p>Hi</p></div>");
/// assert_eq!(doc.children.len(), 2);
/// ```
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    convert(document.tree.root())
}

/// Parse an HTML fragment. The returned root is a document node wrapping the
/// `<html>` element html5ever creates for fragments.
pub fn parse_fragment(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    convert(fragment.tree.root())
}

/// Convert a scraper tree node and its descendants to our Node structure.
///
/// Walks with an explicit stack of open nodes so nesting depth is not bound
/// by the call stack.
fn convert(root: NodeRef<ScraperNode>) -> Node {
    let mut stack = vec![(shallow(root), root.children())];
    let mut finished = None;

    while let Some((_, children)) = stack.last_mut() {
        if let Some(child) = children.next() {
            stack.push((shallow(child), child.children()));
            continue;
        }

        // All children converted: attach the node to its parent
        if let Some((node, _)) = stack.pop() {
            match stack.last_mut() {
                Some((parent, _)) => parent.add_child(node),
                None => finished = Some(node),
            }
        }
    }

    finished.unwrap_or_else(Node::document)
}

/// Convert a single scraper node, without children
fn shallow(source: NodeRef<ScraperNode>) -> Node {
    match source.value() {
        ScraperNode::Document | ScraperNode::Fragment => Node::document(),
        ScraperNode::Doctype(doctype) => Node::doctype(doctype.name()),
        ScraperNode::Comment(comment) => Node::comment(comment),
        ScraperNode::Text(text) => Node::text(text),
        ScraperNode::Element(element) => {
            Node::element_with_attrs(element.name(), element.attrs().collect())
        }
        ScraperNode::ProcessingInstruction(pi) => Node::comment(&pi.data),
    }
}
