//! Flatten a lyrics container into plain text.
//!
//! `<br>` elements become newlines, every other element is inlined as its
//! text, and newlines that are only source formatting are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Node, NodeType};
use crate::predicate::Predicate;
use crate::{ExtractError, Result};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid regex: WHITESPACE_RUN"));

/// Options for [`extract_text`] and [`linearize`]
#[derive(Debug, Clone)]
pub struct LinearizeOptions {
    /// Direct children of the container that mark where the lyrics start.
    /// The first child matching any of them is descended into.
    pub content_start: Vec<Predicate>,

    /// Squeeze runs of whitespace inside each text node to a single space
    pub collapse_whitespace: bool,
}

impl Default for LinearizeOptions {
    fn default() -> Self {
        Self {
            content_start: vec![
                Predicate::element("p"),
                Predicate::element("div").with_attr("class", "lyrics"),
            ],
            collapse_whitespace: false,
        }
    }
}

/// Find the first direct child of `container` that starts the lyrics.
///
/// Leading children that match none of the content-start predicates, such as
/// a heading, are skipped.
pub fn content_start<'a>(container: &'a Node, options: &LinearizeOptions) -> Result<&'a Node> {
    container
        .children()
        .find(|child| options.content_start.iter().any(|p| p.matches(child)))
        .ok_or_else(|| ExtractError::ContentStartNotFound {
            container: container.tag.clone(),
        })
}

/// Extract the lyrics text of a container node.
///
/// The content-start child itself is not rendered, only its children are.
/// No trimming is applied to the result.
pub fn extract_text(container: &Node, options: &LinearizeOptions) -> Result<String> {
    let start = content_start(container, options)?;
    Ok(linearize(&start.children, options))
}

/// Linearize a sibling list into text.
pub fn linearize(nodes: &[Node], options: &LinearizeOptions) -> String {
    let mut out = String::new();
    let mut stack = vec![nodes.iter()];

    while let Some(siblings) = stack.last_mut() {
        let Some(node) = siblings.next() else {
            stack.pop();
            continue;
        };

        match node.node_type {
            NodeType::Text => push_text(&mut out, node.value.as_deref().unwrap_or(""), options),
            NodeType::Element if node.tag == "br" => out.push('\n'),
            NodeType::Element => stack.push(node.children.iter()),
            _ => {}
        }
    }

    out
}

fn push_text(out: &mut String, text: &str, options: &LinearizeOptions) {
    let stripped = text.replace('\n', "");
    if options.collapse_whitespace {
        out.push_str(&WHITESPACE_RUN.replace_all(&stripped, " "));
    } else {
        out.push_str(&stripped);
    }
}
