//! # lyrics-core
//!
//! Locate the lyrics container in a parsed HTML tree and turn it into text.
//!
//! The crate does no parsing and no I/O. Callers build a [`Node`] tree with
//! whatever HTML parser they like, then:
//!
//! 1. [`find_first`] tries an ordered list of container [`Predicate`]s and
//!    returns the first node, in pre-order, matched by the first predicate
//!    that matches anywhere.
//! 2. [`extract_text`] skips leading non-lyrics children of that container
//!    and linearizes the lyrics block, turning `<br>` into newlines.
//!
//! ## Example
//!
//! ```rust
//! use lyrics_core::{extract_text, find_first, LinearizeOptions, Node, Predicate};
//!
//! let page = Node::document().with_child(
//!     Node::element_with_attrs("div", vec![("class", "lyrics")]).with_child(
//!         Node::element("p")
//!             .with_child(Node::text("Hello"))
//!             .with_child(Node::element("br"))
//!             .with_child(Node::text("World")),
//!     ),
//! );
//!
//! let candidates = [Predicate::element("div").with_attr("class", "lyrics")];
//! let container = find_first(&page, &candidates).unwrap();
//! let text = extract_text(container, &LinearizeOptions::default()).unwrap();
//! assert_eq!(text, "Hello\nWorld");
//! ```

pub mod linearize;
pub mod matcher;
pub mod node;
pub mod predicate;

pub use linearize::{content_start, extract_text, linearize, LinearizeOptions};
pub use matcher::{find, find_first};
pub use node::{Node, NodeType};
pub use predicate::{has_attribute, Predicate};

/// Error type for lyrics extraction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// No container predicate matched anywhere in the tree
    #[error("missing {} node in the node tree", describe(.last_tried.as_ref()))]
    NodeNotFound {
        /// Last predicate tried, `None` if there were no candidates
        last_tried: Option<Predicate>,
    },

    /// The container has no child where the lyrics start
    #[error("no lyrics content found inside the <{container}> container")]
    ContentStartNotFound {
        /// Tag of the matched container
        container: String,
    },
}

fn describe(predicate: Option<&Predicate>) -> String {
    predicate.map_or_else(|| "container (no candidates)".to_string(), Predicate::to_string)
}

pub type Result<T> = std::result::Result<T, ExtractError>;
