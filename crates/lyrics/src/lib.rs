//! # lyrics
//!
//! Extract song lyrics from the HTML pages of a lyrics site.
//!
//! ## Design
//!
//! The site has shipped several page templates over time, each wrapping the
//! lyrics in a differently marked container. [`Signatures`] keeps one
//! predicate per known template, newest first, and [`LyricsService`] tries
//! them in order before linearizing the matched container with
//! [`lyrics_core`].
//!
//! - **Parser agnostic**: [`LyricsService::extract`] takes a [`Node`] tree
//! - **HTML strings**: the `html` feature (default) parses with `scraper`
//! - **Fetching**: the `fetch` feature adds an async `reqwest` client
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use lyrics::{LyricsService, Node};
//!
//! let service = LyricsService::new();
//!
//! let div = Node::element_with_attrs("div", vec![("class", "lyrics")])
//!     .with_child(Node::element("p").with_child(Node::text("Hello World")));
//!
//! assert_eq!(service.extract(&div).unwrap(), "Hello World");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use lyrics::LyricsService;
//!
//! let service = LyricsService::new();
//! let text = service
//!     .extract_html(r#"<div class="lyrics"><p>Hello<br>World</p></div>"#)
//!     .unwrap();
//! assert_eq!(text, "Hello\nWorld");
//! ```

#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "html")]
pub mod html;
mod service;
mod signatures;

#[cfg(feature = "fetch")]
pub use fetch::{parse_url, FetchOptions, Fetcher};
#[cfg(feature = "html")]
pub use html::{parse_document, parse_fragment};
pub use lyrics_core::{ExtractError, Node, NodeType, Predicate};
pub use service::{LyricsOptions, LyricsService};
pub use signatures::Signatures;

/// Error type for lyrics operations
#[derive(Debug, thiserror::Error)]
pub enum LyricsError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[cfg(feature = "fetch")]
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[cfg(feature = "fetch")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[cfg(feature = "fetch")]
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

pub type Result<T> = std::result::Result<T, LyricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_is_transparent() {
        let err = LyricsError::from(ExtractError::NodeNotFound {
            last_tried: Some(Predicate::element("div").with_attr("class", "lyrics")),
        });
        assert!(matches!(err, LyricsError::Extract(_)));
        assert_eq!(
            err.to_string(),
            "missing <div class=\"lyrics\"> node in the node tree"
        );
    }
}
