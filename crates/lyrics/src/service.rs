//! LyricsService - the main entry point for lyrics extraction.

use lyrics_core::{extract_text, find_first, LinearizeOptions, Node, Predicate};
use tracing::debug;

use crate::signatures::Signatures;
use crate::Result;

/// Options for LyricsService
#[derive(Debug, Clone)]
pub struct LyricsOptions {
    /// Children of the container where the lyrics start
    pub content_start: Vec<Predicate>,

    /// Squeeze whitespace runs inside text nodes
    pub collapse_whitespace: bool,

    /// Trim leading and trailing whitespace from the final text
    pub trim: bool,
}

impl Default for LyricsOptions {
    fn default() -> Self {
        let linearize = LinearizeOptions::default();
        Self {
            content_start: linearize.content_start,
            collapse_whitespace: linearize.collapse_whitespace,
            trim: true,
        }
    }
}

impl LyricsOptions {
    fn linearize_options(&self) -> LinearizeOptions {
        LinearizeOptions {
            content_start: self.content_start.clone(),
            collapse_whitespace: self.collapse_whitespace,
        }
    }
}

/// Finds the lyrics container of a page and turns it into text
pub struct LyricsService {
    options: LyricsOptions,
    signatures: Signatures,
}

impl LyricsService {
    /// Create a new LyricsService with default options and known signatures
    pub fn new() -> Self {
        Self {
            options: LyricsOptions::default(),
            signatures: Signatures::known(),
        }
    }

    /// Create a LyricsService with custom options
    pub fn with_options(options: LyricsOptions) -> Self {
        Self {
            options,
            signatures: Signatures::known(),
        }
    }

    /// Replace the container signatures
    pub fn with_signatures(mut self, signatures: Signatures) -> Self {
        self.signatures = signatures;
        self
    }

    /// Extract lyrics from a parsed document
    pub fn extract(&self, root: &Node) -> Result<String> {
        let candidates = self.signatures.predicates();
        let container = find_first(root, &candidates)?;
        debug!(container = %container.tag, "extracting lyrics text");

        let text = extract_text(container, &self.options.linearize_options())?;

        if self.options.trim {
            Ok(text.trim().to_string())
        } else {
            Ok(text)
        }
    }

    /// Parse an HTML page and extract its lyrics
    #[cfg(feature = "html")]
    pub fn extract_html(&self, html: &str) -> Result<String> {
        let document = crate::html::parse_document(html);
        self.extract(&document)
    }

    /// Get the container signatures
    pub fn signatures(&self) -> &Signatures {
        &self.signatures
    }

    /// Get mutable access to the container signatures
    pub fn signatures_mut(&mut self) -> &mut Signatures {
        &mut self.signatures
    }

    /// Get the current options
    pub fn options(&self) -> &LyricsOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut LyricsOptions {
        &mut self.options
    }
}

impl Default for LyricsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LyricsError;
    use lyrics_core::ExtractError;

    fn page(container: Node) -> Node {
        Node::document().with_child(
            Node::element("html").with_child(Node::element("body").with_child(container)),
        )
    }

    fn lyrics_div(children: Vec<Node>) -> Node {
        children.into_iter().fold(
            Node::element_with_attrs("div", vec![("class", "lyrics")]),
            Node::with_child,
        )
    }

    #[test]
    fn test_extract_trims_by_default() {
        let service = LyricsService::new();
        let doc = page(lyrics_div(vec![
            Node::text("\n  "),
            Node::element("p")
                .with_child(Node::element("br"))
                .with_child(Node::text("Hello"))
                .with_child(Node::element("br"))
                .with_child(Node::text("World "))
                .with_child(Node::element("br")),
        ]));

        assert_eq!(service.extract(&doc).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_extract_without_trim() {
        let options = LyricsOptions {
            trim: false,
            ..Default::default()
        };
        let service = LyricsService::with_options(options);
        let doc = page(lyrics_div(vec![Node::element("p")
            .with_child(Node::text(" a "))
            .with_child(Node::element("br"))]));

        assert_eq!(service.extract(&doc).unwrap(), " a \n");
    }

    #[test]
    fn test_extract_not_found() {
        let service = LyricsService::new();
        let doc = page(Node::element("div").with_child(Node::text("nothing here")));

        let err = service.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            LyricsError::Extract(ExtractError::NodeNotFound { last_tried: Some(_) })
        ));
        assert!(err.to_string().contains("<div class=\"lyrics\">"));
    }

    #[test]
    fn test_extract_unrecognized_container_shape() {
        let service = LyricsService::new();
        let doc = page(lyrics_div(vec![Node::element("span").with_child(Node::text("x"))]));

        let err = service.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            LyricsError::Extract(ExtractError::ContentStartNotFound { .. })
        ));
    }

    #[test]
    fn test_custom_signature() {
        let mut service = LyricsService::new();
        service.signatures_mut().add(
            "container",
            Predicate::element("section").with_attr("data-lyrics-container", "true"),
        );
        let doc = page(
            Node::element_with_attrs("section", vec![("data-lyrics-container", "true")])
                .with_child(Node::element("p").with_child(Node::text("Found"))),
        );

        assert_eq!(service.extract(&doc).unwrap(), "Found");
    }

    #[test]
    fn test_empty_signatures() {
        let service = LyricsService::new().with_signatures(Signatures::empty());
        let doc = page(lyrics_div(vec![Node::element("p")]));

        let err = service.extract(&doc).unwrap_err();
        assert!(matches!(
            err,
            LyricsError::Extract(ExtractError::NodeNotFound { last_tried: None })
        ));
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_extract_html() {
        let service = LyricsService::new();
        let result = service
            .extract_html(r#"<div class="lyrics"><p>Hello <b>World</b></p></div>"#)
            .unwrap();
        assert_eq!(result, "Hello World");
    }
}
