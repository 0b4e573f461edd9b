//! DOM node structure consumed by the matcher and the linearizer.
//!
//! Any HTML parser can convert its output to this structure. A node owns its
//! children in document order, so the first child is `children[0]` and the
//! next sibling of `children[i]` is `children[i + 1]`.

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Doctype node (nodeType = 10)
    Doctype = 10,
}

/// A node of a parsed HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Kind of node
    pub node_type: NodeType,

    /// Lowercase tag name for elements, doctype name for doctypes, empty otherwise
    pub tag: String,

    /// Text payload for text and comment nodes
    pub value: Option<String>,

    /// Attributes in source order. Keys may repeat; lookups use the first one.
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    fn new(node_type: NodeType, tag: &str, value: Option<&str>) -> Self {
        Self {
            node_type,
            tag: tag.to_string(),
            value: value.map(str::to_string),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a document root
    pub fn document() -> Self {
        Self::new(NodeType::Document, "", None)
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, &tag_name.to_lowercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::new(NodeType::Text, "", Some(content))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::new(NodeType::Comment, "", Some(content))
    }

    /// Create a doctype node, e.g. `Node::doctype("html")`
    pub fn doctype(name: &str) -> Self {
        Self::new(NodeType::Doctype, name, None)
    }

    /// Append a child and return the node, for building trees inline
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is an element with the given (lowercase) tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.is_element() && self.tag == tag
    }

    /// Get an attribute value by name. The first occurrence of a key wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value.clone().unwrap_or_default(),
            NodeType::Comment | NodeType::Doctype => String::new(),
            _ => self.children().map(Node::text_content).collect(),
        }
    }

    /// Reconstruct outer HTML
    pub fn outer_html(&self) -> String {
        match self.node_type {
            NodeType::Text => self.value.clone().unwrap_or_default(),
            NodeType::Comment => format!("<!--{}-->", self.value.as_deref().unwrap_or("")),
            NodeType::Doctype => format!("<!DOCTYPE {}>", self.tag),
            NodeType::Document => self.inner_html(),
            NodeType::Element => {
                let attrs = self.attributes_string();
                let open = if attrs.is_empty() {
                    format!("<{}>", self.tag)
                } else {
                    format!("<{} {}>", self.tag, attrs)
                };

                if self.is_void_element() {
                    open
                } else {
                    format!("{}{}</{}>", open, self.inner_html(), self.tag)
                }
            }
        }
    }

    /// Reconstruct inner HTML
    pub fn inner_html(&self) -> String {
        self.children().map(Node::outer_html).collect()
    }

    fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.clone()
                } else {
                    format!("{}=\"{}\"", name, escape_html_attr(value))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_void_element(&self) -> bool {
        const VOID_ELEMENTS: &[&str] = &[
            "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen",
            "link", "meta", "param", "source", "track", "wbr",
        ];
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }
}

impl Drop for Node {
    // Drain descendants through a local stack so deep trees drop without recursion
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut child) = stack.pop() {
            stack.append(&mut child.children);
        }
    }
}

/// Escape HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert!(node.is_tag("div"));
        assert_eq!(node.tag, "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_first_attribute_occurrence_wins() {
        let node = Node::element_with_attrs("div", vec![("class", "first"), ("class", "second")]);
        assert_eq!(node.attr("class"), Some("first"));
        assert_eq!(node.attr("CLASS"), None);
        assert_eq!(node.attr("id"), None);
    }

    #[test]
    fn test_children_and_first_child() {
        let div = Node::element("div")
            .with_child(Node::text("Hello"))
            .with_child(Node::element("span"));

        assert_eq!(div.children().count(), 2);
        assert_eq!(div.first_child(), Some(&Node::text("Hello")));
        assert_eq!(Node::element("br").first_child(), None);
    }

    #[test]
    fn test_text_content_skips_comments() {
        let div = Node::element("div")
            .with_child(Node::text("Hello "))
            .with_child(Node::comment("sse"))
            .with_child(Node::element("span").with_child(Node::text("World")));

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_outer_html() {
        let div = Node::element_with_attrs("div", vec![("class", "lyrics")])
            .with_child(Node::comment("sse"))
            .with_child(
                Node::element("p")
                    .with_child(Node::text("a"))
                    .with_child(Node::element("br"))
                    .with_child(Node::text("b")),
            );

        assert_eq!(
            div.outer_html(),
            "<div class=\"lyrics\"><!--sse--><p>a<br>b</p></div>"
        );
    }

    #[test]
    fn test_document_outer_html() {
        let doc = Node::document()
            .with_child(Node::doctype("html"))
            .with_child(Node::element("html"));
        assert_eq!(doc.outer_html(), "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_deep_tree_drops_without_overflow() {
        let mut node = Node::text("leaf");
        for _ in 0..200_000 {
            node = Node::element("span").with_child(node);
        }
        drop(node);
    }

    #[test]
    fn test_attribute_escaping() {
        let a = Node::element_with_attrs("a", vec![("title", "say \"hi\""), ("hidden", "")]);
        assert_eq!(a.outer_html(), "<a title=\"say &quot;hi&quot;\" hidden></a>");
    }
}
