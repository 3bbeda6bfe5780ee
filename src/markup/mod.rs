//! Markup tree
//!
//! A small HTML tree: enough to parse markup text into elements, walk their
//! children, read attributes and text, and serialize back.
//!
//! ```rust
//! use sajj::markup::parse_document;
//!
//! let doc = parse_document(r#"<p>intro</p><ol start="0" itemscope itemtype="urn:x"><li>a</li></ol>"#).unwrap();
//! let items = doc.items("urn:x");
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].text_content(), "a");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod escape;
pub mod node;
pub mod parser;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{MarkupError, MarkupResult};
pub use escape::{escape_html_text, unescape_html_text};
pub use node::{is_void_element, Descendants, Element, Node};

/// A parsed document: its top-level nodes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Top-level nodes in document order
    pub children: Vec<Node>,
}

impl Document {
    /// Parse markup text
    pub fn parse(input: &str) -> MarkupResult<Self> {
        Ok(Self {
            children: parser::parse_nodes(input)?,
        })
    }

    /// Every element in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .flat_map(Element::descendants)
    }

    /// First top-level element
    pub fn first_element(&self) -> Option<&Element> {
        self.children.iter().find_map(Node::as_element)
    }

    /// Elements whose `itemtype` is `namespace`, in document order
    pub fn items(&self, namespace: &str) -> Vec<&Element> {
        self.elements()
            .filter(|e| e.attribute("itemtype") == Some(namespace))
            .collect()
    }
}

/// Parse markup text into a [`Document`]
pub fn parse_document(input: &str) -> MarkupResult<Document> {
    Document::parse(input)
}

/// Parse markup text into its top-level nodes
///
/// # Arguments
/// * `input` - Markup text; a doctype is skipped and unclosed elements are
///   closed at the end of input
///
/// # Returns
/// The top-level text, comment and element nodes in source order
pub fn parse_fragment(input: &str) -> MarkupResult<Vec<Node>> {
    parser::parse_nodes(input)
}

/// Parse markup text and return its first top-level element
pub fn parse_element(input: &str) -> MarkupResult<Element> {
    parse_fragment(input)?
        .into_iter()
        .find_map(|node| match node {
            Node::Element(e) => Some(e),
            _ => None,
        })
        .ok_or(MarkupError::NoElement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_in_document_order() {
        let doc = parse_document(
            r#"<div><i itemtype="ns">1</i><section><span itemtype="ns">a</span></section></div><i itemtype="other">2</i>"#,
        )
        .unwrap();
        let names: Vec<&str> = doc.items("ns").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["i", "span"]);
    }

    #[test]
    fn test_parse_element() {
        assert_eq!(parse_element("  <b>x</b>").unwrap().name, "b");
        assert_eq!(parse_element("text only"), Err(MarkupError::NoElement));
    }
}
