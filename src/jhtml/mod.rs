//! JHTML: JSON and JavaScript values as HTML
//!
//! JHTML renders a value with a small HTML vocabulary: `<dl>` for objects,
//! `<ol start="0">` for arrays, `<i>` for non-string scalars and bare text
//! (or a root `<span>`) for strings. The root element is tagged with
//! [`JHTML_NAMESPACE`] as its microdata `itemtype`, so values embedded in a
//! larger document can be found again.
//!
//! ```rust
//! use sajj::jhtml;
//! use sajj::{Value, WalkConfig};
//!
//! let config = WalkConfig::default();
//! let value = Value::array(vec![Value::string("arrayItem1")]);
//! let markup = jhtml::to_markup(&value, &config).unwrap();
//! assert_eq!(
//!     markup,
//!     r#"<ol start="0" itemscope="" itemtype="http://brett-zamir.me/ns/microdata/json-as-html/2"><li>arrayItem1</li></ol>"#
//! );
//!
//! let tree = jhtml::to_markup_tree(&value, &config).unwrap();
//! assert_eq!(jhtml::to_json_string(&tree, &config).unwrap().into_one().unwrap(), r#"["arrayItem1"]"#);
//! ```
//!
//! # Module Organization
//!
//! - [`encode`] - [`JhtmlStringifier`] handlers for the walk engine
//! - [`decode`] - [`Decoder`], structural validation back to values
//! - [`error`] - [`DecodeError`] and the cross-area [`Error`]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod decode;
pub mod encode;
pub mod error;
mod leaf;

// ============================================================================
// Re-exports
// ============================================================================

pub use decode::Decoder;
pub use encode::JhtmlStringifier;
pub use error::{DecodeError, DecodeResult, Error};

use crate::markup::{parse_element, Document, Element};
use crate::walk::{stringify, Value, WalkConfig, WalkResult};

/// Microdata `itemtype` identifying a JHTML root element
pub const JHTML_NAMESPACE: &str = "http://brett-zamir.me/ns/microdata/json-as-html/2";

/// One item or several, mirroring the shape of the input
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    /// A single item
    One(T),
    /// A sequence of items, in input order
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Apply `f` to every item, keeping the shape
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<OneOrMany<U>, E> {
        Ok(match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)?),
            OneOrMany::Many(items) => {
                OneOrMany::Many(items.into_iter().map(f).collect::<Result<_, _>>()?)
            }
        })
    }

    /// The single item, if this is `One`
    pub fn into_one(self) -> Option<T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(_) => None,
        }
    }

    /// Every item as a vector
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<'a> From<&'a Element> for OneOrMany<&'a Element> {
    fn from(element: &'a Element) -> Self {
        OneOrMany::One(element)
    }
}

impl<'a> From<Vec<&'a Element>> for OneOrMany<&'a Element> {
    fn from(elements: Vec<&'a Element>) -> Self {
        OneOrMany::Many(elements)
    }
}

impl<'a> From<&'a [Element]> for OneOrMany<&'a Element> {
    fn from(elements: &'a [Element]) -> Self {
        OneOrMany::Many(elements.iter().collect())
    }
}

/// Render a value as JHTML markup text
///
/// # Arguments
/// * `value` - The value to encode
/// * `config` - Walk options; distinguished key/value mode is always forced on
///
/// # Returns
/// The markup of the root element, carrying `itemscope` and `itemtype`
pub fn to_markup(value: &Value, config: &WalkConfig) -> WalkResult<String> {
    JhtmlStringifier::walker(config.clone())?.walk(value)
}

/// Render a value as a JHTML element tree
pub fn to_markup_tree(value: &Value, config: &WalkConfig) -> Result<Element, Error> {
    let markup = to_markup(value, config)?;
    Ok(parse_element(&markup)?)
}

/// Decode a JHTML element tree back into a value
pub fn from_markup_tree(element: &Element, config: &WalkConfig) -> DecodeResult<Value> {
    Decoder::new(config).decode(element)
}

/// Decode one root element or several, keeping the shape of the input
///
/// # Arguments
/// * `items` - A single element, or a list of elements
/// * `config` - Decode options; extended mode allows the JavaScript-only leaves
///
/// # Returns
/// [`OneOrMany::One`] for a single element, [`OneOrMany::Many`] otherwise.
/// The first element that fails to decode stops the batch.
pub fn decode_items<'a>(
    items: impl Into<OneOrMany<&'a Element>>,
    config: &WalkConfig,
) -> DecodeResult<OneOrMany<Value>> {
    let decoder = Decoder::new(config);
    items.into().try_map(|element| decoder.decode(element))
}

/// Decode every JHTML item of a document, in document order
pub fn from_document(document: &Document, config: &WalkConfig) -> DecodeResult<Vec<Value>> {
    let items = document.items(JHTML_NAMESPACE);
    log_debug!("found {} JHTML items", items.len());
    decode_items(items, config).map(OneOrMany::into_vec)
}

/// Decode JHTML and stringify the result as JSON text
///
/// A single element yields a single string; several yield one string each.
pub fn to_json_string<'a>(
    items: impl Into<OneOrMany<&'a Element>>,
    config: &WalkConfig,
) -> Result<OneOrMany<String>, Error> {
    decode_items(items, config)?.try_map(|value| stringify(&value, config).map_err(Error::from))
}

/// Parse JHTML markup text and decode its first element
pub fn from_markup(markup: &str, config: &WalkConfig) -> Result<Value, Error> {
    let element = parse_element(markup)?;
    Ok(from_markup_tree(&element, config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_document;

    #[test]
    fn test_round_trip_through_tree() {
        let config = WalkConfig::default();
        let value = Value::object(vec![
            ("a", Value::array(vec![Value::number(1.5), Value::string("x & y")])),
            ("b", Value::Null),
        ]);
        let tree = to_markup_tree(&value, &config).unwrap();
        assert_eq!(from_markup_tree(&tree, &config), Ok(value));
    }

    #[test]
    fn test_one_or_many_symmetry() {
        let config = WalkConfig::default();
        let first = to_markup_tree(&Value::number(1.0), &config).unwrap();
        let second = to_markup_tree(&Value::string("two"), &config).unwrap();

        let one = to_json_string(&first, &config).unwrap();
        assert_eq!(one, OneOrMany::One("1".to_string()));

        let many = to_json_string(vec![&first, &second], &config).unwrap();
        assert_eq!(
            many,
            OneOrMany::Many(vec!["1".to_string(), "\"two\"".to_string()])
        );
    }

    #[test]
    fn test_from_document() {
        let html = format!(
            r#"<p>intro</p><div><i itemscope="" itemtype="{ns}">true</i></div><span itemscope="" itemtype="{ns}">s</span><i>ignored</i>"#,
            ns = JHTML_NAMESPACE
        );
        let doc = parse_document(&html).unwrap();
        assert_eq!(
            from_document(&doc, &WalkConfig::default()),
            Ok(vec![Value::boolean(true), Value::string("s")])
        );
    }

    #[test]
    fn test_from_markup_reports_markup_errors() {
        assert!(matches!(
            from_markup("<dl", &WalkConfig::default()),
            Err(Error::Markup(_))
        ));
        assert!(matches!(
            from_markup("<p></p>", &WalkConfig::default()),
            Err(Error::Decode(DecodeError::UnknownElement { .. }))
        ));
    }
}
