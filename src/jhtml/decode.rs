//! JHTML decoder
//!
//! Recursive descent over an element tree, validating the vocabulary as it
//! goes. Text and CDATA holding only whitespace are ignored between the
//! children of `<dl>` and `<ol>`, as are comments.

use super::error::{DecodeError, DecodeResult};
use super::leaf::decode_leaf;
use crate::markup::{Element, Node};
use crate::walk::{Object, Value, WalkConfig};

/// Which child a `<dl>` expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Dt,
    Dd,
}

impl Expect {
    fn tag(self) -> &'static str {
        match self {
            Expect::Dt => "dt",
            Expect::Dd => "dd",
        }
    }
}

/// Turns JHTML elements back into values
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    allow_extended: bool,
    max_depth: usize,
}

impl Decoder {
    /// Decoder honoring the mode and depth limit of `config`
    pub fn new(config: &WalkConfig) -> Self {
        Self {
            allow_extended: config.is_extended(),
            max_depth: config.max_depth,
        }
    }

    /// Decode a root element; a root `<span>` is a string
    pub fn decode(&self, element: &Element) -> DecodeResult<Value> {
        self.item(element, false, 0)
    }

    fn item(&self, element: &Element, below_root: bool, depth: usize) -> DecodeResult<Value> {
        if depth > self.max_depth {
            return Err(DecodeError::RecursionLimitExceeded {
                depth,
                max_depth: self.max_depth,
            });
        }
        log_trace!("decode <{}> at depth {}", element.name, depth);
        match element.name.as_str() {
            "span" if below_root => Err(DecodeError::SpanNotAllowed),
            "span" => Ok(Value::String(element.text_content())),
            "i" => decode_leaf(&element.text_content(), self.allow_extended),
            "dl" => self.definition_list(element, depth),
            "ol" => self.ordered_list(element, depth),
            name => Err(DecodeError::UnknownElement {
                name: name.to_string(),
            }),
        }
    }

    fn definition_list(&self, dl: &Element, depth: usize) -> DecodeResult<Value> {
        let mut object = Object::new();
        let mut expect = Expect::Dt;
        let mut key = String::new();

        for node in &dl.children {
            let Some(child) = significant_element(node, "dl")? else {
                continue;
            };
            match (expect, child.name.as_str()) {
                (Expect::Dt, "dt") => {
                    if child.child_element_count() > 0 {
                        return Err(DecodeError::DtHasChildren);
                    }
                    key = child.text_content();
                    expect = Expect::Dd;
                }
                (Expect::Dd, "dd") => {
                    let value = self.entry(child, depth, DecodeError::DdHasMultipleChildren)?;
                    object.insert(std::mem::take(&mut key), value);
                    expect = Expect::Dt;
                }
                (expect, found) => {
                    return Err(DecodeError::UnexpectedElement {
                        found: found.to_string(),
                        expected: expect.tag(),
                    })
                }
            }
        }

        if expect == Expect::Dd {
            return Err(DecodeError::MissingFinalDd);
        }
        Ok(Value::Object(object))
    }

    fn ordered_list(&self, ol: &Element, depth: usize) -> DecodeResult<Value> {
        if ol.attribute("start") != Some("0") {
            return Err(DecodeError::MissingOlStart);
        }

        let mut items = Vec::new();
        for node in &ol.children {
            let Some(child) = significant_element(node, "ol")? else {
                continue;
            };
            if child.name != "li" {
                return Err(DecodeError::UnexpectedOlChild {
                    found: child.name.clone(),
                });
            }
            items.push(self.entry(child, depth, DecodeError::LiHasMultipleChildren)?);
        }
        Ok(Value::array(items))
    }

    /// Value held by a `<dd>` or `<li>`: its text, or its single element child
    fn entry(
        &self,
        container: &Element,
        depth: usize,
        too_many: DecodeError,
    ) -> DecodeResult<Value> {
        let mut children = container.element_children();
        match (children.next(), children.next()) {
            (_, Some(_)) => Err(too_many),
            (None, None) => Ok(Value::String(container.text_content())),
            (Some(child), None) => self.item(child, true, depth + 1),
        }
    }
}

/// The element in `node`, if any; rejects meaningful text inside `tag`
fn significant_element<'a>(node: &'a Node, tag: &'static str) -> DecodeResult<Option<&'a Element>> {
    if node.has_significant_text() {
        return Err(DecodeError::TextNotAllowed { tag });
    }
    Ok(node.as_element())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_element;

    fn decode(markup: &str) -> DecodeResult<Value> {
        Decoder::new(&WalkConfig::default()).decode(&parse_element(markup).unwrap())
    }

    #[test]
    fn test_object() {
        let value = decode("<dl><dt>a</dt><dd><i>1</i></dd><dt>b</dt><dd>text</dd></dl>").unwrap();
        assert_eq!(
            value,
            Value::object(vec![("a", Value::number(1.0)), ("b", Value::string("text"))])
        );
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let value = decode("<dl><dt>a</dt><dd>1</dd><dt>b</dt><dd>2</dd><dt>a</dt><dd>3</dd></dl>")
            .unwrap();
        assert_eq!(
            value,
            Value::object(vec![("a", Value::string("3")), ("b", Value::string("2"))])
        );
    }

    #[test]
    fn test_whitespace_and_comments_ignored() {
        let markup = "<ol start=\"0\">\n  <!-- note -->\n  <li><i>true</i></li>\n</ol>";
        let value = decode(markup).unwrap();
        assert_eq!(value, Value::array(vec![Value::boolean(true)]));
    }

    #[test]
    fn test_text_in_list() {
        assert_eq!(
            decode("<dl>oops<dt>a</dt><dd>b</dd></dl>"),
            Err(DecodeError::TextNotAllowed { tag: "dl" })
        );
        assert_eq!(
            decode("<ol start=\"0\"><![CDATA[x]]></ol>"),
            Err(DecodeError::TextNotAllowed { tag: "ol" })
        );
    }

    #[test]
    fn test_ol_start_checked_first() {
        assert_eq!(decode("<ol><p></p></ol>"), Err(DecodeError::MissingOlStart));
        assert_eq!(decode("<ol start=\"1\"></ol>"), Err(DecodeError::MissingOlStart));
    }

    #[test]
    fn test_span_below_root() {
        assert_eq!(decode("<span>x</span>"), Ok(Value::string("x")));
        assert_eq!(
            decode("<ol start=\"0\"><li><span>x</span></li></ol>"),
            Err(DecodeError::SpanNotAllowed)
        );
    }

    #[test]
    fn test_depth_limit() {
        let config = WalkConfig::default().with_max_depth(2);
        let decoder = Decoder::new(&config);
        let ok = r#"<ol start="0"><li><ol start="0"><li>a</li></ol></li></ol>"#;
        let ok = parse_element(ok).unwrap();
        assert!(decoder.decode(&ok).is_ok());
        let deep = parse_element(
            r#"<ol start="0"><li><ol start="0"><li><ol start="0"><li><i>1</i></li></ol></li></ol></li></ol>"#,
        )
        .unwrap();
        assert_eq!(
            decoder.decode(&deep),
            Err(DecodeError::RecursionLimitExceeded {
                depth: 3,
                max_depth: 2
            })
        );
    }
}
