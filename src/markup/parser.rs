//! Tolerant HTML fragment parser
//!
//! Builds a [`Node`] tree from markup text the way an HTML parser shapes the
//! common cases: lowercase names, void elements, implied end tags for
//! `dt`/`dd`/`li`, and end tags that close the elements left open inside
//! them. Stray end tags are dropped. Only truncated constructs (tags,
//! comments, CDATA, quoted attribute values) are errors.

use super::error::{MarkupError, MarkupResult};
use super::escape::unescape_html_text;
use super::node::{is_void_element, Element, Node};
use memchr::{memchr, memmem};

/// Elements that bound the search for an implied or explicit end tag
const SCOPE_BOUNDARIES: [&str; 6] = ["html", "body", "table", "td", "th", "template"];

/// Elements an implied `dt`/`dd`/`li` end does not reach past
const LIST_BOUNDARIES: [&str; 12] = [
    "dl", "ol", "ul", "li", "dd", "dt", "div", "table", "td", "th", "body", "html",
];

/// Parse markup text into top-level nodes
pub fn parse_nodes(input: &str) -> MarkupResult<Vec<Node>> {
    let nodes = Parser::new(input).run()?;
    log_debug!("parsed {} bytes into {} top-level nodes", input.len(), nodes.len());
    Ok(nodes)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    open: Vec<Element>,
    roots: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            open: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn run(mut self) -> MarkupResult<Vec<Node>> {
        while self.pos < self.bytes.len() {
            match memchr(b'<', &self.bytes[self.pos..]) {
                None => {
                    let text = self.rest();
                    self.append_text(text);
                    self.pos = self.bytes.len();
                }
                Some(offset) => {
                    if offset > 0 {
                        let text = self.slice(self.pos, self.pos + offset);
                        self.append_text(text);
                    }
                    self.pos += offset;
                    self.markup()?;
                }
            }
        }
        self.pop_to(0);
        Ok(self.roots)
    }

    fn rest(&self) -> &'a str {
        self.slice(self.pos, self.bytes.len())
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.input[from..to]
    }

    /// Handle the construct starting at the `<` under `pos`
    fn markup(&mut self) -> MarkupResult<()> {
        let start = self.pos;
        let rest = self.rest();
        if rest.starts_with("<!--") {
            let body = start + 4;
            let end = memmem::find(&self.bytes[body..], b"-->")
                .ok_or(MarkupError::UnterminatedComment { offset: start })?;
            let content = self.input[body..body + end].to_string();
            self.append(Node::Comment(content));
            self.pos = body + end + 3;
        } else if rest.starts_with("<![CDATA[") {
            let body = start + 9;
            let end = memmem::find(&self.bytes[body..], b"]]>")
                .ok_or(MarkupError::UnterminatedCData { offset: start })?;
            let content = self.input[body..body + end].to_string();
            self.append(Node::CData(content));
            self.pos = body + end + 3;
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            // doctype or processing instruction
            self.pos = self.find_close(start)? + 1;
        } else if rest.starts_with("</") {
            let name_start = start + 2;
            let name = self.read_name(name_start);
            self.pos = self.find_close(start)? + 1;
            if !name.is_empty() {
                self.close(&name);
            }
        } else if self
            .bytes
            .get(start + 1)
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            self.start_tag()?;
        } else {
            self.append_text("<");
            self.pos += 1;
        }
        Ok(())
    }

    fn find_close(&self, start: usize) -> MarkupResult<usize> {
        memchr(b'>', &self.bytes[self.pos..])
            .map(|i| self.pos + i)
            .ok_or(MarkupError::UnterminatedTag { offset: start })
    }

    /// Read a lowercase tag or attribute name starting at `from`
    fn read_name(&self, from: usize) -> String {
        let end = self.bytes[from..]
            .iter()
            .position(|b| b.is_ascii_whitespace() || matches!(b, b'/' | b'>' | b'='))
            .map_or(self.bytes.len(), |i| from + i);
        self.input[from..end].to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn start_tag(&mut self) -> MarkupResult<()> {
        let start = self.pos;
        let name = self.read_name(start + 1);
        self.pos = start + 1 + name.len();
        let mut element = Element::new(name);

        loop {
            self.skip_whitespace();
            match self.bytes.get(self.pos) {
                None => return Err(MarkupError::UnterminatedTag { offset: start }),
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    // a self-closing slash is ignored, as in HTML
                    self.pos += 1;
                }
                Some(_) => {
                    let (attr, value) = self.attribute()?;
                    if element.attribute(&attr).is_none() {
                        element.attributes.push((attr, value));
                    }
                }
            }
        }

        self.open_element(element);
        Ok(())
    }

    fn attribute(&mut self) -> MarkupResult<(String, String)> {
        let name_start = self.pos;
        let mut name = self.read_name(name_start);
        if name.is_empty() {
            // a leading `=` belongs to the name
            name = "=".to_string();
            self.pos += 1;
        } else {
            self.pos += name.len();
        }
        self.skip_whitespace();
        if self.bytes.get(self.pos) != Some(&b'=') {
            return Ok((name, String::new()));
        }
        self.pos += 1;
        self.skip_whitespace();

        let raw = match self.bytes.get(self.pos) {
            Some(&(quote @ (b'"' | b'\''))) => {
                let open = self.pos;
                let len = memchr(quote, &self.bytes[open + 1..])
                    .ok_or(MarkupError::UnterminatedAttribute { offset: open })?;
                self.pos = open + 1 + len + 1;
                self.slice(open + 1, open + 1 + len)
            }
            _ => {
                let from = self.pos;
                let end = self.bytes[from..]
                    .iter()
                    .position(|b| b.is_ascii_whitespace() || *b == b'>')
                    .map_or(self.bytes.len(), |i| from + i);
                self.pos = end;
                self.slice(from, end)
            }
        };
        Ok((name, unescape_html_text(raw)))
    }

    fn open_element(&mut self, element: Element) {
        match element.name.as_str() {
            "dt" | "dd" => self.close_implied(&["dt", "dd"]),
            "li" => self.close_implied(&["li"]),
            _ => {}
        }
        if is_void_element(&element.name) {
            self.append(Node::Element(element));
        } else {
            self.open.push(element);
        }
    }

    /// Close an open element named in `targets`, unless a list boundary comes first
    fn close_implied(&mut self, targets: &[&str]) {
        for index in (0..self.open.len()).rev() {
            let name = self.open[index].name.as_str();
            if targets.contains(&name) {
                self.pop_to(index);
                return;
            }
            if LIST_BOUNDARIES.contains(&name) {
                return;
            }
        }
    }

    /// Handle an end tag: close the matching element and everything inside it
    fn close(&mut self, name: &str) {
        for index in (0..self.open.len()).rev() {
            let open = self.open[index].name.as_str();
            if open == name {
                self.pop_to(index);
                return;
            }
            if SCOPE_BOUNDARIES.contains(&open) {
                break;
            }
        }
        log_trace!("dropping stray end tag </{}>", name);
    }

    /// Pop open elements until `depth` remain, attaching each to its parent
    fn pop_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            if let Some(element) = self.open.pop() {
                self.append(Node::Element(element));
            }
        }
    }

    fn append(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn append_text(&mut self, raw: &str) {
        let text = unescape_html_text(raw);
        let siblings = match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        };
        match siblings.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(&text),
            _ => siblings.push(Node::Text(text)),
        }
    }
}
