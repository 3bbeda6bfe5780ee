//! HTML text escaping
//!
//! [`escape_html_text`] is the minimal escaping JHTML writes: `&` first, then
//! `<`. [`unescape_html_text`] decodes character references and inverts it.

use memchr::{memchr, memchr2, memchr3};

/// Escape `&` and `<` in text content
pub fn escape_html_text(text: &str) -> String {
    escape_with(
        text,
        |b| memchr2(b'&', b'<', b),
        |c| match c {
            '&' => Some("&amp;"),
            '<' => Some("&lt;"),
            _ => None,
        },
    )
}

/// Escape text for HTML serialization: `&`, `<`, `>` and no-break space
pub(crate) fn escape_serialized_text(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
        out
    })
}

/// Escape a double-quoted attribute value: `&`, `"` and no-break space
pub(crate) fn escape_attribute(value: &str) -> String {
    value.chars().fold(String::with_capacity(value.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
        out
    })
}

fn escape_with(
    text: &str,
    find: impl Fn(&[u8]) -> Option<usize>,
    replacement: impl Fn(char) -> Option<&'static str>,
) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = find(&bytes[pos..]) {
        let at = pos + offset;
        out.push_str(&text[pos..at]);
        // the matched bytes are ASCII, so `at` is a char boundary
        let c = bytes[at] as char;
        match replacement(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
        pos = at + 1;
    }
    out.push_str(&text[pos..]);
    out
}

/// Decode character references (`&amp;`, `&#60;`, `&#x3C;`, ...)
///
/// Unknown or malformed references are kept as written.
pub fn unescape_html_text(text: &str) -> String {
    let bytes = text.as_bytes();
    if memchr(b'&', bytes).is_none() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = memchr(b'&', &bytes[pos..]) {
        let at = pos + offset;
        out.push_str(&text[pos..at]);
        match decode_reference(&text[at..]) {
            Some((c, len)) => {
                out.push(c);
                pos = at + len;
            }
            None => {
                out.push('&');
                pos = at + 1;
            }
        }
    }
    out.push_str(&text[pos..]);
    out
}

/// Decode one reference at the start of `s` (which begins with `&`)
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let bytes = s.as_bytes();
    // skip the leading `&` so a following reference ends the search
    let end = memchr3(b';', b'&', b'<', bytes.get(1..)?)
        .map(|i| i + 1)
        .filter(|&i| bytes[i] == b';')?;
    let body = &s[1..end];
    let c = if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        named_reference(body)?
    };
    Some((c, end + 1))
}

fn named_reference(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        _ => return None,
    })
}
