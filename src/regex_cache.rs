//! Thread-local cache of compiled patterns
//!
//! The JHTML decoder tests every `<i>` leaf against a fixed list of patterns.
//! Each pattern is compiled once per thread and borrowed from the cache for
//! every later match.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    static PATTERNS: RefCell<HashMap<&'static str, Regex>> = RefCell::new(HashMap::new());
}

/// Run `f` with the compiled form of `pattern`
///
/// Returns `None` when the pattern does not compile.
pub fn with_pattern<R>(pattern: &'static str, f: impl FnOnce(&Regex) -> R) -> Option<R> {
    PATTERNS.with(|cache| {
        if let Some(regex) = cache.borrow().get(pattern) {
            return Some(f(regex));
        }
        let regex = Regex::new(pattern).ok()?;
        let result = f(&regex);
        cache.borrow_mut().insert(pattern, regex);
        Some(result)
    })
}

/// Whether `text` matches `pattern`; an invalid pattern never matches
pub fn is_match(pattern: &'static str, text: &str) -> bool {
    with_pattern(pattern, |re| re.is_match(text)).unwrap_or(false)
}

/// Capture groups of the first match of `pattern` in `text`
///
/// Unmatched optional groups come back as empty strings.
pub fn captures(pattern: &'static str, text: &str) -> Option<Vec<String>> {
    with_pattern(pattern, |re| {
        re.captures(text).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|m| m.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        })
    })
    .flatten()
}

/// Drop every cached pattern on this thread
pub fn clear_cache() {
    PATTERNS.with(|cache| cache.borrow_mut().clear());
}

/// Number of patterns cached on this thread
pub fn cache_size() -> usize {
    PATTERNS.with(|cache| cache.borrow().len())
}
