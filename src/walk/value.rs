//! The value tree walked by the engine
//!
//! [`Value`] covers the JSON value space plus the JavaScript-only kinds
//! (undefined, functions, big integers, symbols, dates and regular
//! expressions). Objects keep their entries in insertion order and may carry
//! a prototype object whose entries are reported as inherited keys.
//!
//! # Example
//!
//! ```rust
//! use sajj::Value;
//!
//! let value = Value::object(vec![
//!     ("id", Value::number(7.0)),
//!     ("tags", Value::array(vec![Value::string("a")])),
//! ]);
//!
//! assert_eq!(value.get("id").and_then(Value::as_f64), Some(7.0));
//! assert_eq!(value.as_object().map(|o| o.len()), Some(2));
//! ```

use super::context::Key;
use super::error::WalkError;
use hashbrown::HashSet;
use std::borrow::Cow;
use std::fmt;

/// A value in the walked tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`
    #[default]
    Null,
    /// JavaScript `undefined`
    Undefined,
    /// Boolean value
    Boolean(bool),
    /// IEEE-754 double; non-finite values classify as `nonfiniteNumber`
    Number(f64),
    /// Arbitrary-precision integer
    BigInt(BigInt),
    /// Symbol with its description
    Symbol(String),
    /// String value
    String(String),
    /// Function, kept as its source text
    Function(String),
    /// Date, kept as its textual form (e.g. `Mon Jan 01 2024 ...`)
    Date(String),
    /// Regular expression literal
    RegExp {
        /// Pattern between the slashes
        source: String,
        /// Flag letters after the closing slash
        flags: String,
    },
    /// Ordered list
    Array(Array),
    /// Insertion-ordered mapping
    Object(Object),
}

impl Value {
    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a boolean value
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a function value from its source text
    pub fn function(source: impl Into<String>) -> Self {
        Value::Function(source.into())
    }

    /// Create a symbol value
    pub fn symbol(description: impl Into<String>) -> Self {
        Value::Symbol(description.into())
    }

    /// Create a big integer value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Create a date value
    ///
    /// The text is the date's display form and must start with a weekday
    /// abbreviation and a space (`"Mon Jan 01 2024"`) for JHTML markup to
    /// decode it back as a date. Other text encodes, but decodes as an
    /// unrecognized leaf.
    pub fn date(text: impl Into<String>) -> Self {
        Value::Date(text.into())
    }

    /// Create a regular expression value
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Array::from(items))
    }

    /// Create an object value; later duplicates of a key replace earlier ones
    pub fn object(pairs: Vec<(impl Into<String>, Value)>) -> Self {
        Value::Object(pairs.into_iter().collect())
    }

    /// Check if this is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as object
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Look up an own key of an object value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Look up an element of an array value
    pub fn index(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(index))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Integers up to 2^53 in magnitude
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral numbers map to integer JSON numbers so `1` stays `1`
fn json_number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::Number(serde_json::Number::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = WalkError;

    /// Convert the own JSON content of a value. Non-finite numbers become
    /// `null`; the JavaScript-only kinds are rejected.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => json_number(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(a) => serde_json::Value::Array(
                a.iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(o) => {
                let mut map = serde_json::Map::new();
                for (k, v) in o.iter() {
                    map.insert(k.to_string(), serde_json::Value::try_from(v)?);
                }
                serde_json::Value::Object(map)
            }
            other => {
                return Err(WalkError::KindRejected {
                    kind: super::kind::Kind::of(other),
                })
            }
        })
    }
}

/// Arbitrary-precision integer, stored as canonical decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt(String);

impl BigInt {
    /// Parse decimal digits with an optional leading `-`
    ///
    /// Leading zeros are dropped and `-0` normalizes to `0`. Returns `None`
    /// for anything that is not an integer literal.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Some(BigInt("0".to_string()));
        }
        let mut canonical = String::with_capacity(trimmed.len() + 1);
        if negative {
            canonical.push('-');
        }
        canonical.push_str(trimmed);
        Some(BigInt(canonical))
    }

    /// Decimal digits, with a leading `-` when negative
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the integer is below zero
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! bigint_from {
    ($($t:ty),*) => {
        $(impl From<$t> for BigInt {
            fn from(n: $t) -> Self {
                BigInt(n.to_string())
            }
        })*
    };
}

bigint_from!(i32, i64, i128, u32, u64, u128);

/// Insertion-ordered object with an optional prototype
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
    prototype: Option<Box<Object>>,
}

impl Object {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prototype whose entries are enumerated as inherited keys
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(Box::new(prototype));
        self
    }

    /// Insert or replace an own entry, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up an own entry
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether an own entry exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of own entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no own entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Own keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Own entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The prototype, if any
    pub fn prototype(&self) -> Option<&Object> {
        self.prototype.as_deref()
    }

    /// Entries in enumeration order
    ///
    /// With `own_only` this is the own entries. Otherwise the own entries are
    /// followed by each prototype level's entries, skipping keys already seen.
    pub fn enumerate(&self, own_only: bool) -> Vec<(&str, &Value)> {
        let mut out: Vec<(&str, &Value)> = self.iter().collect();
        if own_only {
            return out;
        }
        let mut seen: HashSet<&str> = out.iter().map(|(k, _)| *k).collect();
        let mut level = self.prototype();
        while let Some(proto) = level {
            for (k, v) in proto.iter() {
                if seen.insert(k) {
                    out.push((k, v));
                }
            }
            level = proto.prototype();
        }
        out
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

/// Ordered list with an optional prototype
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    items: Vec<Value>,
    prototype: Option<Box<Object>>,
}

impl Array {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prototype whose entries are enumerated as inherited keys
    pub fn with_prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(Box::new(prototype));
        self
    }

    /// Append an element
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// The prototype, if any
    pub fn prototype(&self) -> Option<&Object> {
        self.prototype.as_deref()
    }

    /// Children in enumeration order
    ///
    /// With `own_only` elements are reported by numeric index. Otherwise every
    /// key is reported by name: the indices as strings, then unshadowed
    /// prototype keys. The latter mirrors property enumeration and is not a
    /// numeric walk.
    pub fn enumerate(&self, own_only: bool) -> Vec<(Key<'_>, &Value)> {
        if own_only {
            return self
                .items
                .iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v))
                .collect();
        }
        let mut out: Vec<(Key<'_>, &Value)> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, v)| (Key::Name(Cow::Owned(i.to_string())), v))
            .collect();
        let mut seen: HashSet<String> = (0..self.items.len()).map(|i| i.to_string()).collect();
        let mut level = self.prototype();
        while let Some(proto) = level {
            for (k, v) in proto.iter() {
                if seen.insert(k.to_string()) {
                    out.push((Key::Name(Cow::Borrowed(k)), v));
                }
            }
            level = proto.prototype();
        }
        out
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Array {
            items,
            prototype: None,
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}
