//! Value classification
//!
//! [`classify`] tags a value with its [`Kind`] under a [`Mode`]. Kinds that
//! the mode does not admit come back as [`Classification::Rejected`]; what
//! happens next (error, degrade to null, ignore) is the type-error policy of
//! the active handlers.

use super::config::Mode;
use super::value::Value;
use std::fmt;

/// Semantic kind of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `true` / `false`
    Boolean,
    /// Finite number
    Number,
    /// `Infinity`, `-Infinity` or `NaN`
    NonFiniteNumber,
    /// Arbitrary-precision integer
    BigInt,
    /// Symbol
    Symbol,
    /// String
    String,
    /// Function source
    Function,
    /// Date
    Date,
    /// Regular expression
    RegExp,
    /// Ordered list
    Array,
    /// Key/value mapping
    Object,
    /// Dropped from output after the ignore hook runs
    Ignore,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 14] = [
        Kind::Null,
        Kind::Undefined,
        Kind::Boolean,
        Kind::Number,
        Kind::NonFiniteNumber,
        Kind::BigInt,
        Kind::Symbol,
        Kind::String,
        Kind::Function,
        Kind::Date,
        Kind::RegExp,
        Kind::Array,
        Kind::Object,
        Kind::Ignore,
    ];

    /// Raw kind of a value, before any mode check
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Undefined => Kind::Undefined,
            Value::Boolean(_) => Kind::Boolean,
            Value::Number(n) if n.is_finite() => Kind::Number,
            Value::Number(_) => Kind::NonFiniteNumber,
            Value::BigInt(_) => Kind::BigInt,
            Value::Symbol(_) => Kind::Symbol,
            Value::String(_) => Kind::String,
            Value::Function(_) => Kind::Function,
            Value::Date(_) => Kind::Date,
            Value::RegExp { .. } => Kind::RegExp,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Name used in messages and handler lookups (`nonfiniteNumber`, `bigint`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::NonFiniteNumber => "nonfiniteNumber",
            Kind::BigInt => "bigint",
            Kind::Symbol => "symbol",
            Kind::String => "string",
            Kind::Function => "function",
            Kind::Date => "date",
            Kind::RegExp => "regexp",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Ignore => "ignore",
        }
    }

    /// Whether strict (JSON) mode admits this kind
    pub fn is_json(self) -> bool {
        matches!(
            self,
            Kind::Null | Kind::Boolean | Kind::Number | Kind::String | Kind::Array | Kind::Object
        )
    }

    /// Whether the kind has children
    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Array | Kind::Object)
    }

    fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying a value under a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The mode admits the kind
    Admitted(Kind),
    /// The mode does not admit the kind; the type-error policy decides
    Rejected(Kind),
}

/// Classify a value under `mode`
///
/// Extended mode admits every kind. Strict mode admits only the JSON kinds;
/// a non-finite number is rejected here too and is degraded to null by the
/// default type-error policy rather than by the classifier.
pub fn classify(value: &Value, mode: Mode) -> Classification {
    let kind = Kind::of(value);
    if mode == Mode::Extended || kind.is_json() {
        Classification::Admitted(kind)
    } else {
        Classification::Rejected(kind)
    }
}

/// A set of kinds, used to filter what a [`TreeWalker`](super::TreeWalker) reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet(u16);

impl KindSet {
    /// No kinds
    pub const NONE: KindSet = KindSet(0);

    /// Every kind
    pub const ALL: KindSet = KindSet((1 << Kind::ALL.len()) - 1);

    /// Set holding exactly `kinds`
    pub fn of(kinds: &[Kind]) -> Self {
        kinds.iter().copied().collect()
    }

    /// Add a kind
    pub fn with(self, kind: Kind) -> Self {
        KindSet(self.0 | kind.bit())
    }

    /// Remove a kind
    pub fn without(self, kind: Kind) -> Self {
        KindSet(self.0 & !kind.bit())
    }

    /// Membership test
    pub fn contains(self, kind: Kind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Whether no kind is in the set
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for KindSet {
    fn default() -> Self {
        KindSet::ALL
    }
}

impl FromIterator<Kind> for KindSet {
    fn from_iter<I: IntoIterator<Item = Kind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::NONE, KindSet::with)
    }
}
