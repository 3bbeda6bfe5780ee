//! JHTML errors

use crate::markup::MarkupError;
use crate::walk::WalkError;
use std::fmt;

/// Result of a decode operation
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Structural violations found while decoding JHTML
///
/// Decoding stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `<dl>` child out of the `dt`/`dd` alternation
    UnexpectedElement {
        /// Tag found
        found: String,
        /// Tag the alternation expected (`dt` or `dd`)
        expected: &'static str,
    },

    /// A `<dt>` with element children
    DtHasChildren,

    /// A `<dd>` with more than one element child
    DdHasMultipleChildren,

    /// A `<dl>` ending after a `<dt>`
    MissingFinalDd,

    /// An `<ol>` without `start="0"`
    MissingOlStart,

    /// An `<ol>` child other than `<li>`
    UnexpectedOlChild {
        /// Tag found
        found: String,
    },

    /// An `<li>` with more than one element child
    LiHasMultipleChildren,

    /// A `<span>` below the root
    SpanNotAllowed,

    /// `<i>` text matching no known value form
    UnrecognizedType {
        /// The text
        text: String,
    },

    /// `<i>` text naming a JavaScript-only value while decoding JSON
    ExtendedValueInStrictMode {
        /// The value as text
        value: String,
    },

    /// Non-whitespace text or CDATA directly inside a `<dl>` or `<ol>`
    TextNotAllowed {
        /// Enclosing tag
        tag: &'static str,
    },

    /// A tag with no JHTML meaning
    UnknownElement {
        /// Tag found
        name: String,
    },

    /// Nesting deeper than the configured maximum
    RecursionLimitExceeded {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max_depth: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedElement { found, expected } => write!(
                f,
                "Unexpected element {} encountered where {} expected",
                found, expected
            ),
            DecodeError::DtHasChildren => write!(f, "<dt> should not have any children"),
            DecodeError::DdHasMultipleChildren => write!(
                f,
                "<dd> should not have more than one element child (<ol>, <dl>, or <i>)"
            ),
            DecodeError::MissingFinalDd => write!(
                f,
                "Ended a definition list without a final <dd> to match the previous <dt>."
            ),
            DecodeError::MissingOlStart => write!(
                f,
                "For the sake of readability, <ol> must include a start=\"0\" attribute within JHTML."
            ),
            DecodeError::UnexpectedOlChild { found } => {
                write!(f, "Unexpected child of <ol> element: {}", found)
            }
            DecodeError::LiHasMultipleChildren => write!(
                f,
                "<li> should not have more than a single element child (<ol>, <dl>, or <i>)"
            ),
            DecodeError::SpanNotAllowed => {
                write!(f, "A <span> element is not allowed in this context")
            }
            DecodeError::UnrecognizedType { .. } => write!(f, "Unrecognized type"),
            DecodeError::ExtendedValueInStrictMode { value } => write!(
                f,
                "The value type ({}) cannot be used in JSON mode",
                value
            ),
            DecodeError::TextNotAllowed { tag } => write!(
                f,
                "Non-whitespace text or CDATA nodes are not allowed directly within <{}>",
                tag
            ),
            DecodeError::UnknownElement { name } => write!(f, "Unexpected element {}", name),
            DecodeError::RecursionLimitExceeded { depth, max_depth } => write!(
                f,
                "Recursion limit exceeded: depth {} exceeds maximum {}",
                depth, max_depth
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Any failure of a JHTML operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Walking the value failed
    Walk(WalkError),
    /// Decoding the markup failed
    Decode(DecodeError),
    /// Parsing the markup text failed
    Markup(MarkupError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Walk(e) => write!(f, "{}", e),
            Error::Decode(e) => write!(f, "{}", e),
            Error::Markup(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Walk(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Markup(e) => Some(e),
        }
    }
}

impl From<WalkError> for Error {
    fn from(e: WalkError) -> Self {
        Error::Walk(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<MarkupError> for Error {
    fn from(e: MarkupError) -> Self {
        Error::Markup(e)
    }
}
