//! Markup parse errors

use std::fmt;

/// Result of a markup operation
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors raised while parsing markup text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A tag was opened but never closed with `>`
    UnterminatedTag {
        /// Byte offset of the `<`
        offset: usize,
    },

    /// A comment was opened but never closed with `-->`
    UnterminatedComment {
        /// Byte offset of the `<!--`
        offset: usize,
    },

    /// A CDATA section was opened but never closed with `]]>`
    UnterminatedCData {
        /// Byte offset of the `<![CDATA[`
        offset: usize,
    },

    /// An attribute value was opened with a quote that never closes
    UnterminatedAttribute {
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// The markup holds no element
    NoElement,
}

impl MarkupError {
    /// Byte offset of the problem, when it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            MarkupError::UnterminatedTag { offset }
            | MarkupError::UnterminatedComment { offset }
            | MarkupError::UnterminatedCData { offset }
            | MarkupError::UnterminatedAttribute { offset } => Some(*offset),
            MarkupError::NoElement => None,
        }
    }

    /// Line and column (both 1-based) of the problem within `input`
    pub fn line_column(&self, input: &str) -> Option<(usize, usize)> {
        let offset = self.offset()?.min(input.len());
        let before = input.get(..offset)?;
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(nl) => before[nl + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        Some((line, column))
    }

    /// Format the error with its line and column within `input`
    pub fn format_with_position(&self, input: &str) -> String {
        match self.line_column(input) {
            Some((line, column)) => format!("{} at line {}, column {}", self, line, column),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::UnterminatedTag { offset } => {
                write!(f, "Unterminated tag starting at offset {}", offset)
            }
            MarkupError::UnterminatedComment { offset } => {
                write!(f, "Unterminated comment starting at offset {}", offset)
            }
            MarkupError::UnterminatedCData { offset } => {
                write!(f, "Unterminated CDATA section starting at offset {}", offset)
            }
            MarkupError::UnterminatedAttribute { offset } => {
                write!(f, "Unterminated attribute value starting at offset {}", offset)
            }
            MarkupError::NoElement => write!(f, "Markup contains no element"),
        }
    }
}

impl std::error::Error for MarkupError {}
