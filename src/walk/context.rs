//! Traversal context passed to every handler

use super::value::{Array, Object};
use std::borrow::Cow;
use std::fmt;

/// The composite enclosing the current value
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    /// Reached through an object entry
    Object(&'a Object),
    /// Reached through an array element
    Array(&'a Array),
}

/// Key under which the current value was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key<'a> {
    /// Array index (own-only enumeration)
    Index(usize),
    /// Property name (object keys, and array keys under inherited enumeration)
    Name(Cow<'a, str>),
}

impl Key<'_> {
    /// The key as a property name
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Key::Index(i) => Cow::Owned(i.to_string()),
            Key::Name(name) => Cow::Borrowed(name.as_ref()),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Where a value sits in the tree
///
/// A root value has no parent; any other value has a parent composite and the
/// key it was reached under. Children get a fresh context; contexts are never
/// shared between siblings.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    link: Option<(Parent<'a>, Key<'a>)>,
    depth: usize,
}

impl<'a> Context<'a> {
    /// Context of a root value
    pub fn root() -> Self {
        Self {
            link: None,
            depth: 0,
        }
    }

    /// Context of a child reached from this context's value
    pub fn child<'b>(&self, parent: Parent<'b>, key: Key<'b>) -> Context<'b> {
        Context {
            link: Some((parent, key)),
            depth: self.depth + 1,
        }
    }

    /// Whether this is the root of the walk
    pub fn is_root(&self) -> bool {
        self.link.is_none()
    }

    /// Enclosing composite
    pub fn parent(&self) -> Option<Parent<'a>> {
        self.link.as_ref().map(|(p, _)| *p)
    }

    /// Key under which this value was reached
    pub fn key(&self) -> Option<&Key<'a>> {
        self.link.as_ref().map(|(_, k)| k)
    }

    /// Whether the enclosing composite is an array
    pub fn parent_is_array(&self) -> bool {
        matches!(self.parent(), Some(Parent::Array(_)))
    }

    /// Nesting depth; the root is at 0
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::root()
    }
}
