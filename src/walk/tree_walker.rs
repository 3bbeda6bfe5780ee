//! Pull-based tree walking
//!
//! [`TreeWalker`] yields every node of a value tree in pre-order (document
//! order) as a [`Visit`], driven by an explicit stack instead of recursion.
//! It honors the same configuration as [`Walker`](super::Walker): mode,
//! own-only enumeration, the iteration switches and the depth limit. Kinds a
//! strict walk rejects end the sequence with an error, except non-finite
//! numbers, which are reported as `Null`.
//!
//! ```rust
//! use sajj::{Kind, KindSet, TreeWalker, Value, WalkConfig};
//!
//! let value = Value::object(vec![
//!     ("a", Value::string("x")),
//!     ("b", Value::array(vec![Value::string("y")])),
//! ]);
//!
//! let strings: Vec<&str> = TreeWalker::new(&value, WalkConfig::default())
//!     .with_filter(KindSet::of(&[Kind::String]))
//!     .map(|visit| visit.unwrap().value.as_str().unwrap())
//!     .collect();
//! assert_eq!(strings, vec!["x", "y"]);
//! ```

use super::config::WalkConfig;
use super::context::{Context, Key, Parent};
use super::error::{WalkError, WalkResult};
use super::kind::{classify, Classification, Kind, KindSet};
use super::value::Value;
use std::borrow::Cow;

/// One node reported by a [`TreeWalker`]
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// Kind the node is handled as
    pub kind: Kind,
    /// The node
    pub value: &'a Value,
    /// Position of the node
    pub context: Context<'a>,
}

impl Visit<'_> {
    /// Nesting depth of the node
    pub fn depth(&self) -> usize {
        self.context.depth()
    }
}

/// Restartable pre-order iterator over a value tree
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    root: &'a Value,
    config: WalkConfig,
    filter: KindSet,
    stack: Vec<(&'a Value, Context<'a>)>,
}

impl<'a> TreeWalker<'a> {
    /// Walk `root` under `config`, reporting every kind
    pub fn new(root: &'a Value, config: WalkConfig) -> Self {
        Self {
            root,
            config,
            filter: KindSet::ALL,
            stack: vec![(root, Context::root())],
        }
    }

    /// Report only nodes whose kind is in `filter`; others are still descended
    pub fn with_filter(mut self, filter: KindSet) -> Self {
        self.filter = filter;
        self
    }

    /// Start over from the root
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push((self.root, Context::root()));
    }

    fn resolve(&self, value: &Value) -> WalkResult<Kind> {
        match classify(value, self.config.mode) {
            Classification::Admitted(kind) => Ok(kind),
            Classification::Rejected(Kind::NonFiniteNumber) => Ok(Kind::Null),
            Classification::Rejected(kind) => Err(WalkError::KindRejected { kind }),
        }
    }

    fn push_children(&mut self, value: &'a Value, ctx: &Context<'a>) {
        let own_only = self.config.iterate_own_only;
        let start = self.stack.len();
        match value {
            Value::Object(object) if self.config.iterate_objects => {
                for (key, child) in object.enumerate(own_only) {
                    let key = Key::Name(Cow::Borrowed(key));
                    let child_ctx = ctx.child(Parent::Object(object), key);
                    self.stack.push((child, child_ctx));
                }
            }
            Value::Array(array) if self.config.iterate_arrays => {
                for (key, child) in array.enumerate(own_only) {
                    let child_ctx = ctx.child(Parent::Array(array), key);
                    self.stack.push((child, child_ctx));
                }
            }
            _ => {}
        }
        self.stack[start..].reverse();
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = WalkResult<Visit<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((value, context)) = self.stack.pop() {
            if context.depth() > self.config.max_depth {
                self.stack.clear();
                return Some(Err(WalkError::RecursionLimitExceeded {
                    depth: context.depth(),
                    max_depth: self.config.max_depth,
                }));
            }
            let kind = match self.resolve(value) {
                Ok(kind) => kind,
                Err(e) => {
                    self.stack.clear();
                    return Some(Err(e));
                }
            };
            if kind.is_composite() {
                self.push_children(value, &context);
            }
            if self.filter.contains(kind) {
                return Some(Ok(Visit {
                    kind,
                    value,
                    context,
                }));
            }
        }
        None
    }
}
