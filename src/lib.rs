//! SAJJ - Simple API for JSON/JavaScript values
//!
//! A generic value-tree visitor engine plus two renderers built on it:
//! - Generic walk engine with overridable per-kind handler dispatch
//! - Object/array delegation with combined or distinguished key/value handling
//! - Compact JSON stringifier (strict JSON or extended JavaScript-like output)
//! - JHTML encoder: values as a constrained `<dl>`/`<ol>`/`<i>` HTML vocabulary
//! - JHTML decoder: strict recursive-descent validation of that vocabulary
//! - Minimal HTML fragment parser and serializer for the markup tree
//! - Pull-based pre-order tree walker
//!
//! ## Quick Start
//!
//! ```rust
//! use sajj::{jhtml, stringify, Value, WalkConfig};
//!
//! let value = Value::object(vec![
//!     ("name", Value::string("sajj")),
//!     ("tags", Value::array(vec![Value::number(1.0), Value::Null])),
//! ]);
//!
//! let json = stringify(&value, &WalkConfig::default()).unwrap();
//! assert_eq!(json, r#"{"name":"sajj","tags":[1,null]}"#);
//!
//! let markup = jhtml::to_markup(&value, &WalkConfig::default()).unwrap();
//! assert!(markup.starts_with("<dl itemscope=\"\""));
//!
//! let tree = jhtml::to_markup_tree(&value, &WalkConfig::default()).unwrap();
//! let decoded = jhtml::from_markup_tree(&tree, &WalkConfig::default()).unwrap();
//! assert_eq!(decoded, value);
//! ```
//!
//! ## Writing Handlers
//!
//! ```rust
//! use sajj::walk::{Context, Handlers, Walker, WalkResult};
//! use sajj::{Value, WalkConfig};
//!
//! /// Counts the strings in a tree
//! struct StringCounter;
//!
//! impl Handlers for StringCounter {
//!     fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> { Ok(String::new()) }
//!     fn boolean(&self, _b: bool, _ctx: &Context<'_>) -> WalkResult<String> { Ok(String::new()) }
//!     fn number(&self, _n: f64, _ctx: &Context<'_>) -> WalkResult<String> { Ok(String::new()) }
//!     fn string(&self, _s: &str, _ctx: &Context<'_>) -> WalkResult<String> { Ok("s".into()) }
//! }
//!
//! let walker = Walker::new(StringCounter, WalkConfig::default()).unwrap();
//! let value = Value::array(vec![Value::string("a"), Value::Null, Value::string("b")]);
//! assert_eq!(walker.walk(&value).unwrap().len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate
//! - `parallel` - Batch rendering/decoding on the rayon thread pool

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

/// Logging macros - no-ops unless the logging feature is enabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

// Prelude module for convenient imports
pub mod prelude;

pub mod jhtml;
pub mod markup;
pub mod parallel;
pub mod regex_cache;
pub mod walk;

/// Re-export commonly used types for convenience
pub use walk::{
    // Configuration
    config::{Mode, WalkConfig},
    // Errors
    error::{WalkError, WalkResult},
    // Classification
    kind::{Kind, KindSet},
    // Stringifier
    stringify::{stringify, Stringifier},
    // Pull-based walking
    tree_walker::{TreeWalker, Visit},
    // Data model
    value::{Array, BigInt, Object, Value},
    // Engine
    Context, Handlers, KeyValueMode, Walker,
};

pub use jhtml::{JhtmlStringifier, JHTML_NAMESPACE};
pub use markup::{parse_document, parse_fragment, Document, Element, Node};
