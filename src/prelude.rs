//! Prelude module for convenient imports
//!
//! Importing this module with a wildcard import brings the core types into scope:
//!
//! ```
//! use sajj::prelude::*;
//!
//! let value = Value::array(vec![Value::Null]);
//! assert_eq!(stringify(&value, &WalkConfig::default()).unwrap(), "[null]");
//! ```
//!
//! # Re-exported Items
//!
//! ## Data Model
//! - [`Value`], [`Object`], [`Array`], [`BigInt`]
//!
//! ## Walk Engine
//! - [`Handlers`] - Per-kind handler trait
//! - [`Walker`] - Dispatch engine
//! - [`Context`], [`Key`], [`Parent`] - Position of a value in its tree
//! - [`Kind`], [`KindSet`] - Value classification
//! - [`WalkConfig`], [`Mode`] - Configuration
//! - [`TreeWalker`], [`Visit`] - Pull-based pre-order walking
//!
//! ## Renderers
//! - [`stringify()`], [`Stringifier`] - JSON text
//! - [`JhtmlStringifier`] - JHTML markup
//!
//! ## Errors
//! - [`WalkError`], [`WalkResult`]
//! - [`DecodeError`], [`DecodeResult`]
//! - [`MarkupError`]

// ============================================================================
// Data Model
// ============================================================================

pub use crate::walk::value::{Array, BigInt, Object, Value};

// ============================================================================
// Walk Engine
// ============================================================================

pub use crate::walk::{
    Context, Handlers, Key, Kind, KindSet, Mode, Parent, TreeWalker, Visit, WalkConfig, Walker,
};

// ============================================================================
// Renderers
// ============================================================================

pub use crate::jhtml::JhtmlStringifier;
pub use crate::walk::stringify::{stringify, Stringifier};

// ============================================================================
// Error Handling
// ============================================================================

pub use crate::jhtml::{DecodeError, DecodeResult};
pub use crate::markup::MarkupError;
pub use crate::walk::error::{WalkError, WalkResult};
