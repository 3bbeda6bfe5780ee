//! The value-tree walk engine
//!
//! # Module Organization
//!
//! ## Data Model
//! - [`value`] - [`Value`], [`Object`], [`Array`], [`BigInt`]
//! - [`context`] - Position of a value during a walk
//!
//! ## Classification
//! - [`kind`] - [`Kind`], mode-aware classification, [`KindSet`]
//!
//! ## Engine
//! - [`Handlers`] - Per-kind handlers and structural hooks
//! - [`Walker`] - Dispatch and object/array iteration
//! - [`config`] - [`WalkConfig`] and [`Mode`]
//!
//! ## Renderers
//! - [`stringify`] - Compact JSON text
//!
//! ## Pull-Based Walking
//! - [`tree_walker`] - Pre-order iterator over a value tree

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod context;
mod delegator;
pub mod error;
pub mod handler;
pub mod kind;
pub mod number;
pub mod stringify;
pub mod tree_walker;
pub mod value;
pub mod walker;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Mode, WalkConfig, DEFAULT_MAX_DEPTH};
pub use context::{Context, Key, Parent};
pub use error::{WalkError, WalkResult};
pub use handler::Handlers;
pub use kind::{classify, Classification, Kind, KindSet};
pub use number::format_number;
pub use stringify::{stringify, Stringifier};
pub use tree_walker::{TreeWalker, Visit};
pub use value::{Array, BigInt, Object, Value};
pub use walker::{KeyValueMode, Walker};
