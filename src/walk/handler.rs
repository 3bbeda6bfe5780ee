//! Handler table for the walk engine
//!
//! A renderer implements [`Handlers`]: one method per value kind, plus the
//! structural hooks around objects, arrays and their entries. Every method
//! receives the [`Context`] of the value it handles.
//!
//! # Defaults
//!
//! - `begin`/`end`, the object/array wrappers, keys and joiners emit nothing.
//! - Scalar handlers fail with [`WalkError::MissingHandler`]; a renderer
//!   overrides the ones reachable under its mode.
//! - `object`/`array` delegate to the walker's iteration, and entry values
//!   delegate back to the walker's dispatch.
//! - `type_error` degrades non-finite numbers to null and rejects the rest.
//!
//! # Dispatch Flow
//!
//! ```text
//! walk(value)
//!   begin(value)
//!   delegate(value)             classify, then invoke(kind)
//!     object(obj)               default: walk_object
//!       begin_object(obj)
//!         object_entry(...)     combined mode: object_key + object_value
//!         object_key(...)       distinguished mode
//!         object_value(...)       -> delegate(child)
//!       end_object(obj)
//!   end(value)
//! ```

use super::context::{Context, Key};
use super::error::{WalkError, WalkResult};
use super::kind::Kind;
use super::value::{Array, BigInt, Object, Value};
use super::walker::Walker;

fn missing(kind: Kind) -> WalkResult<String> {
    Err(WalkError::MissingHandler { kind })
}

/// Per-kind handlers and structural hooks driven by a [`Walker`]
pub trait Handlers: Sized {
    /// Emitted before the root value
    fn begin(&self, _value: &Value, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Emitted after the root value
    fn end(&self, _value: &Value, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    // ------------------------------------------------------------------------
    // Dispatch strategy
    // ------------------------------------------------------------------------

    /// Invoke the handler for `kind`
    ///
    /// Override to intercept every dispatch, e.g. to record or defer it.
    fn invoke(
        &self,
        walker: &Walker<Self>,
        kind: Kind,
        value: &Value,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        walker.call_handler(kind, value, ctx)
    }

    /// Decide what a kind the mode rejects becomes
    ///
    /// Return another kind to handle the value as that kind (`Null` and
    /// `Ignore` work for any value), or an error to abort the walk.
    fn type_error(&self, kind: Kind, _value: &Value, _ctx: &Context<'_>) -> WalkResult<Kind> {
        match kind {
            Kind::NonFiniteNumber => Ok(Kind::Null),
            _ => Err(WalkError::KindRejected { kind }),
        }
    }

    /// Called for values classified as [`Kind::Ignore`]; they produce no output
    fn ignore(&self, _value: &Value, _ctx: &Context<'_>) -> WalkResult<()> {
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------------

    /// `null`
    fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Null)
    }

    /// `undefined`
    fn undefined(&self, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Undefined)
    }

    /// Boolean
    fn boolean(&self, _value: bool, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Boolean)
    }

    /// Finite number
    fn number(&self, _value: f64, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Number)
    }

    /// `Infinity`, `-Infinity` or `NaN`
    fn non_finite_number(&self, _value: f64, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::NonFiniteNumber)
    }

    /// String
    fn string(&self, _value: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::String)
    }

    /// Function source
    fn function(&self, _source: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Function)
    }

    /// Big integer
    fn bigint(&self, _value: &BigInt, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::BigInt)
    }

    /// Symbol description
    fn symbol(&self, _description: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Symbol)
    }

    /// Date text
    fn date(&self, _text: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::Date)
    }

    /// Regular expression
    fn regexp(&self, _source: &str, _flags: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        missing(Kind::RegExp)
    }

    // ------------------------------------------------------------------------
    // Composites
    // ------------------------------------------------------------------------

    /// Object; the default iterates its entries
    fn object(
        &self,
        walker: &Walker<Self>,
        object: &Object,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        walker.walk_object(object, ctx)
    }

    /// Array; the default iterates its elements
    fn array(&self, walker: &Walker<Self>, array: &Array, ctx: &Context<'_>) -> WalkResult<String> {
        walker.walk_array(array, ctx)
    }

    /// Opening wrapper of an object
    fn begin_object(&self, _object: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Closing wrapper of an object
    fn end_object(&self, _object: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Opening wrapper of an array
    fn begin_array(&self, _array: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Closing wrapper of an array
    fn end_array(&self, _array: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Placed between rendered object entries
    fn object_joiner(&self) -> &str {
        ""
    }

    /// Placed between rendered array elements
    fn array_joiner(&self) -> &str {
        ""
    }

    // ------------------------------------------------------------------------
    // Entries
    //
    // `ctx` is the context of the entry's value: its parent is the composite
    // being iterated. `iter_ct` counts the entries rendered so far.
    // ------------------------------------------------------------------------

    /// Combined mode: render a whole object entry
    fn object_entry(
        &self,
        walker: &Walker<Self>,
        key: &str,
        value: &Value,
        iter_ct: usize,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        let mut out = self.object_key(key, iter_ct, ctx)?;
        out.push_str(&self.object_value(walker, value, iter_ct, ctx)?);
        Ok(out)
    }

    /// Combined mode: render a whole array element
    ///
    /// The default emits the value only; `array_key` output is used in
    /// distinguished mode.
    fn array_element(
        &self,
        walker: &Walker<Self>,
        _key: &Key<'_>,
        value: &Value,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        self.array_value(walker, value, ctx)
    }

    /// Object key
    fn object_key(&self, _key: &str, _iter_ct: usize, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Array key
    fn array_key(&self, _key: &Key<'_>, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    /// Object entry value; the default dispatches it
    fn object_value(
        &self,
        walker: &Walker<Self>,
        value: &Value,
        _iter_ct: usize,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        walker.delegate(value, ctx)
    }

    /// Array element value; the default dispatches it
    fn array_value(
        &self,
        walker: &Walker<Self>,
        value: &Value,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        walker.delegate(value, ctx)
    }
}
