//! The walk engine
//!
//! A [`Walker`] pairs a [`Handlers`] implementation with a validated
//! [`WalkConfig`]. It holds no per-walk state: the output is built from
//! return values and the position travels in [`Context`], so one walker can
//! serve any number of walks, concurrently when the handlers are `Sync`.

use super::config::WalkConfig;
use super::context::Context;
use super::error::{WalkError, WalkResult};
use super::handler::Handlers;
use super::kind::{classify, Classification, Kind};
use super::value::Value;

/// How object entries and array elements reach the handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValueMode {
    /// `object_entry` / `array_element` render each entry in one call
    Combined,
    /// Key handler then value handler, concatenated
    Distinguished,
}

impl KeyValueMode {
    fn from_config(config: &WalkConfig) -> Self {
        if config.distinguish_key_value {
            KeyValueMode::Distinguished
        } else {
            KeyValueMode::Combined
        }
    }
}

/// Walks value trees, routing every node to its handler
#[derive(Debug, Clone)]
pub struct Walker<H> {
    pub(super) handlers: H,
    pub(super) config: WalkConfig,
    pub(super) key_value_mode: KeyValueMode,
}

impl<H: Handlers> Walker<H> {
    /// Create a walker, validating the configuration once
    pub fn new(handlers: H, config: WalkConfig) -> WalkResult<Self> {
        config.validate()?;
        let key_value_mode = KeyValueMode::from_config(&config);
        log_debug!(
            "walker: mode={:?} key_value={:?} own_only={}",
            config.mode,
            key_value_mode,
            config.iterate_own_only
        );
        Ok(Self {
            handlers,
            config,
            key_value_mode,
        })
    }

    /// The handler table
    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    /// The configuration
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// The key/value dispatch strategy chosen at construction
    pub fn key_value_mode(&self) -> KeyValueMode {
        self.key_value_mode
    }

    /// Walk a root value: `begin + dispatch + end`
    pub fn walk(&self, value: &Value) -> WalkResult<String> {
        self.walk_in(value, &Context::root())
    }

    /// Walk a value that sits inside a larger tree
    pub fn walk_in(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
        let mut out = self.handlers.begin(value, ctx)?;
        out.push_str(&self.delegate(value, ctx)?);
        out.push_str(&self.handlers.end(value, ctx)?);
        Ok(out)
    }

    /// Kind a value is handled as, after the type-error policy
    pub fn classify(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<Kind> {
        match classify(value, self.config.mode) {
            Classification::Admitted(kind) => Ok(kind),
            Classification::Rejected(kind) => {
                let resolved = self.handlers.type_error(kind, value, ctx)?;
                log_debug!("type error: {} handled as {}", kind, resolved);
                Ok(resolved)
            }
        }
    }

    /// Classify a value and hand it to the dispatch strategy
    pub fn delegate(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
        if ctx.depth() > self.config.max_depth {
            return Err(WalkError::RecursionLimitExceeded {
                depth: ctx.depth(),
                max_depth: self.config.max_depth,
            });
        }
        let kind = self.classify(value, ctx)?;
        log_trace!("dispatch {} at depth {}", kind, ctx.depth());
        self.handlers.invoke(self, kind, value, ctx)
    }

    /// Call the handler for `kind` with the payload of `value`
    ///
    /// `null`, `undefined` and `ignore` take no payload; every other kind
    /// must match the value's own kind.
    pub fn call_handler(&self, kind: Kind, value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
        let h = &self.handlers;
        match (kind, value) {
            (Kind::Null, _) => h.null(ctx),
            (Kind::Undefined, _) => h.undefined(ctx),
            (Kind::Ignore, _) => {
                h.ignore(value, ctx)?;
                Ok(String::new())
            }
            (Kind::Boolean, Value::Boolean(b)) => h.boolean(*b, ctx),
            (Kind::Number, Value::Number(n)) => h.number(*n, ctx),
            (Kind::NonFiniteNumber, Value::Number(n)) => h.non_finite_number(*n, ctx),
            (Kind::String, Value::String(s)) => h.string(s, ctx),
            (Kind::Function, Value::Function(src)) => h.function(src, ctx),
            (Kind::BigInt, Value::BigInt(b)) => h.bigint(b, ctx),
            (Kind::Symbol, Value::Symbol(desc)) => h.symbol(desc, ctx),
            (Kind::Date, Value::Date(text)) => h.date(text, ctx),
            (Kind::RegExp, Value::RegExp { source, flags }) => h.regexp(source, flags, ctx),
            (Kind::Array, Value::Array(a)) => h.array(self, a, ctx),
            (Kind::Object, Value::Object(o)) => h.object(self, o, ctx),
            (kind, value) => Err(WalkError::KindMismatch {
                kind,
                actual: Kind::of(value),
            }),
        }
    }
}
