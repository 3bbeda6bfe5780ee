//! Object and array iteration
//!
//! The default `object`/`array` handlers land here. Children are visited in
//! enumeration order (see [`Object::enumerate`] and [`Array::enumerate`]),
//! each rendered through the walker's [`KeyValueMode`], and joined with the
//! renderer's joiner between the begin/end wrappers.

use super::context::{Context, Key, Parent};
use super::error::WalkResult;
use super::handler::Handlers;
use super::kind::Kind;
use super::value::{Array, Object, Value};
use super::walker::{KeyValueMode, Walker};
use std::borrow::Cow;

impl<H: Handlers> Walker<H> {
    /// Render an object: wrappers around its joined entries
    pub fn walk_object(&self, object: &Object, ctx: &Context<'_>) -> WalkResult<String> {
        let h = &self.handlers;
        let mut out = h.begin_object(object, ctx)?;
        if self.config.iterate_objects {
            let mut parts: Vec<String> = Vec::with_capacity(object.len());
            for (key, value) in object.enumerate(self.config.iterate_own_only) {
                let child = ctx.child(Parent::Object(object), Key::Name(Cow::Borrowed(key)));
                if self.skip_ignored(value, &child)? {
                    continue;
                }
                let iter_ct = parts.len();
                let part = match self.key_value_mode {
                    KeyValueMode::Combined => h.object_entry(self, key, value, iter_ct, &child)?,
                    KeyValueMode::Distinguished => {
                        let mut part = h.object_key(key, iter_ct, &child)?;
                        part.push_str(&h.object_value(self, value, iter_ct, &child)?);
                        part
                    }
                };
                parts.push(part);
            }
            out.push_str(&parts.join(h.object_joiner()));
        }
        out.push_str(&h.end_object(object, ctx)?);
        Ok(out)
    }

    /// Render an array: wrappers around its joined elements
    pub fn walk_array(&self, array: &Array, ctx: &Context<'_>) -> WalkResult<String> {
        let h = &self.handlers;
        let mut out = h.begin_array(array, ctx)?;
        if self.config.iterate_arrays {
            let mut parts: Vec<String> = Vec::with_capacity(array.len());
            for (key, value) in array.enumerate(self.config.iterate_own_only) {
                let child = ctx.child(Parent::Array(array), key.clone());
                if self.skip_ignored(value, &child)? {
                    continue;
                }
                let part = match self.key_value_mode {
                    KeyValueMode::Combined => h.array_element(self, &key, value, &child)?,
                    KeyValueMode::Distinguished => {
                        let mut part = h.array_key(&key, &child)?;
                        part.push_str(&h.array_value(self, value, &child)?);
                        part
                    }
                };
                parts.push(part);
            }
            out.push_str(&parts.join(h.array_joiner()));
        }
        out.push_str(&h.end_array(array, ctx)?);
        Ok(out)
    }

    /// Run the ignore hook and report whether the child is dropped
    fn skip_ignored(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<bool> {
        if self.classify(value, ctx)? != Kind::Ignore {
            return Ok(false);
        }
        log_debug!("ignoring child {:?}", ctx.key());
        self.handlers.ignore(value, ctx)?;
        Ok(true)
    }
}
