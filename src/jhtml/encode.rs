//! JHTML encoder
//!
//! Renders a value tree as markup:
//!
//! | value         | markup                                            |
//! |---------------|---------------------------------------------------|
//! | object        | `<dl>` of `<dt>key</dt><dd>value</dd>` pairs      |
//! | array         | `<ol start="0">` of `<li>value</li>`              |
//! | string        | bare escaped text; `<span>` at the root           |
//! | other scalars | `<i>text</i>`                                     |
//!
//! The root element carries `itemscope=""` and `itemtype` set to
//! [`JHTML_NAMESPACE`](super::JHTML_NAMESPACE) so that documents can be
//! scanned for embedded values. Composites put the pair on their own tag;
//! a root scalar gets a `<span>` (strings) or `<i>` wrapper to hold it.

use super::leaf::leaf_text;
use super::JHTML_NAMESPACE;
use crate::markup::escape_html_text;
use crate::walk::{
    Array, BigInt, Context, Handlers, Object, Value, WalkConfig, WalkResult, Walker,
};

/// Handlers producing JHTML markup
#[derive(Debug, Clone, Copy, Default)]
pub struct JhtmlStringifier;

impl JhtmlStringifier {
    /// A walker running the encoder under `config`
    ///
    /// Keys and values are always rendered separately, whatever `config`
    /// says about key/value handling.
    pub fn walker(config: WalkConfig) -> WalkResult<Walker<JhtmlStringifier>> {
        Walker::new(JhtmlStringifier, config.with_distinguish_key_value(true))
    }
}

fn item_scope(ctx: &Context<'_>) -> String {
    if ctx.is_root() {
        format!(r#" itemscope="" itemtype="{}""#, JHTML_NAMESPACE)
    } else {
        String::new()
    }
}

/// Leaf text, wrapped in `<i>` below the root; `begin`/`end` wrap the root
fn leaf(text: &str, ctx: &Context<'_>) -> WalkResult<String> {
    let escaped = escape_html_text(text);
    Ok(if ctx.is_root() {
        escaped
    } else {
        format!("<i>{}</i>", escaped)
    })
}

fn leaf_value(value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
    leaf(&leaf_text(value).unwrap_or_default(), ctx)
}

fn root_wrapper(value: &Value) -> Option<&'static str> {
    match value {
        Value::String(_) => Some("span"),
        Value::Array(_) | Value::Object(_) => None,
        _ => Some("i"),
    }
}

impl Handlers for JhtmlStringifier {
    fn begin(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
        Ok(match root_wrapper(value) {
            Some(tag) if ctx.is_root() => format!("<{}{}>", tag, item_scope(ctx)),
            _ => String::new(),
        })
    }

    fn end(&self, value: &Value, ctx: &Context<'_>) -> WalkResult<String> {
        Ok(match root_wrapper(value) {
            Some(tag) if ctx.is_root() => format!("</{}>", tag),
            _ => String::new(),
        })
    }

    fn begin_object(&self, _object: &Object, ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("<dl{}>", item_scope(ctx)))
    }

    fn end_object(&self, _object: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("</dl>".to_string())
    }

    fn begin_array(&self, _array: &Array, ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!(r#"<ol start="0"{}>"#, item_scope(ctx)))
    }

    fn end_array(&self, _array: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("</ol>".to_string())
    }

    fn object_key(&self, key: &str, _iter_ct: usize, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("<dt>{}</dt>", escape_html_text(key)))
    }

    fn object_value(
        &self,
        walker: &Walker<Self>,
        value: &Value,
        _iter_ct: usize,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        Ok(format!("<dd>{}</dd>", walker.delegate(value, ctx)?))
    }

    fn array_value(
        &self,
        walker: &Walker<Self>,
        value: &Value,
        ctx: &Context<'_>,
    ) -> WalkResult<String> {
        Ok(format!("<li>{}</li>", walker.delegate(value, ctx)?))
    }

    fn string(&self, value: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(escape_html_text(value))
    }

    fn null(&self, ctx: &Context<'_>) -> WalkResult<String> {
        leaf("null", ctx)
    }

    fn boolean(&self, value: bool, ctx: &Context<'_>) -> WalkResult<String> {
        leaf_value(&Value::Boolean(value), ctx)
    }

    fn number(&self, value: f64, ctx: &Context<'_>) -> WalkResult<String> {
        leaf_value(&Value::Number(value), ctx)
    }

    fn undefined(&self, ctx: &Context<'_>) -> WalkResult<String> {
        leaf("undefined", ctx)
    }

    fn non_finite_number(&self, value: f64, ctx: &Context<'_>) -> WalkResult<String> {
        leaf_value(&Value::Number(value), ctx)
    }

    fn function(&self, source: &str, ctx: &Context<'_>) -> WalkResult<String> {
        leaf(source, ctx)
    }

    fn bigint(&self, value: &BigInt, ctx: &Context<'_>) -> WalkResult<String> {
        leaf(&format!("{}n", value), ctx)
    }

    fn symbol(&self, description: &str, ctx: &Context<'_>) -> WalkResult<String> {
        leaf(&format!("Symbol('{}')", description), ctx)
    }

    fn date(&self, text: &str, ctx: &Context<'_>) -> WalkResult<String> {
        leaf(text, ctx)
    }

    fn regexp(&self, source: &str, flags: &str, ctx: &Context<'_>) -> WalkResult<String> {
        leaf(&format!("/{}/{}", source, flags), ctx)
    }
}
