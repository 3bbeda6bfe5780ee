//! Compact JSON stringifier
//!
//! In strict mode the output is standard JSON: non-finite numbers become
//! `null` and the JavaScript-only kinds are rejected. Extended mode also
//! writes those kinds, as source-like text:
//!
//! | kind        | output              |
//! |-------------|---------------------|
//! | undefined   | `undefined`         |
//! | non-finite  | `Infinity`, `NaN`   |
//! | function    | its source text     |
//! | bigint      | `123n`              |
//! | symbol      | `Symbol(desc)`      |
//! | date        | quoted date text    |
//! | regexp      | `/source/flags`     |
//!
//! ```rust
//! use sajj::{stringify, Value, WalkConfig};
//!
//! let value = Value::object(vec![("n", Value::bigint(12)), ("f", Value::Undefined)]);
//! assert!(stringify(&value, &WalkConfig::default()).is_err());
//! assert_eq!(
//!     stringify(&value, &WalkConfig::extended()).unwrap(),
//!     r#"{"n":12n,"f":undefined}"#
//! );
//! ```

use super::config::WalkConfig;
use super::context::{Context, Key};
use super::error::WalkResult;
use super::handler::Handlers;
use super::number::format_number;
use super::value::{Array, BigInt, Object};
use super::walker::Walker;

/// Handlers producing compact JSON text
#[derive(Debug, Clone, Copy, Default)]
pub struct Stringifier;

impl Stringifier {
    /// A walker running this stringifier under `config`
    pub fn walker(config: WalkConfig) -> WalkResult<Walker<Stringifier>> {
        Walker::new(Stringifier, config)
    }
}

/// Stringify a value in one call
pub fn stringify(value: &super::value::Value, config: &WalkConfig) -> WalkResult<String> {
    Stringifier::walker(config.clone())?.walk(value)
}

fn quote(s: &str) -> WalkResult<String> {
    Ok(serde_json::to_string(s)?)
}

impl Handlers for Stringifier {
    fn begin_object(&self, _object: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("{".to_string())
    }

    fn end_object(&self, _object: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("}".to_string())
    }

    fn begin_array(&self, _array: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("[".to_string())
    }

    fn end_array(&self, _array: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("]".to_string())
    }

    fn object_key(&self, key: &str, _iter_ct: usize, _ctx: &Context<'_>) -> WalkResult<String> {
        let mut out = quote(key)?;
        out.push(':');
        Ok(out)
    }

    fn array_key(&self, _key: &Key<'_>, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(String::new())
    }

    fn object_joiner(&self) -> &str {
        ","
    }

    fn array_joiner(&self) -> &str {
        ","
    }

    fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("null".to_string())
    }

    fn boolean(&self, value: bool, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(value.to_string())
    }

    fn number(&self, value: f64, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format_number(value))
    }

    fn string(&self, value: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        quote(value)
    }

    // JavaScript-only kinds, reachable in extended mode

    fn undefined(&self, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("undefined".to_string())
    }

    fn non_finite_number(&self, value: f64, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format_number(value))
    }

    fn function(&self, source: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(source.to_string())
    }

    fn bigint(&self, value: &BigInt, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("{}n", value))
    }

    fn symbol(&self, description: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("Symbol({})", description))
    }

    fn date(&self, text: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        quote(text)
    }

    fn regexp(&self, source: &str, flags: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("/{}/{}", source, flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::error::WalkError;
    use crate::walk::kind::Kind;
    use crate::walk::value::Value;

    fn json(value: &Value) -> String {
        stringify(value, &WalkConfig::default()).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(json(&Value::Null), "null");
        assert_eq!(json(&Value::boolean(false)), "false");
        assert_eq!(json(&Value::number(55.6)), "55.6");
        assert_eq!(json(&Value::string("a\"b\\c")), r#""a\"b\\c""#);
    }

    #[test]
    fn test_keys_are_escaped() {
        let value = Value::object(vec![("q\"k\\", Value::Null)]);
        assert_eq!(json(&value), r#"{"q\"k\\":null}"#);
    }

    #[test]
    fn test_nested() {
        let value = Value::object(vec![
            (
                "a",
                Value::array(vec![Value::number(1.0), Value::Object(Object::new())]),
            ),
            ("b", Value::array(vec![])),
        ]);
        assert_eq!(json(&value), r#"{"a":[1,{}],"b":[]}"#);
    }

    #[test]
    fn test_non_finite_is_null_in_strict_mode() {
        let value = Value::array(vec![Value::number(f64::INFINITY), Value::number(f64::NAN)]);
        assert_eq!(json(&value), "[null,null]");
        assert_eq!(
            stringify(&value, &WalkConfig::extended()).unwrap(),
            "[Infinity,NaN]"
        );
    }

    #[test]
    fn test_strict_rejects_extended_kinds() {
        for (value, kind) in [
            (Value::Undefined, Kind::Undefined),
            (Value::function("function () {}"), Kind::Function),
            (Value::bigint(1), Kind::BigInt),
            (Value::symbol("s"), Kind::Symbol),
        ] {
            assert_eq!(
                stringify(&value, &WalkConfig::default()),
                Err(WalkError::KindRejected { kind })
            );
        }
    }

    #[test]
    fn test_extended_forms() {
        let value = Value::array(vec![
            Value::function("function f (a) { return a; }"),
            Value::bigint(-42),
            Value::symbol("tag"),
            Value::regexp("a+", "gi"),
            Value::date("Mon Jan 01 2024"),
        ]);
        assert_eq!(
            stringify(&value, &WalkConfig::extended()).unwrap(),
            r#"[function f (a) { return a; },-42n,Symbol(tag),/a+/gi,"Mon Jan 01 2024"]"#
        );
    }

    #[test]
    fn test_output_reparses() {
        let value = Value::object(vec![
            ("text", Value::string("tab\there \u{1}")),
            ("n", Value::number(-0.25)),
        ]);
        let text = json(&value);
        let back: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(Value::from(back), value);
    }
}
