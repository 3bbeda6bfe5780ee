//! `<i>` leaf text
//!
//! Decoding tries, in order: `null`, `true`, `false`, the JavaScript-only
//! keywords (`undefined`, `Infinity`, `-Infinity`, `NaN`), a number literal,
//! then the JavaScript-only forms: function source, weekday-prefixed date,
//! regular expression literal, bigint literal, `Symbol('desc')`.

use super::error::{DecodeError, DecodeResult};
use crate::regex_cache::{captures, is_match};
use crate::walk::number::format_number;
use crate::walk::{BigInt, Value};

const NUMBER: &str = r"(?i)^-?(?:0|[1-9]\d*)(?:\.\d+)?(?:e[+-]?\d+)?$";
const FUNCTION: &str = r"^function \w*\s*\(([\w, ]*)\) \{([\s\S]*)\}$";
const DATE: &str = r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun) ";
const REGEXP: &str = r"^/([\s\S]*)/([gimydsuv]+)?$";
const BIGINT: &str = r"^-?\d+n$";
const SYMBOL: &str = r"^Symbol\('([\s\S]*)'\)$";

/// Decode the text of an `<i>` element
pub(crate) fn decode_leaf(text: &str, allow_extended: bool) -> DecodeResult<Value> {
    let extended = match text {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Boolean(true)),
        "false" => return Ok(Value::Boolean(false)),
        "undefined" => Value::Undefined,
        "Infinity" => Value::Number(f64::INFINITY),
        "-Infinity" => Value::Number(f64::NEG_INFINITY),
        "NaN" => Value::Number(f64::NAN),
        _ if is_match(NUMBER, text) => {
            return text
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| unrecognized(text));
        }
        _ => extended_form(text)?,
    };
    if !allow_extended {
        return Err(DecodeError::ExtendedValueInStrictMode {
            value: display(&extended),
        });
    }
    Ok(extended)
}

fn extended_form(text: &str) -> DecodeResult<Value> {
    if is_match(FUNCTION, text) {
        return Ok(Value::Function(text.to_string()));
    }
    if is_match(DATE, text) {
        return Ok(Value::Date(text.to_string()));
    }
    if let Some(mut caps) = captures(REGEXP, text) {
        let flags = caps.pop().unwrap_or_default();
        let source = caps.pop().unwrap_or_default();
        return Ok(Value::RegExp { source, flags });
    }
    if is_match(BIGINT, text) {
        return BigInt::parse(&text[..text.len() - 1])
            .map(Value::BigInt)
            .ok_or_else(|| unrecognized(text));
    }
    if let Some(caps) = captures(SYMBOL, text) {
        if let Some(description) = caps.into_iter().next() {
            return Ok(Value::Symbol(description));
        }
    }
    Err(unrecognized(text))
}

fn unrecognized(text: &str) -> DecodeError {
    DecodeError::UnrecognizedType {
        text: text.to_string(),
    }
}

/// Text form of a decoded value, as used in error messages
fn display(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Number(n) => format_number(*n),
        Value::Function(src) | Value::Date(src) => src.clone(),
        Value::RegExp { source, flags } => format!("/{}/{}", source, flags),
        Value::BigInt(b) => b.to_string(),
        Value::Symbol(desc) => format!("Symbol({})", desc),
        other => format!("{:?}", other),
    }
}

/// Text written inside `<i>` for a leaf value, before HTML escaping
pub(crate) fn leaf_text(value: &Value) -> Option<String> {
    Some(match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(b) => format!("{}n", b),
        Value::Symbol(desc) => format!("Symbol('{}')", desc),
        Value::Function(src) | Value::Date(src) => src.clone(),
        Value::RegExp { source, flags } => format!("/{}/{}", source, flags),
        Value::String(_) | Value::Array(_) | Value::Object(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_leaves() {
        assert_eq!(decode_leaf("null", false), Ok(Value::Null));
        assert_eq!(decode_leaf("true", false), Ok(Value::Boolean(true)));
        assert_eq!(decode_leaf("55.6", false), Ok(Value::Number(55.6)));
        assert_eq!(decode_leaf("-1E3", false), Ok(Value::Number(-1000.0)));
        assert_eq!(decode_leaf("2e-2", false), Ok(Value::Number(0.02)));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        for text in ["01", "1.", ".5", "+1", "0x10"] {
            assert!(matches!(
                decode_leaf(text, true),
                Err(DecodeError::UnrecognizedType { .. })
            ));
        }
    }

    #[test]
    fn test_extended_leaves() {
        assert_eq!(decode_leaf("undefined", true), Ok(Value::Undefined));
        assert_eq!(
            decode_leaf("-Infinity", true),
            Ok(Value::Number(f64::NEG_INFINITY))
        );
        assert!(matches!(decode_leaf("NaN", true), Ok(Value::Number(n)) if n.is_nan()));
        assert_eq!(
            decode_leaf("function keyFunction () {}", true),
            Ok(Value::function("function keyFunction () {}"))
        );
        assert_eq!(
            decode_leaf("Mon Jan 01 2024 00:00:00 GMT+0000", true),
            Ok(Value::date("Mon Jan 01 2024 00:00:00 GMT+0000"))
        );
        assert_eq!(decode_leaf("/a\\/b/gi", true), Ok(Value::regexp("a\\/b", "gi")));
        assert_eq!(decode_leaf("/x/", true), Ok(Value::regexp("x", "")));
        assert_eq!(decode_leaf("123n", true), Ok(Value::bigint(123)));
        assert_eq!(decode_leaf("-9n", true), Ok(Value::bigint(-9)));
        assert_eq!(decode_leaf("Symbol('tag')", true), Ok(Value::symbol("tag")));
    }

    #[test]
    fn test_strict_mode_messages() {
        let e = decode_leaf("Infinity", false).unwrap_err();
        assert_eq!(
            e.to_string(),
            "The value type (Infinity) cannot be used in JSON mode"
        );
        let e = decode_leaf("10n", false).unwrap_err();
        assert_eq!(e.to_string(), "The value type (10) cannot be used in JSON mode");
    }

    #[test]
    fn test_unrecognized() {
        let e = decode_leaf("maybe", true).unwrap_err();
        assert_eq!(e.to_string(), "Unrecognized type");
    }

    #[test]
    fn test_leaf_text_round_trips() {
        for value in [
            Value::Null,
            Value::Boolean(false),
            Value::Number(-0.5),
            Value::Undefined,
            Value::bigint(-77),
            Value::symbol("s1"),
            Value::regexp("^a$", "m"),
            Value::function("function () {}"),
        ] {
            let text = leaf_text(&value).unwrap();
            assert_eq!(decode_leaf(&text, true), Ok(value));
        }
        assert!(leaf_text(&Value::string("s")).is_none());
    }

    #[test]
    fn test_symbol_descriptions() {
        for description in ["", "my tag", "a-b", "it's", "('x')"] {
            let value = Value::symbol(description);
            let text = leaf_text(&value).unwrap();
            assert_eq!(decode_leaf(&text, true), Ok(value));
        }
        assert!(decode_leaf("Symbol(tag)", true).is_err());
    }
}
