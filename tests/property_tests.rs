//! Property-based tests using proptest
//!
//! These tests check round trips and invariants across generated value
//! trees and text.

use proptest::prelude::*;
use sajj::jhtml;
use sajj::markup::{escape_html_text, unescape_html_text};
use sajj::walk::format_number;
use sajj::{stringify, TreeWalker, Value, WalkConfig};

// =============================================================================
// Strategies
// =============================================================================

/// Numbers with short exact decimal forms
fn short_number() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000).prop_map(|n| n as f64 / 8.0)
}

/// Any finite number, including exponent forms, subnormals and extremes
fn finite_number() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |n| n.is_finite())
}

fn number() -> impl Strategy<Value = f64> {
    prop_oneof![
        short_number(),
        finite_number(),
        prop_oneof![
            Just(5e-324),
            Just(f64::MAX),
            Just(1e21),
            Just(1e-7),
            Just(-1.5e-300)
        ],
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        number().prop_map(Value::Number),
        "\\PC{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::array),
            prop::collection::vec(("\\PC{0,8}", inner), 0..6)
                .prop_map(|pairs: Vec<(String, Value)>| Value::object(pairs)),
        ]
    })
}

fn count_nodes(value: &Value) -> usize {
    1 + match value {
        Value::Array(a) => a.iter().map(count_nodes).sum(),
        Value::Object(o) => o.iter().map(|(_, v)| count_nodes(v)).sum(),
        _ => 0,
    }
}

// =============================================================================
// Round Trips
// =============================================================================

proptest! {
    /// Encoding to a JHTML tree and decoding gives the value back
    #[test]
    fn test_jhtml_round_trip(value in json_value()) {
        let config = WalkConfig::default();
        let tree = jhtml::to_markup_tree(&value, &config).unwrap();
        prop_assert_eq!(jhtml::from_markup_tree(&tree, &config).unwrap(), value);
    }

    /// JHTML markup text parses back to the same value
    #[test]
    fn test_jhtml_text_round_trip(value in json_value()) {
        let config = WalkConfig::default();
        let markup = jhtml::to_markup(&value, &config).unwrap();
        prop_assert_eq!(jhtml::from_markup(&markup, &config).unwrap(), value);
    }

    /// Number text parses back to the same number, both as a Rust float
    /// and as a JHTML leaf
    #[test]
    fn test_number_text_round_trip(n in finite_number()) {
        let text = format_number(n);
        prop_assert_eq!(text.parse::<f64>().unwrap(), n);
        let config = WalkConfig::default();
        let markup = jhtml::to_markup(&Value::number(n), &config).unwrap();
        prop_assert_eq!(jhtml::from_markup(&markup, &config).unwrap(), Value::number(n));
    }

    /// Strict output is JSON that parses back to the same value
    #[test]
    fn test_json_round_trip(value in json_value()) {
        let text = stringify(&value, &WalkConfig::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(Value::from(parsed), value);
    }
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    /// Unescaping inverts escaping
    #[test]
    fn test_escape_inverts(s in "\\PC*") {
        prop_assert_eq!(unescape_html_text(&escape_html_text(&s)), s);
    }

    /// Escaped text holds no raw `<`
    #[test]
    fn test_escape_removes_angle(s in "\\PC*") {
        prop_assert!(!escape_html_text(&s).contains('<'));
    }

    /// Rendering is deterministic across walks and walkers
    #[test]
    fn test_render_deterministic(value in json_value()) {
        let config = WalkConfig::default();
        let first = jhtml::to_markup(&value, &config).unwrap();
        let second = jhtml::to_markup(&value, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Combined and distinguished key/value handling render the same JSON
    #[test]
    fn test_key_value_modes_agree(value in json_value()) {
        let combined = stringify(&value, &WalkConfig::default()).unwrap();
        let distinguished =
            stringify(&value, &WalkConfig::default().with_distinguish_key_value(true)).unwrap();
        prop_assert_eq!(combined, distinguished);
    }

    /// The tree walker visits every node once
    #[test]
    fn test_tree_walker_visits_all(value in json_value()) {
        let visits = TreeWalker::new(&value, WalkConfig::default())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        prop_assert_eq!(visits.len(), count_nodes(&value));
    }
}
