//! Integration tests for the walk engine
//!
//! These tests drive the engine with custom handler tables: key/value
//! strategies, inherited keys, dispatch interception, type-error policies,
//! concurrent reuse of one walker, and the pull-based tree walker.

use sajj::walk::{Context, Handlers, Key, Walker};
use sajj::{
    stringify, Array, Kind, KindSet, Mode, Object, Stringifier, TreeWalker, Value, WalkConfig,
    WalkError, WalkResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Renders `{k=v,...}` and `[i:v,...]` so keys and values are both visible
struct Pairs;

impl Handlers for Pairs {
    fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("null".into())
    }

    fn number(&self, n: f64, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(n.to_string())
    }

    fn string(&self, s: &str, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(s.to_string())
    }

    fn begin_object(&self, _o: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("{".into())
    }

    fn end_object(&self, _o: &Object, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("}".into())
    }

    fn begin_array(&self, _a: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("[".into())
    }

    fn end_array(&self, _a: &Array, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok("]".into())
    }

    fn object_joiner(&self) -> &str {
        ","
    }

    fn array_joiner(&self) -> &str {
        ","
    }

    fn object_key(&self, key: &str, _iter_ct: usize, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("{}=", key))
    }

    fn array_key(&self, key: &Key<'_>, _ctx: &Context<'_>) -> WalkResult<String> {
        Ok(format!("{}:", key))
    }
}

fn sample() -> Value {
    Value::object(vec![
        ("a", Value::number(1.0)),
        ("list", Value::array(vec![Value::string("x"), Value::Null])),
    ])
}

// ============================================================================
// Key/Value Strategies
// ============================================================================

#[test]
fn test_combined_mode_drops_array_keys() {
    let walker = Walker::new(Pairs, WalkConfig::default()).unwrap();
    assert_eq!(walker.walk(&sample()).unwrap(), "{a=1,list=[x,null]}");
}

#[test]
fn test_distinguished_mode_emits_array_keys() {
    let config = WalkConfig::default().with_distinguish_key_value(true);
    let walker = Walker::new(Pairs, config).unwrap();
    assert_eq!(walker.walk(&sample()).unwrap(), "{a=1,list=[0:x,1:null]}");
}

#[test]
fn test_combined_entry_override() {
    struct Upper;

    impl Handlers for Upper {
        fn string(&self, s: &str, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(s.to_string())
        }

        fn object_joiner(&self) -> &str {
            ";"
        }

        fn object_entry(
            &self,
            walker: &Walker<Self>,
            key: &str,
            value: &Value,
            iter_ct: usize,
            ctx: &Context<'_>,
        ) -> WalkResult<String> {
            let rendered = walker.delegate(value, ctx)?;
            Ok(format!("{}#{}={}", iter_ct, key.to_uppercase(), rendered))
        }
    }

    let walker = Walker::new(Upper, WalkConfig::default()).unwrap();
    let value = Value::object(vec![("a", Value::string("1")), ("b", Value::string("2"))]);
    assert_eq!(walker.walk(&value).unwrap(), "0#A=1;1#B=2");
}

#[test]
fn test_context_reports_position() {
    struct Positions;

    impl Handlers for Positions {
        fn string(&self, s: &str, ctx: &Context<'_>) -> WalkResult<String> {
            let key = ctx.key().map(|k| k.to_string()).unwrap_or_default();
            Ok(format!(
                "{}@{}/{}/{}",
                s,
                key,
                ctx.depth(),
                if ctx.parent_is_array() { "arr" } else { "obj" }
            ))
        }

        fn array_joiner(&self) -> &str {
            " "
        }
    }

    let walker = Walker::new(Positions, WalkConfig::default()).unwrap();
    let value = Value::object(vec![(
        "k",
        Value::array(vec![Value::string("p"), Value::string("q")]),
    )]);
    assert_eq!(walker.walk(&value).unwrap(), "p@0/2/arr q@1/2/arr");
    assert_eq!(walker.walk(&Value::string("r")).unwrap(), "r@/0/obj");
}

// ============================================================================
// Own and Inherited Keys
// ============================================================================

#[test]
fn test_inherited_object_keys() {
    let proto: Object = vec![("a", Value::number(9.0)), ("b", Value::number(2.0))]
        .into_iter()
        .collect();
    let mut own = Object::new().with_prototype(proto);
    own.insert("a", Value::number(1.0));
    let value = Value::Object(own);

    let walker = Walker::new(Pairs, WalkConfig::default()).unwrap();
    assert_eq!(walker.walk(&value).unwrap(), "{a=1}");

    let walker = Walker::new(Pairs, WalkConfig::default().with_iterate_own_only(false)).unwrap();
    assert_eq!(walker.walk(&value).unwrap(), "{a=1,b=2}");
}

#[test]
fn test_inherited_array_keys_are_names() {
    let proto: Object = vec![("extra", Value::string("e"))].into_iter().collect();
    let mut array = Array::new().with_prototype(proto);
    array.push(Value::string("x"));
    array.push(Value::string("y"));
    let value = Value::Array(array);

    let config = WalkConfig::default()
        .with_iterate_own_only(false)
        .with_distinguish_key_value(true);
    let walker = Walker::new(Pairs, config).unwrap();
    assert_eq!(walker.walk(&value).unwrap(), "[0:x,1:y,extra:e]");

    let keys: Vec<Key<'_>> = value
        .as_array()
        .unwrap()
        .enumerate(false)
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert!(keys.iter().all(|k| matches!(k, Key::Name(_))));
}

#[test]
fn test_iteration_switches() {
    let config = WalkConfig::default().with_iterate_arrays(false);
    let walker = Walker::new(Pairs, config).unwrap();
    assert_eq!(walker.walk(&sample()).unwrap(), "{a=1,list=[]}");

    let config = WalkConfig::default().with_iterate_objects(false);
    let walker = Walker::new(Pairs, config).unwrap();
    assert_eq!(walker.walk(&sample()).unwrap(), "{}");
}

// ============================================================================
// Dispatch Interception and Type Errors
// ============================================================================

#[test]
fn test_invoke_override_sees_every_dispatch() {
    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<(Kind, usize)>>,
    }

    impl Handlers for Recording {
        fn invoke(
            &self,
            walker: &Walker<Self>,
            kind: Kind,
            value: &Value,
            ctx: &Context<'_>,
        ) -> WalkResult<String> {
            self.seen.lock().unwrap().push((kind, ctx.depth()));
            walker.call_handler(kind, value, ctx)
        }

        fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(String::new())
        }

        fn number(&self, _n: f64, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(String::new())
        }

        fn string(&self, _s: &str, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(String::new())
        }
    }

    let walker = Walker::new(Recording::default(), WalkConfig::default()).unwrap();
    walker.walk(&sample()).unwrap();
    let seen = walker.handlers().seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            (Kind::Object, 0),
            (Kind::Number, 1),
            (Kind::Array, 1),
            (Kind::String, 2),
            (Kind::Null, 2),
        ]
    );
}

#[test]
fn test_type_error_policy_can_ignore() {
    #[derive(Default)]
    struct Lenient {
        ignored: AtomicUsize,
    }

    impl Handlers for Lenient {
        fn type_error(&self, kind: Kind, _value: &Value, _ctx: &Context<'_>) -> WalkResult<Kind> {
            Ok(match kind {
                Kind::NonFiniteNumber => Kind::Null,
                _ => Kind::Ignore,
            })
        }

        fn ignore(&self, _value: &Value, _ctx: &Context<'_>) -> WalkResult<()> {
            self.ignored.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn null(&self, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok("null".into())
        }

        fn number(&self, n: f64, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(n.to_string())
        }

        fn object_joiner(&self) -> &str {
            ","
        }

        fn object_key(&self, key: &str, _iter_ct: usize, _ctx: &Context<'_>) -> WalkResult<String> {
            Ok(format!("{}=", key))
        }
    }

    let value = Value::object(vec![
        ("u", Value::Undefined),
        ("n", Value::number(1.0)),
        ("f", Value::function("function () {}")),
        ("inf", Value::number(f64::INFINITY)),
    ]);
    let walker = Walker::new(Lenient::default(), WalkConfig::default()).unwrap();
    assert_eq!(walker.walk(&value).unwrap(), "n=1,inf=null");
    assert!(walker.handlers().ignored.load(Ordering::SeqCst) >= 2);
}

#[test]
fn test_missing_handler_names_kind() {
    let walker = Walker::new(Pairs, WalkConfig::default()).unwrap();
    let err = walker.walk(&Value::boolean(true)).unwrap_err();
    assert_eq!(err, WalkError::MissingHandler { kind: Kind::Boolean });
    assert!(err.to_string().contains("boolean"));
}

#[test]
fn test_depth_limit() {
    let mut value = Value::Null;
    for _ in 0..10 {
        value = Value::array(vec![value]);
    }
    let config = WalkConfig::default().with_max_depth(5);
    assert!(matches!(
        stringify(&value, &config),
        Err(WalkError::RecursionLimitExceeded { depth: 6, max_depth: 5 })
    ));
    assert!(stringify(&value, &WalkConfig::default()).is_ok());
}

#[test]
fn test_config_from_json() {
    let config = WalkConfig::from_json(r#"{"mode":"JavaScript","iterateOwnOnly":false}"#).unwrap();
    assert_eq!(config.mode, Mode::Extended);
    assert!(!config.iterate_own_only);

    assert!(matches!(
        WalkConfig::from_json(r#"{"mode":"Python"}"#),
        Err(WalkError::InvalidConfig { .. })
    ));
    assert!(matches!(
        WalkConfig::from_json(r#"{"maxDepth":0}"#),
        Err(WalkError::InvalidConfig { .. })
    ));
}

// ============================================================================
// Concurrent Reuse
// ============================================================================

#[test]
fn test_one_walker_many_threads() {
    let walker = Stringifier::walker(WalkConfig::default()).unwrap();
    let values: Vec<Value> = (0..16)
        .map(|i| {
            Value::object(vec![
                ("i", Value::number(i as f64)),
                ("items", Value::array((0..i).map(|j| Value::number(j as f64)).collect())),
            ])
        })
        .collect();
    let expected: Vec<String> = values.iter().map(|v| walker.walk(v).unwrap()).collect();

    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = values
            .iter()
            .map(|value| {
                let walker = &walker;
                scope.spawn(move || walker.walk(value).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

// ============================================================================
// Tree Walker
// ============================================================================

#[test]
fn test_tree_walker_pre_order() {
    let value = sample();
    let kinds: Vec<(Kind, usize)> = TreeWalker::new(&value, WalkConfig::default())
        .map(|visit| {
            let visit = visit.unwrap();
            (visit.kind, visit.depth())
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            (Kind::Object, 0),
            (Kind::Number, 1),
            (Kind::Array, 1),
            (Kind::String, 2),
            (Kind::Null, 2),
        ]
    );
}

#[test]
fn test_tree_walker_filter_and_reset() {
    let value = sample();
    let mut walker = TreeWalker::new(&value, WalkConfig::default())
        .with_filter(KindSet::of(&[Kind::String, Kind::Null]));
    let first: Vec<Kind> = walker.by_ref().map(|v| v.unwrap().kind).collect();
    assert_eq!(first, vec![Kind::String, Kind::Null]);
    assert!(walker.next().is_none());

    walker.reset();
    assert_eq!(walker.count(), 2);
}

#[test]
fn test_tree_walker_strict_rejection() {
    let value = Value::array(vec![
        Value::number(f64::NAN),
        Value::Undefined,
        Value::string("never reached"),
    ]);
    let visits: Vec<_> = TreeWalker::new(&value, WalkConfig::default()).collect();
    assert_eq!(visits.len(), 3);
    assert_eq!(visits[1].as_ref().unwrap().kind, Kind::Null);
    assert!(matches!(
        visits[2],
        Err(WalkError::KindRejected { kind: Kind::Undefined })
    ));

    let extended: Vec<Kind> = TreeWalker::new(&value, WalkConfig::extended())
        .map(|v| v.unwrap().kind)
        .collect();
    assert_eq!(
        extended,
        vec![Kind::Array, Kind::NonFiniteNumber, Kind::Undefined, Kind::String]
    );
}
