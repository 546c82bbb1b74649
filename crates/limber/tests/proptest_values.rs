//! Property-based tests over generated value trees.

use limber::{Json, Object, Value};
use proptest::prelude::*;

/// Scalar leaves whose numbers are finite doubles.
fn any_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::boolean),
        prop::num::f64::NORMAL.prop_map(Value::number),
        "[a-z0-9 ]{0,12}".prop_map(Value::text),
    ]
}

/// Shallow trees: an object of arrays of leaves, enough nesting to exercise
/// every variant without unbounded recursion.
fn any_tree() -> impl Strategy<Value = Value> {
    prop::collection::hash_map(
        "[a-z]{1,8}",
        prop::collection::vec(any_leaf(), 0..4),
        0..6,
    )
    .prop_map(|map| {
        Value::Object(
            map.into_iter()
                .map(|(key, items)| (key, Value::from(items)))
                .collect::<Object>(),
        )
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(tree in any_tree()) {
        let json = Json::from(tree);
        prop_assert_eq!(json.clone(), json);
    }

    #[test]
    fn round_trip_preserves_the_tree(tree in any_tree()) {
        let json = Json::from(tree);
        let bytes = json.to_bytes().expect("finite trees encode");
        prop_assert_eq!(Json::from_bytes(&bytes), json);
    }

    #[test]
    fn set_then_get_returns_the_written_value(tree in any_tree(), leaf in any_leaf()) {
        let mut json = Json::from(tree);
        let written = Json::from(leaf);
        json.set_key("probe", written.clone());
        prop_assert_eq!(json.get_key("probe"), written);
    }

    #[test]
    fn array_iteration_matches_length(items in prop::collection::vec(any_leaf(), 0..8)) {
        let json = Json::from(Value::from(items.clone()));
        let collected: Vec<_> = json.iter().collect();
        prop_assert_eq!(collected.len(), items.len());
        for (item, expected) in collected.iter().zip(items) {
            prop_assert_eq!(item.clone(), Json::from(expected));
        }
    }

    #[test]
    fn truncation_moves_toward_zero(n in -1_000_000.0f64..1_000_000.0) {
        let truncated = Json::from(n).as_i64().expect("number projects");
        prop_assert_eq!(truncated, n.trunc() as i64);
    }

    #[test]
    fn integers_within_2_pow_53_survive_the_double_view(n in -(1i64 << 53)..(1i64 << 53)) {
        let json = Json::from_i64(n);
        prop_assert_eq!(json.as_i64(), Some(n));
    }

    #[test]
    fn failed_accessors_project_nothing(message in "[ -~]{0,20}") {
        let failed = Json::from_error(message.clone());
        prop_assert_eq!(failed.error_message(), Some(message.as_str()));
        prop_assert!(failed.as_str().is_none());
        prop_assert!(failed.as_f64().is_none());
        prop_assert!(failed.as_bool().is_none());
        prop_assert!(failed.as_object().is_none());
        prop_assert!(failed.iter().next().is_none());
    }
}
