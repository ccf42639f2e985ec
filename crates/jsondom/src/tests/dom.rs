//! Structural operations on the tree: copy, move, swap, equality, release,
//! and the conversion/indexing surface.

use alloc::string::{String, ToString};

use crate::{Array, Object, Value, ValueKind, json, parse};

#[test]
fn kind_reports_the_active_variant() {
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(json!(true).kind(), ValueKind::Boolean);
    assert_eq!(json!(1.5).kind(), ValueKind::Number);
    assert_eq!(json!("x").kind(), ValueKind::String);
    assert_eq!(json!([]).kind(), ValueKind::Array);
    assert_eq!(json!({}).kind(), ValueKind::Object);
}

#[test]
fn default_and_reset_are_null() {
    assert_eq!(Value::default(), Value::Null);

    let mut value = json!({"a": [1, 2, 3]});
    value.reset();
    assert_eq!(value, Value::Null);

    // Resetting a Null value is a no-op.
    value.reset();
    assert_eq!(value, Value::Null);
}

#[test]
fn checked_accessors_respect_the_tag() {
    let value = json!(true);
    assert_eq!(value.as_bool(), Some(true));
    assert_eq!(value.as_f64(), None);
    assert_eq!(value.as_str(), None);

    let mut value = json!([1]);
    assert!(value.as_array().is_some());
    assert!(value.as_object().is_none());
    value.as_array_mut().unwrap().push(json!(2));
    assert_eq!(value, json!([1, 2]));
}

#[test]
fn clone_is_a_deep_independent_copy() {
    let source = json!({"list": [1, 2], "name": "src"});
    let mut copy = source.clone();
    assert_eq!(copy, source);

    copy["list"].as_array_mut().unwrap().push(json!(3));
    copy["name"] = json!("dst");
    assert_eq!(source, json!({"list": [1, 2], "name": "src"}));
    assert_eq!(copy, json!({"list": [1, 2, 3], "name": "dst"}));
}

#[test]
fn clone_from_replaces_previous_content() {
    let source = json!([1, 2]);
    let mut destination = json!({"old": true});
    destination.clone_from(&source);
    assert_eq!(destination, source);
}

#[test]
fn take_moves_ownership_and_leaves_null() {
    let mut slot = json!({"k": "v"});
    let taken = slot.take();
    assert_eq!(taken, json!({"k": "v"}));
    assert_eq!(slot, Value::Null);

    // The drained source is ready for reuse.
    slot = json!(1);
    assert_eq!(slot, json!(1));
}

#[test]
fn swap_exchanges_complete_state() {
    let mut left = json!([1, 2]);
    let mut right = json!("text");
    left.swap(&mut right);
    assert_eq!(left, json!("text"));
    assert_eq!(right, json!([1, 2]));

    // Swap is its own inverse.
    left.swap(&mut right);
    assert_eq!(left, json!([1, 2]));
    assert_eq!(right, json!("text"));
}

#[test]
fn assignment_releases_the_previous_tree() {
    let mut value = json!({"big": [[[1], [2]], [[3]]]});
    assert!(value.is_object());
    value = json!(false);
    assert_eq!(value, json!(false));
}

#[test]
fn number_equality_is_ieee_754() {
    assert_eq!(json!(1.5), json!(1.5));
    // Negative zero equals positive zero under IEEE-754 comparison.
    assert_eq!(json!(-0.0), json!(0.0));
    // NaN never equals itself, and that propagates through containers.
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    let nan_array = json!([f64::NAN]);
    assert_ne!(nan_array, nan_array.clone());
}

#[test]
fn equality_distinguishes_tags_and_content() {
    assert_ne!(json!(null), json!(false));
    assert_ne!(json!(0), json!(false));
    assert_ne!(json!("1"), json!(1));
    assert_ne!(json!([1, 2]), json!([2, 1]));
    assert_ne!(json!([1, 2]), json!([1, 2, 3]));
    // Array equality is ordered; object equality is not.
    assert_eq!(
        json!({"a": 1, "b": 2}),
        json!({"b": 2, "a": 1})
    );
    assert_ne!(json!({"a": 1}), json!({"a": 2}));
    assert_ne!(json!({"a": 1}), json!({"a": 1, "b": 2}));
}

#[test]
fn indexing_walks_nested_containers() {
    let mut doc = json!({"users": [{"name": "ada"}, {"name": "grace"}]});
    assert_eq!(doc["users"][1]["name"], json!("grace"));

    doc["users"][0]["name"] = json!("alan");
    assert_eq!(doc["users"][0]["name"].as_str(), Some("alan"));
}

#[test]
#[should_panic(expected = "cannot index a non-array value")]
fn numeric_index_on_scalar_is_a_contract_violation() {
    let value = json!(1);
    let _ = &value[0];
}

#[test]
#[should_panic(expected = "no member with key")]
fn missing_key_index_is_a_contract_violation() {
    let value = json!({"a": 1});
    let _ = &value["b"];
}

#[test]
fn conversions_cover_the_primitive_surface() {
    assert_eq!(Value::from(true), json!(true));
    assert_eq!(Value::from(2u8), Value::Number(2.0));
    assert_eq!(Value::from(-3i64), Value::Number(-3.0));
    assert_eq!(Value::from(1.5f32), Value::Number(1.5));
    assert_eq!(Value::from("text"), Value::String("text".to_string()));
    assert_eq!(Value::from(String::from("text")), json!("text"));
    assert_eq!(
        Value::from(crate::vec![json!(1), json!(2)]),
        json!([1, 2])
    );
    assert_eq!(Value::from(Array::new()), json!([]));
    assert_eq!(Value::from(Object::new()), json!({}));
}

#[test]
fn json_macro_collapses_duplicate_literal_keys() {
    // The macro inserts through `Object::entry`, so a repeated key reassigns
    // the first slot instead of appending.
    let value = json!({"a": 1, "a": 2});
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("a"), Some(&json!(2)));
}

#[test]
fn json_macro_interpolates_expressions() {
    let flag = 1 == 2;
    let name = String::from("k");
    let value = json!({
        "flag": flag,
        (name.as_str()): [1, flag, null],
    });
    assert_eq!(value["k"][1], json!(false));
    assert_eq!(value["flag"], json!(false));
}

#[test]
fn parsed_and_constructed_trees_compare_equal() {
    let parsed = parse(r#"{"a":[1,true,"x"],"b":null}"#).unwrap();
    let built = json!({"a": [1, true, "x"], "b": null});
    assert_eq!(parsed, built);
}

#[test]
fn member_into_parts_round_trips() {
    let mut object = Object::new();
    object.push("k", json!(1));
    let member = object.remove(0);
    assert_eq!(member.key(), "k");
    let (key, value) = member.into_parts();
    assert_eq!(key, "k");
    assert_eq!(value, json!(1));
}

#[test]
fn value_array_ops_through_the_tree() {
    let mut value = json!([0, 1, 2, 3]);
    {
        let array = value.as_array_mut().unwrap();
        array.erase(1, 2);
        array.insert(1, json!(9));
        assert_eq!(array.pop(), Some(json!(3)));
    }
    assert_eq!(value, json!([0, 9]));
}
