//! Round-trip properties over arbitrary trees.

use quickcheck::QuickCheck;

use crate::{Value, parse, stringify};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Property: serializing any tree built without contract violations and
/// parsing the result yields an equal tree.
#[test]
fn parse_inverts_stringify() {
    fn prop(value: Value) -> bool {
        let text = stringify(&value);
        match parse(&text) {
            Ok(parsed) => parsed == value,
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: serialization is a fixed point — re-parsing and re-serializing
/// changes nothing.
#[test]
fn stringify_is_stable() {
    fn prop(value: Value) -> bool {
        let text = stringify(&value);
        match parse(&text) {
            Ok(parsed) => stringify(&parsed) == text,
            Err(_) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: deep copies are equal and fully independent of their source.
#[test]
fn clones_are_equal_and_independent() {
    fn prop(value: Value) -> bool {
        let mut copy = value.clone();
        if copy != value {
            return false;
        }
        copy.reset();
        copy == Value::Null && stringify(&value) == stringify(&value.clone())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Value) -> bool);
}
