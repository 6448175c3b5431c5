use std::collections::BTreeMap;

use keywise::keyed::ValueMap;
use keywise::traverse::Traverse;
use keywise::value::Value;

fn setup() -> ValueMap<&'static str> {
    let mut container = ValueMap::default();
    container.insert("a", Value::Int(1));
    container.insert("b", Value::Int(2));
    container.insert("c", Value::from("gamma"));
    container
}

#[test]
fn each_visits_every_entry_exactly_once() {
    let container = setup();
    let mut seen = Vec::new();
    container.each(|key, _value| seen.push(*key));
    assert_eq!(seen.len(), container.len());
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c"], "each distinct key once");
}

#[test]
fn each_on_empty_container_does_nothing() {
    let container: ValueMap<&str> = ValueMap::default();
    let mut visits = 0;
    container.each(|_key, _value| visits += 1);
    assert_eq!(visits, 0);
}

#[test]
fn map_entries_output_length_equals_entry_count() {
    let container = setup();
    let rendered = container.map_entries(|key, value| format!("{}={}", key, value));
    assert_eq!(rendered.len(), container.len());
}

#[test]
fn map_entries_applies_transform_in_traversal_order() {
    let container = setup();
    let keys = container.map_entries(|key, _value| *key);
    let rendered = container.map_entries(|key, value| format!("{}={}", key, value));
    // both traversals walk the same unmodified instance, so they must agree
    for (key, line) in keys.iter().zip(rendered.iter()) {
        assert!(line.starts_with(key), "expected {line} to begin with {key}");
    }
}

#[test]
fn btreemap_traversal_is_ascending_key_order() {
    let mut container = BTreeMap::new();
    container.insert("b", 2);
    container.insert("a", 1);
    container.insert("c", 3);
    assert_eq!(container.map_entries(|key, _value| *key), vec!["a", "b", "c"]);
}

#[test]
fn reduce_on_empty_container_returns_initial_unchanged() {
    let container: ValueMap<&str> = ValueMap::default();
    let result = container.reduce(42, |current, _key, _value| current + 1);
    assert_eq!(result, 42);
}

#[test]
fn reduce_sums_integer_values() {
    let mut container: ValueMap<&str> = ValueMap::default();
    container.insert("a", Value::Int(1));
    container.insert("b", Value::Int(2));
    let sum = container.reduce(0_i64, |current, _key, value| match value {
        Value::Int(i) => current + i,
        _ => current,
    });
    assert_eq!(sum, 3);
}

#[test]
fn reduce_with_non_commutative_reducer_is_stable_per_instance() {
    let container = setup();
    let concat = |current: String, key: &&str, value: &Value| format!("{current}|{key}:{value}");
    let first = container.reduce(String::new(), concat);
    let second = container.reduce(String::new(), concat);
    assert_eq!(
        first, second,
        "traversal order must be consistent across calls on an unmodified instance"
    );
}
