use anyhow::Result;
use ironcollect::testing::*;
use ironcollect::*;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn create_from_list_keeps_values_in_order() -> Result<()> {
    let c = collect([1, 2, 3]);
    assert_eq!(c.all(), vec![1, 2, 3]);
    assert_keys_equal(&c, [0, 1, 2]);
    assert!(c.is_list());
    Ok(())
}

#[test]
fn iteration_yields_sequential_keys() -> Result<()> {
    let c = collect([1, 2, 3, 4, 5, 6, 7, 8, 9]);
    for (key, value) in &c {
        assert_eq!(key.as_index().map(|k| k + 1), Some(i64::from(*value)));
    }
    Ok(())
}

#[test]
fn push_then_pop_returns_last_value() -> Result<()> {
    let mut c: Collection<i32> = collect!();
    c.append([1, 2, 3]);
    assert_collections_canonical_equal(&c, &collect([1, 2, 3]));

    let last = c.pop()?;
    assert_eq!(last, 3);
    assert_values_equal(&c, &[1, 2]);
    Ok(())
}

#[test]
fn pop_on_empty_collection_fails() {
    let mut c: Collection<i32> = Collection::new();
    assert_eq!(
        c.pop(),
        Err(CollectionError::EmptyContainer { op: "pop" })
    );
}

#[test]
fn pop_rewinds_next_index() -> Result<()> {
    let mut c = collect(["a", "b", "c"]);
    c.pop()?;
    c.push("d");
    assert_keys_equal(&c, [0, 1, 2]);
    assert_eq!(c[2], "d");
    Ok(())
}

#[test]
fn push_continues_after_highest_integer_key() -> Result<()> {
    let mut c = Collection::new();
    c.put(5, "five");
    c.put("name", "al");
    c.push("next");
    assert_eq!(c.get(6), Some(&"next"));
    Ok(())
}

#[test]
fn push_after_max_integer_key_is_refused() -> Result<()> {
    let mut c = Collection::new();
    c.put(i64::MAX, "max");
    assert!(!c.push("next"));
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(i64::MAX), Some(&"max"));

    c.put("name", "al");
    assert_eq!(c.get("name"), Some(&"al"));
    Ok(())
}

#[test]
fn push_never_overwrites_existing_keys() -> Result<()> {
    let mut c = Collection::new();
    c.put(i64::MIN, "min");
    c.put(i64::MAX, "max");
    assert!(!c.push("next"));
    assert_keys_equal(&c, [i64::MIN, i64::MAX]);
    assert_eq!(c.get(i64::MIN), Some(&"min"));
    Ok(())
}

#[test]
fn popping_the_max_key_frees_it_again() -> Result<()> {
    let mut c = Collection::new();
    c.put(i64::MAX, 'a');
    assert_eq!(c.pop()?, 'a');
    assert!(c.push('b'));
    assert_eq!(c.get(i64::MAX), Some(&'b'));
    Ok(())
}

#[test]
fn json_object_with_max_integer_key_loads() -> Result<()> {
    let mut c = Collection::from_json(json!({"9223372036854775807": "x", "a": "y"}));
    assert_eq!(c.get(i64::MAX), Some(&Value::from("x")));
    assert!(!c.push(Value::from("z")));
    assert_eq!(c.len(), 2);
    Ok(())
}

#[test]
fn numeric_string_keys_are_integer_keys() -> Result<()> {
    let mut c = Collection::new();
    c.put("7", 'x');
    assert_eq!(c.get(7), Some(&'x'));
    assert!(c.has(Key::Index(7)));

    c.put("07", 'y');
    assert_eq!(c.len(), 2);
    assert_eq!(c.get_or_fail("07")?, &'y');
    Ok(())
}

#[test]
fn put_replaces_in_place() -> Result<()> {
    let mut c = collect!["a" => 1, "b" => 2, "c" => 3];
    let old = c.put("b", 20);
    assert_eq!(old, Some(2));
    assert_keys_equal(&c, ["a", "b", "c"]);
    assert_values_equal(&c, &[1, 20, 3]);
    Ok(())
}

#[test]
fn from_pairs_keeps_first_position_of_duplicates() -> Result<()> {
    let c = Collection::from_pairs([("x", 1), ("y", 2), ("x", 3)]);
    assert_keys_equal(&c, ["x", "y"]);
    assert_eq!(c["x"], 3);
    Ok(())
}

#[test]
fn forget_and_pull_remove_by_key() -> Result<()> {
    let mut c = collect!["a" => 1, "b" => 2];
    assert_eq!(c.forget("a"), Some(1));
    assert_eq!(c.forget("a"), None);
    assert_eq!(c.pull("b")?, 2);
    assert!(c.is_empty());
    assert!(matches!(c.pull("b"), Err(CollectionError::NotFound { .. })));
    Ok(())
}

#[test]
fn shift_and_prepend_reindex_integer_keys() -> Result<()> {
    let mut c = collect([1, 2, 3]);
    assert_eq!(c.shift()?, 1);
    assert_keys_equal(&c, [0, 1]);

    c.prepend(0);
    assert_values_equal(&c, &[0, 2, 3]);
    assert_keys_equal(&c, [0, 1, 2]);

    let mut named = collect!["name" => 1];
    named.prepend(0);
    assert_keys_equal(&named, [Key::Index(0), Key::from("name")]);
    Ok(())
}

#[test]
fn shift_on_empty_collection_fails() {
    let mut c: Collection<u8> = Collection::new();
    assert!(matches!(c.shift(), Err(CollectionError::EmptyContainer { .. })));
}

#[test]
fn get_or_fail_reports_missing_key() {
    let c = collect([1]);
    assert!(matches!(c.get_or_fail(3), Err(CollectionError::NotFound { .. })));
}

#[test]
#[should_panic(expected = "no entry for key")]
fn index_panics_on_missing_key() {
    let c = collect([1]);
    let _ = c[5];
}

#[test]
fn structural_equality_compares_keys() -> Result<()> {
    let list = collect([1, 2]);
    let map = collect!["a" => 1, "b" => 2];
    assert_ne!(list, map);
    assert!(list.canonical_eq(&map));
    assert!(!collect([1, 1, 2]).canonical_eq(&collect([1, 2, 2])));
    Ok(())
}

#[test]
fn values_reindexes() -> Result<()> {
    let c = collect!["a" => 1, "b" => 2];
    assert_collections_equal(&c.values(), &collect([1, 2]));
    Ok(())
}

#[test]
fn build_from_btree_map() -> Result<()> {
    let mut m = BTreeMap::new();
    m.insert("b", 2);
    m.insert("a", 1);
    let c = Collection::from(m);
    assert_keys_equal(&c, ["a", "b"]);
    Ok(())
}

#[test]
fn list_collections_serialize_as_arrays() -> Result<()> {
    assert_eq!(serde_json::to_string(&collect([1, 2, 3]))?, "[1,2,3]");
    assert_eq!(
        serde_json::to_string(&collect!["name" => "al"])?,
        r#"{"name":"al"}"#
    );

    let sparse = collect([1, 2, 3]).filter(|v, _| *v != 2);
    assert_eq!(sparse.to_json()?, json!({"0": 1, "2": 3}));
    Ok(())
}

#[test]
fn deserialize_arrays_and_objects() -> Result<()> {
    let list: Collection<i32> = serde_json::from_str("[4, 5]")?;
    assert_collections_equal(&list, &collect([4, 5]));

    let map: Collection<i32> = serde_json::from_str(r#"{"b": 2, "a": 1, "3": 9}"#)?;
    assert_keys_equal(&map, [Key::from("b"), Key::from("a"), Key::Index(3)]);
    Ok(())
}

#[test]
fn json_records_become_nested_collections() -> Result<()> {
    let people = Collection::from_json(json!([{"name": "al"}, {"name": "cuy"}]));
    let names = people.pluck("name");
    assert_values_equal(&names, &[Value::from("al"), Value::from("cuy")]);
    assert_eq!(Value::from(people.clone()).to_json(), json!([{"name": "al"}, {"name": "cuy"}]));
    Ok(())
}

#[test]
fn extend_pushes_values() -> Result<()> {
    let mut c = collect([1]);
    c.extend(vec![2, 3]);
    assert_values_equal(&c, &[1, 2, 3]);
    Ok(())
}
