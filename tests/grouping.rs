use anyhow::Result;
use ironcollect::testing::*;
use ironcollect::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn group_by_department() -> Result<()> {
    let groups = sample_people().group_by_field("department")?;

    assert_keys_equal(&groups, ["IT", "HR"]);
    assert_eq!(groups["IT"].pluck("name").all(), vec![Value::from("al"), Value::from("cuy")]);
    assert_eq!(groups["HR"].pluck("name").all(), vec![Value::from("syam")]);
    assert_keys_equal(&groups["IT"], [0, 1]);
    Ok(())
}

#[test]
fn group_by_closure_on_plain_values() -> Result<()> {
    let words = collect(["apple", "avocado", "banana", "blueberry", "cherry"]);
    let by_letter = words.group_by(|w, _| w.chars().next().unwrap_or_default());
    assert_keys_equal(&by_letter, ['a', 'b', 'c']);
    assert_values_equal(&by_letter['b'], &["banana", "blueberry"]);
    Ok(())
}

#[test]
fn group_by_field_on_maps() -> Result<()> {
    let rows: Vec<HashMap<String, String>> = vec![
        HashMap::from([("kind".to_string(), "x".to_string())]),
        HashMap::from([("kind".to_string(), "y".to_string())]),
        HashMap::from([("kind".to_string(), "x".to_string())]),
    ];
    let groups = collect(rows).group_by_field("kind")?;
    assert_eq!(groups["x"].len(), 2);
    assert_eq!(groups["y"].len(), 1);
    Ok(())
}

#[test]
fn group_by_field_missing_field_is_not_found() {
    let people = sample_people();
    assert!(matches!(
        people.group_by_field("salary"),
        Err(CollectionError::NotFound { .. })
    ));
}

#[test]
fn group_by_field_rejects_unkeyable_values() {
    let rows = Collection::from_json(json!([{"score": 1.5}, {"score": 2.5}]));
    assert!(matches!(
        rows.group_by_field("score"),
        Err(CollectionError::InvalidArgument { .. })
    ));
}

#[test]
fn key_by_and_count_by() -> Result<()> {
    let employees = sample_employees();
    let by_name = employees.key_by(|e, _| e.get("name").map(ToString::to_string).unwrap_or_default());
    assert_eq!(by_name["cuy"].get("salary"), Some(&Value::from(72_000)));

    let per_department = employees.count_by(|e, _| e.get("department").map(ToString::to_string).unwrap_or_default());
    assert_collections_equal(&per_department, &collect!["IT" => 3, "HR" => 2, "Sales" => 1]);
    Ok(())
}

#[test]
fn pluck_skips_records_without_the_field() -> Result<()> {
    let rows = Collection::from_json(json!([{"a": 1}, {"b": 2}, {"a": 3}]));
    assert_values_equal(&rows.pluck("a"), &[Value::from(1), Value::from(3)]);
    Ok(())
}

#[test]
fn chunk_one_to_ten_by_three() -> Result<()> {
    let chunks = collect(1..=10).chunk(3)?;
    let shapes: Vec<Vec<i32>> = chunks.values_iter().map(Collection::all).collect();
    assert_eq!(shapes, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
    assert_keys_equal(&chunks, [0, 1, 2, 3]);
    assert_keys_equal(&chunks[1], [3, 4, 5]);
    Ok(())
}

#[test]
fn chunk_size_zero_is_invalid() {
    assert!(matches!(
        collect([1, 2]).chunk(0),
        Err(CollectionError::InvalidArgument { .. })
    ));
}

#[test]
fn chunk_of_empty_collection_is_empty() -> Result<()> {
    assert!(Collection::<u8>::new().chunk(4)?.is_empty());
    Ok(())
}

#[test]
fn sliding_windows() -> Result<()> {
    let windows = collect(1..=5).sliding(3, 1)?;
    let shapes: Vec<Vec<i32>> = windows.values_iter().map(Collection::all).collect();
    assert_eq!(shapes, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);

    let stepped = collect(1..=6).sliding(2, 2)?;
    assert_eq!(stepped.len(), 3);

    assert!(collect([1]).sliding(2, 1)?.is_empty());
    assert!(collect([1]).sliding(1, 0).is_err());
    Ok(())
}
