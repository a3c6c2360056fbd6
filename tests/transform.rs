use anyhow::Result;
use ironcollect::testing::*;
use ironcollect::*;
use serde_json::json;

#[test]
fn map_doubles_and_keeps_keys() -> Result<()> {
    let c = collect!["a" => 1, "b" => 2, "c" => 3];
    let doubled = c.map(|x| x * 2);
    assert_collections_equal(&doubled, &collect!["a" => 2, "b" => 4, "c" => 6]);
    Ok(())
}

#[test]
fn map_composition_equals_composed_map() -> Result<()> {
    let c = collect([3, -1, 4, 1, -5, 9]);
    let f = |x: &i32| x * 3;
    let g = |x: &i32| x - 7;
    let chained = c.map(f).map(g);
    let composed = c.map(|x| g(&f(x)));
    assert_collections_equal(&chained, &composed);
    Ok(())
}

#[test]
fn map_into_builds_people() -> Result<()> {
    let people: Collection<Person> = collect(["al"]).map_into();
    assert_values_equal(&people, &[Person::new("al")]);
    Ok(())
}

#[test]
fn map_spread_over_pairs() -> Result<()> {
    let people = sample_name_pairs().map_spread(|first, last| Person::new(format!("{first} {last}")));
    assert_values_equal(&people, &[Person::new("al syam"), Person::new("bur han")]);
    Ok(())
}

#[test]
fn map_spread_over_triples_and_vectors() -> Result<()> {
    let sums = collect([(1, 2, 3), (4, 5, 6)]).map_spread(|a, b, c| a + b + c);
    assert_values_equal(&sums, &[6, 15]);

    let lens = collect([vec![1, 2], vec![], vec![3]]).map_spread(<[i32]>::len);
    assert_values_equal(&lens, &[2, 0, 1]);
    Ok(())
}

#[test]
fn map_spread_over_json_rows() -> Result<()> {
    let rows = Collection::from_json(json!([["al", "syam"], ["bur", "han"]]));
    let full = rows.map_spread(|parts| {
        parts
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    });
    assert_values_equal(&full, &["al syam".to_string(), "bur han".to_string()]);
    Ok(())
}

#[test]
fn map_to_groups_collects_names_per_department() -> Result<()> {
    let groups = sample_people().map_to_groups(|person, _| {
        let department = person.get("department").map(ToString::to_string).unwrap_or_default();
        (department, person.get("name").cloned().unwrap_or_default())
    });

    let expected = Collection::from_pairs([
        ("IT", collect([Value::from("al"), Value::from("cuy")])),
        ("HR", collect([Value::from("syam")])),
    ]);
    assert_collections_equal(&groups, &expected);
    Ok(())
}

#[test]
fn map_with_keys_rekeys_entries() -> Result<()> {
    let c = collect(["al", "syam"]).map_with_keys(|name, key| (*name, key.clone()));
    assert_keys_equal(&c, ["al", "syam"]);
    assert_eq!(c["syam"], Key::Index(1));
    Ok(())
}

#[test]
fn flat_map_concatenates_hobbies() -> Result<()> {
    let hobbies = sample_hobbies().flat_map(|person, _| {
        person
            .get("hobbies")
            .and_then(Value::as_collection)
            .map(Collection::all)
            .unwrap_or_default()
    });
    let expected: Collection<Value> = ["coding", "gaming", "tennis", "balet"]
        .into_iter()
        .map(Value::from)
        .collect();
    assert_collections_equal(&hobbies, &expected);
    Ok(())
}

#[test]
fn flat_map_reindexes() -> Result<()> {
    let c = collect!["x" => 2, "y" => 1].flat_map(|n, _| vec![*n; *n]);
    assert_collections_equal(&c, &collect([2, 2, 1]));
    Ok(())
}

#[test]
fn collapse_vectors_and_collections() -> Result<()> {
    let vectors = collect([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    assert_collections_canonical_equal(&vectors.collapse(), &collect(1..=9));

    let nested = collect!["a" => collect([1, 2]), "b" => collect!["k" => 3]];
    assert_collections_equal(&nested.collapse(), &collect([1, 2, 3]));
    Ok(())
}

#[test]
fn collapse_values_drops_scalars() -> Result<()> {
    let mixed = Collection::from_json(json!([[1, 2], 3, {"a": 4}]));
    assert_values_equal(&mixed.collapse(), &[Value::from(1), Value::from(2), Value::from(4)]);
    Ok(())
}

#[test]
fn flatten_respects_depth() -> Result<()> {
    let deep = Collection::from_json(json!([1, [2, [3, [4]]]]));
    assert_values_equal(
        &deep.flatten(),
        &[Value::from(1), Value::from(2), Value::from(3), Value::from(4)],
    );

    let one_level = deep.flatten_depth(1);
    assert_eq!(one_level.len(), 3);
    assert_eq!(one_level[2], Value::from(json!([3, [4]])));
    Ok(())
}

#[test]
fn pipe_hands_over_whole_collection() -> Result<()> {
    let total = collect([1, 2, 3]).pipe(|c| c.sum().map(|s| s * 10))?;
    assert_eq!(total, 60);
    Ok(())
}

#[test]
fn try_map_stops_at_first_error() -> Result<()> {
    let parsed = collect!["a" => "1", "b" => "2"].try_map(|s| s.parse::<u32>())?;
    assert_collections_equal(&parsed, &collect!["a" => 1, "b" => 2]);

    let mut calls = 0;
    let failed = collect(["1", "x", "3"]).try_map(|s| {
        calls += 1;
        s.parse::<u32>()
    });
    assert!(failed.is_err());
    assert_eq!(calls, 2);
    Ok(())
}

#[test]
fn try_fold_propagates_callback_error() -> Result<()> {
    let sum: std::result::Result<i32, String> =
        collect([1, 2, 3]).try_fold(0, |acc, v, _| Ok(acc + v));
    assert_eq!(sum, Ok(6));

    let overflow = collect([1, 2, 3]).try_fold(0, |acc, v, key| {
        if *v == 2 {
            Err(format!("rejected {key}"))
        } else {
            Ok(acc + v)
        }
    });
    assert_eq!(overflow, Err("rejected 1".to_string()));
    Ok(())
}
