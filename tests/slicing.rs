use anyhow::Result;
use ironcollect::testing::*;
use ironcollect::*;

#[test]
fn take_and_skip_reconstruct_the_list() -> Result<()> {
    let c = collect([4, 8, 15, 16, 23, 42]);
    for n in 0..=c.len() {
        let rebuilt = c.take(n).concat(&c.skip(n));
        assert_collections_equal(&rebuilt, &c);
    }
    Ok(())
}

#[test]
fn take_and_skip_clamp_to_length() -> Result<()> {
    let c = collect([1, 2, 3]);
    assert_eq!(c.take(10), c);
    assert!(c.skip(10).is_empty());
    assert!(c.take(0).is_empty());
    Ok(())
}

#[test]
fn take_and_skip_keep_keys() -> Result<()> {
    let c = collect(["a", "b", "c", "d"]);
    assert_keys_equal(&c.skip(2), [2, 3]);
    assert_keys_equal(&c.take_last(1), [3]);
    assert_values_equal(&c.take_last(2), &["c", "d"]);
    Ok(())
}

#[test]
fn slice_offsets_and_lengths() -> Result<()> {
    let c = collect([1, 2, 3, 4, 5]);
    assert_values_equal(&c.slice(2, None), &[3, 4, 5]);
    assert_values_equal(&c.slice(1, Some(3)), &[2, 3, 4]);
    assert_values_equal(&c.slice(-2, None), &[4, 5]);
    assert_values_equal(&c.slice(-3, Some(1)), &[3]);
    assert_values_equal(&c.slice(0, Some(-2)), &[1, 2, 3]);
    assert!(c.slice(4, Some(-3)).is_empty());
    assert!(c.slice(9, None).is_empty());
    assert_values_equal(&c.slice(-9, Some(2)), &[1, 2]);
    assert_keys_equal(&c.slice(3, None), [3, 4]);
    Ok(())
}

#[test]
fn take_while_and_take_until() -> Result<()> {
    let c = collect([1, 2, 3, 10, 1]);
    assert_values_equal(&c.take_while(|v, _| *v < 3), &[1, 2]);
    assert_values_equal(&c.take_until(|v, _| *v >= 10), &[1, 2, 3]);
    assert!(c.take_while(|_, _| false).is_empty());
    Ok(())
}

#[test]
fn skip_while_and_skip_until() -> Result<()> {
    let c = collect([1, 2, 3, 10, 1]);
    let rest = c.skip_while(|v, _| *v < 3);
    assert_values_equal(&rest, &[3, 10, 1]);
    assert_keys_equal(&rest, [2, 3, 4]);
    assert_values_equal(&c.skip_until(|v, _| *v == 10), &[10, 1]);
    assert!(c.skip_until(|_, _| false).is_empty());
    Ok(())
}

#[test]
fn predicates_see_keys() -> Result<()> {
    let c = collect!["a" => 1, "b" => 2, "stop" => 3, "c" => 4];
    let head = c.take_until(|_, k| k == &Key::from("stop"));
    assert_keys_equal(&head, ["a", "b"]);
    Ok(())
}
