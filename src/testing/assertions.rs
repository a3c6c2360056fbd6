//! Assertion functions for testing collection outputs.
//!
//! Failures panic with both collections printed in full, so a failing test
//! shows what was produced next to what was expected.

use crate::{Collection, Key};
use std::fmt::Debug;

/// Assert that two collections are structurally equal: same length, same
/// keys in the same order, equal values.
///
/// # Panics
///
/// Panics on the first differing entry, or if the lengths differ.
///
/// # Example
///
/// ```
/// use ironcollect::collect;
/// use ironcollect::testing::assert_collections_equal;
///
/// let actual = collect([1, 2, 3]).map(|x| x + 1);
/// assert_collections_equal(&actual, &collect([2, 3, 4]));
/// ```
pub fn assert_collections_equal<V: Debug + PartialEq>(
    actual: &Collection<V>,
    expected: &Collection<V>,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "Collection mismatch at position {i}:\n  Expected: {ek:?} => {ev:?}\n  Actual: {ak:?} => {av:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same values, ignoring keys and order.
///
/// Duplicates count: `[1, 1, 2]` is not canonically equal to `[1, 2, 2]`.
///
/// # Panics
///
/// Panics if the value multisets differ.
///
/// # Example
///
/// ```
/// use ironcollect::collect;
/// use ironcollect::testing::assert_collections_canonical_equal;
///
/// assert_collections_canonical_equal(&collect([3, 1, 2]), &collect([1, 2, 3]));
/// ```
pub fn assert_collections_canonical_equal<V: Debug + PartialEq>(
    actual: &Collection<V>,
    expected: &Collection<V>,
) {
    assert!(
        actual.canonical_eq(expected),
        "Collection content mismatch (order and keys ignored):\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that the values of a collection, in order, equal `expected`.
/// Keys are ignored.
///
/// # Panics
///
/// Panics if the lengths differ or any value differs.
pub fn assert_values_equal<V: Debug + PartialEq>(actual: &Collection<V>, expected: &[V]) {
    let values: Vec<&V> = actual.values_iter().collect();
    let expected: Vec<&V> = expected.iter().collect();
    assert_eq!(
        values.len(),
        expected.len(),
        "Value count mismatch:\n  Expected: {expected:?}\n  Actual: {values:?}"
    );
    for (i, (a, e)) in values.iter().zip(&expected).enumerate() {
        assert_eq!(
            a, e,
            "Value mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {values:?}"
        );
    }
}

/// Assert that the keys of a collection, in order, equal `expected`.
///
/// # Panics
///
/// Panics if the key sequences differ.
///
/// # Example
///
/// ```
/// use ironcollect::collect;
/// use ironcollect::testing::assert_keys_equal;
///
/// let odd = collect([1, 2, 3, 4]).filter(|v, _| v % 2 == 1);
/// assert_keys_equal(&odd, [0, 2]);
/// ```
pub fn assert_keys_equal<V, K, I>(actual: &Collection<V>, expected: I)
where
    V: Debug,
    K: Into<Key>,
    I: IntoIterator<Item = K>,
{
    let keys: Vec<&Key> = actual.keys().collect();
    let expected: Vec<Key> = expected.into_iter().map(Into::into).collect();
    assert!(
        keys.iter().copied().eq(expected.iter()),
        "Key mismatch:\n  Expected: {expected:?}\n  Actual: {keys:?}\n  Collection: {actual:?}"
    );
}

/// Assert that every value satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first value that fails the predicate.
pub fn assert_all<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V) -> bool) {
    for (k, v) in collection {
        assert!(
            predicate(v),
            "Predicate failed for entry {k:?}:\n  Value: {v:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one value satisfies `predicate`.
///
/// # Panics
///
/// Panics if no value satisfies the predicate.
pub fn assert_any<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V) -> bool) {
    assert!(
        collection.values_iter().any(predicate),
        "No value satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no value satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first value that satisfies the predicate.
pub fn assert_none<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V) -> bool) {
    if let Some((k, v)) = collection.iter().find(|(_, v)| predicate(v)) {
        panic!("Predicate unexpectedly held for entry {k:?}:\n  Value: {v:?}\n  Collection: {collection:?}");
    }
}
