//! The ordered keyed container at the heart of ironcollect.
//!
//! A [`Collection<V>`] is a sequence of `(Key, V)` entries with:
//! - **unique keys** -- inserting an existing key replaces the value in place;
//! - **stable order** -- iteration follows insertion order unless an
//!   operation explicitly re-orders;
//! - **mixed list/map use** -- entries appended without a key receive the next
//!   sequential integer index, explicit keys may be names or integers.
//!
//! Pipeline operations (see the [`helpers`](crate::helpers) module) borrow the
//! receiver and return a *new* collection. Only the handful of mutators
//! defined here ([`push`](Collection::push), [`append`](Collection::append),
//! [`pop`](Collection::pop), [`shift`](Collection::shift),
//! [`prepend`](Collection::prepend), [`put`](Collection::put),
//! [`forget`](Collection::forget)) change the receiver, and they hand back the
//! affected value directly.

use crate::error::{CollectionError, Result};
use crate::key::Key;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Index;

/// Ordered keyed container.
#[derive(Clone)]
pub struct Collection<V> {
    entries: Vec<(Key, V)>,
    positions: HashMap<Key, usize>,
    /// Key the next `push` uses; `None` once an `i64::MAX` key was taken.
    next_index: Option<i64>,
}

/// Create a list-like [`Collection`] from any iterable.
///
/// Values receive sequential integer keys starting at 0.
///
/// ```
/// use ironcollect::collect;
///
/// let c = collect([1, 2, 3]);
/// assert_eq!(c.all(), vec![1, 2, 3]);
/// ```
pub fn collect<V, I>(items: I) -> Collection<V>
where
    I: IntoIterator<Item = V>,
{
    items.into_iter().collect()
}

/// Build a [`Collection`] literal.
///
/// ```
/// use ironcollect::{collect, Key};
///
/// let list = collect![1, 2, 3];
/// assert_eq!(list.len(), 3);
///
/// let map = collect!["name" => "al", "department" => "IT"];
/// assert_eq!(map.get("department"), Some(&"IT"));
/// ```
#[macro_export]
macro_rules! collect {
    () => {
        $crate::Collection::new()
    };
    ($($k:expr => $v:expr),+ $(,)?) => {
        $crate::Collection::from_pairs([$(($k, $v)),+])
    };
    ($($v:expr),+ $(,)?) => {
        $crate::Collection::from(vec![$($v),+])
    };
}

impl<V> Collection<V> {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            next_index: Some(0),
        }
    }

    /// Create a collection from key/value pairs.
    ///
    /// A repeated key overwrites the earlier value but keeps the earlier
    /// position.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut c = Self::new();
        for (k, v) in pairs {
            c.put(k, v);
        }
        c
    }

    /// Build from entries whose keys are already known to be unique.
    pub(crate) fn from_unique_entries(entries: Vec<(Key, V)>) -> Self {
        let mut c = Self {
            entries,
            positions: HashMap::new(),
            next_index: Some(0),
        };
        c.rebuild_positions();
        c.next_index = match c.entries.iter().filter_map(|(k, _)| k.as_index()).max() {
            Some(max) => max.checked_add(1).map(|n| n.max(0)),
            None => Some(0),
        };
        c
    }

    /// Build a list-like collection, keys `0..n`.
    pub(crate) fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        let entries: Vec<(Key, V)> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::from(i), v))
            .collect();
        Self::from_unique_entries(entries)
    }

    pub(crate) fn entries(&self) -> &[(Key, V)] {
        &self.entries
    }

    fn rebuild_positions(&mut self) {
        self.positions.clear();
        for (i, (k, _)) in self.entries.iter().enumerate() {
            self.positions.insert(k.clone(), i);
        }
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Iterate over `(&Key, &V)` in collection order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over the keys in collection order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate over the values in collection order.
    pub fn values_iter(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Look up the value stored under `key`.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&V> {
        let key = key.into();
        self.position(&key).map(|i| &self.entries[i].1)
    }

    /// Mutable lookup.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut V> {
        let key = key.into();
        self.position(&key).map(|i| &mut self.entries[i].1)
    }

    /// Look up `key`, failing with [`CollectionError::NotFound`] if absent.
    ///
    /// # Errors
    /// Returns `NotFound` when no entry has the given key.
    pub fn get_or_fail<K: Into<Key>>(&self, key: K) -> Result<&V> {
        let key = key.into();
        self.position(&key)
            .map(|i| &self.entries[i].1)
            .ok_or_else(|| CollectionError::not_found(format!("key {key:?}")))
    }

    /// Whether an entry with `key` exists.
    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        self.positions.contains_key(&key.into())
    }

    /* ---------------- mutation ---------------- */

    /// Append one value under the next sequential integer key, one past the
    /// highest integer key ever inserted.
    ///
    /// Once an `i64::MAX` key has been used there is no next key: the value
    /// is dropped, a warning is logged and `false` is returned. Existing
    /// entries are never overwritten.
    pub fn push(&mut self, value: V) -> bool {
        let Some(index) = self.next_index else {
            tracing::warn!("push refused: integer keys exhausted at i64::MAX");
            return false;
        };
        let key = Key::Index(index);
        if self.positions.contains_key(&key) {
            tracing::warn!(index, "push refused: next integer key already occupied");
            return false;
        }
        self.next_index = index.checked_add(1);
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        true
    }

    /// Append several values, each under the next sequential integer key.
    pub fn append<I: IntoIterator<Item = V>>(&mut self, values: I) {
        for v in values {
            self.push(v);
        }
    }

    /// Remove and return the last value.
    ///
    /// # Errors
    /// Returns `EmptyContainer` when the collection is empty.
    pub fn pop(&mut self) -> Result<V> {
        let (key, value) = self.entries.pop().ok_or(CollectionError::empty("pop"))?;
        self.positions.remove(&key);
        if let Some(i) = key.as_index() {
            let last_used = match self.next_index {
                Some(next) => next.checked_sub(1),
                None => Some(i64::MAX),
            };
            if last_used == Some(i) {
                self.next_index = Some(i);
            }
        }
        Ok(value)
    }

    /// Remove and return the first value. Integer keys of the remaining
    /// entries are re-indexed from 0; names are kept.
    ///
    /// # Errors
    /// Returns `EmptyContainer` when the collection is empty.
    pub fn shift(&mut self) -> Result<V> {
        if self.entries.is_empty() {
            return Err(CollectionError::empty("shift"));
        }
        let (_, value) = self.entries.remove(0);
        self.reindex_integer_keys();
        Ok(value)
    }

    /// Insert a value at the front. Integer keys are re-indexed from 0.
    pub fn prepend(&mut self, value: V) {
        self.entries.insert(0, (Key::Index(-1), value));
        self.reindex_integer_keys();
    }

    /// Insert or replace the value under `key`, returning the replaced value.
    pub fn put<K: Into<Key>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.into();
        if let Some(i) = self.position(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        if let (Some(i), Some(next)) = (key.as_index(), self.next_index) {
            if i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Remove the entry under `key`, returning its value. Other keys are
    /// untouched.
    pub fn forget<K: Into<Key>>(&mut self, key: K) -> Option<V> {
        let i = self.position(&key.into())?;
        let (_, value) = self.entries.remove(i);
        self.rebuild_positions();
        Some(value)
    }

    /// Remove the entry under `key` and return its value.
    ///
    /// # Errors
    /// Returns `NotFound` when no entry has the given key.
    pub fn pull<K: Into<Key>>(&mut self, key: K) -> Result<V> {
        let key = key.into();
        let missing = format!("key {key:?}");
        self.forget(key)
            .ok_or_else(|| CollectionError::not_found(missing))
    }

    fn reindex_integer_keys(&mut self) {
        let mut next = 0i64;
        for (k, _) in &mut self.entries {
            if k.is_index() {
                *k = Key::Index(next);
                next += 1;
            }
        }
        self.next_index = Some(next);
        self.rebuild_positions();
    }

    /* ---------------- materialization ---------------- */

    /// Copy the entries out as `(Key, V)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(Key, V)>
    where
        V: Clone,
    {
        self.entries.clone()
    }

    /// Materialize the values into a plain ordered `Vec`, discarding keys.
    #[must_use]
    pub fn all(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values_iter().cloned().collect()
    }

    /// Consume the collection into its values.
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }

    /// A copy of the values re-indexed `0..n`.
    #[must_use]
    pub fn values(&self) -> Self
    where
        V: Clone,
    {
        Self::from_values(self.values_iter().cloned())
    }

    /// Render as JSON: list-like collections become arrays, others objects.
    ///
    /// # Errors
    /// Fails when a value cannot be represented as JSON.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        V: Serialize,
    {
        serde_json::to_value(self)
    }

    /// Whether the keys are exactly `0..n` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| k.as_index() == i64::try_from(i).ok())
    }

    /// Order-independent equality: both collections hold the same multiset
    /// of values. Keys are ignored.
    pub fn canonical_eq(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }
        let mut used = vec![false; other.len()];
        self.values_iter().all(|v| {
            let hit = other
                .values_iter()
                .enumerate()
                .find(|(i, o)| !used[*i] && *o == v)
                .map(|(i, _)| i);
            match hit {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Collection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Structural equality: same keys in the same order with equal values.
impl<V: PartialEq> PartialEq for Collection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for Collection<V> {}

impl<V: Hash> Hash for Collection<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl<V, K: Into<Key>> Index<K> for Collection<V> {
    type Output = V;

    /// # Panics
    /// Panics if no entry has the given key; use [`Collection::get`] to
    /// handle absence.
    fn index(&self, key: K) -> &V {
        let key = key.into();
        match self.position(&key) {
            Some(i) => &self.entries[i].1,
            None => panic!("no entry for key {key:?}"),
        }
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<K: Into<Key>, V> From<BTreeMap<K, V>> for Collection<V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::from_pairs(map)
    }
}

/// Borrowing iterator over a [`Collection`].
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/* ---------------- serde ---------------- */

/// List-like collections serialize as sequences, everything else as maps.
impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for v in self.values_iter() {
                seq.serialize_element(v)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }
}

struct CollectionVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence or a map")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut c = Collection::new();
        while let Some(v) = seq.next_element()? {
            c.push(v);
        }
        Ok(c)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut c = Collection::new();
        while let Some((k, v)) = map.next_entry::<Key, V>()? {
            c.put(k, v);
        }
        Ok(c)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_continues_after_highest_index() {
        let mut c = Collection::from_pairs([(5, "a"), (2, "b")]);
        c.push("c");
        assert_eq!(c.keys().cloned().collect::<Vec<_>>(), vec![Key::Index(5), Key::Index(2), Key::Index(6)]);
    }

    #[test]
    fn pop_rewinds_next_index() {
        let mut c = collect([1, 2, 3]);
        assert_eq!(c.pop(), Ok(3));
        c.push(9);
        assert_eq!(c.get(2), Some(&9));
    }

    #[test]
    fn put_replaces_in_place() {
        let mut c = Collection::from_pairs([("a", 1), ("b", 2)]);
        assert_eq!(c.put("a", 10), Some(1));
        assert_eq!(c.to_pairs(), vec![(Key::from("a"), 10), (Key::from("b"), 2)]);
    }

    #[test]
    fn forget_keeps_lookup_consistent() {
        let mut c = Collection::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(c.forget("a"), Some(1));
        assert_eq!(c.get("c"), Some(&3));
        assert_eq!(c.forget("a"), None);
    }

    #[test]
    fn shift_and_prepend_reindex_integer_keys() {
        let mut c = Collection::from_pairs([(Key::from(0), 1), (Key::from("x"), 2), (Key::from(1), 3)]);
        assert_eq!(c.shift(), Ok(1));
        assert_eq!(c.keys().cloned().collect::<Vec<_>>(), vec![Key::from("x"), Key::Index(0)]);
        c.prepend(0);
        assert_eq!(c.keys().cloned().collect::<Vec<_>>(), vec![Key::Index(0), Key::from("x"), Key::Index(1)]);
    }

    #[test]
    fn canonical_eq_counts_duplicates() {
        assert!(collect([1, 2, 2]).canonical_eq(&collect([2, 1, 2])));
        assert!(!collect([1, 1, 2]).canonical_eq(&collect([1, 2, 2])));
    }

    #[test]
    fn serializes_lists_as_arrays_and_maps_as_objects() {
        let list = serde_json::to_string(&collect([1, 2])).unwrap();
        assert_eq!(list, "[1,2]");
        let map = serde_json::to_string(&Collection::from_pairs([("a", 1), ("b", 2)])).unwrap();
        assert_eq!(map, r#"{"a":1,"b":2}"#);
        let back: Collection<i32> = serde_json::from_str(r#"{"0":1,"x":2}"#).unwrap();
        assert_eq!(back.get(0), Some(&1));
        assert_eq!(back.get("x"), Some(&2));
    }
}
