//! Restructuring: grouping, keying, plucking and chunking.
//!
//! Record-shaped values (nested collections, [`Value`] objects, string-keyed
//! maps) expose named fields through the [`Fields`] trait, which powers the
//! field-name variants [`group_by_field`](Collection::group_by_field) and
//! [`pluck`](Collection::pluck).

use crate::error::{CollectionError, Result};
use crate::key::{AsKey, Key};
use crate::{Collection, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Named-field access for record-like values.
pub trait Fields {
    type Field;
    fn field(&self, name: &Key) -> Option<&Self::Field>;
}

impl<T> Fields for Collection<T> {
    type Field = T;
    fn field(&self, name: &Key) -> Option<&T> {
        self.get(name)
    }
}

impl Fields for Value {
    type Field = Value;
    fn field(&self, name: &Key) -> Option<&Value> {
        self.get(name)
    }
}

impl<T> Fields for BTreeMap<String, T> {
    type Field = T;
    fn field(&self, name: &Key) -> Option<&T> {
        self.get(&name.to_string())
    }
}

impl<T, S: BuildHasher> Fields for HashMap<String, T, S> {
    type Field = T;
    fn field(&self, name: &Key) -> Option<&T> {
        self.get(&name.to_string())
    }
}

impl<V: Clone> Collection<V> {
    /// Group values by the key `f(value, key)` returns.
    ///
    /// Groups are ordered by first appearance; each group is a list of the
    /// original values.
    pub fn group_by<G, F>(&self, mut f: F) -> Collection<Collection<V>>
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        self.map_to_groups(|v, k| (f(v, k), v.clone()))
    }

    /// Group record values by one of their fields.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let staff = collect([
    ///     collect!["name" => "al", "department" => "IT"],
    ///     collect!["name" => "syam", "department" => "HR"],
    ///     collect!["name" => "cuy", "department" => "IT"],
    /// ]);
    /// let groups = staff.group_by_field("department")?;
    /// assert_eq!(groups["IT"].len(), 2);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    ///
    /// # Errors
    /// `NotFound` if a record lacks the field; `InvalidArgument` if the
    /// field's value cannot serve as a key.
    pub fn group_by_field<K>(&self, field: K) -> Result<Collection<Collection<V>>>
    where
        K: Into<Key>,
        V: Fields,
        V::Field: AsKey,
    {
        let field = field.into();
        let mut groups: Collection<Collection<V>> = Collection::new();
        for (k, v) in self {
            let group = field_key(v, k, &field)?;
            match groups.get_mut(&group) {
                Some(bucket) => {
                    bucket.push(v.clone());
                }
                None => {
                    groups.put(group, Collection::from(vec![v.clone()]));
                }
            }
        }
        Ok(groups)
    }

    /// Re-key the collection by `f(value, key)`. Later entries win on
    /// collisions.
    pub fn key_by<G, F>(&self, mut f: F) -> Self
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        self.map_with_keys(|v, k| (f(v, k), v.clone()))
    }

    /// Count values per group key, groups in first-appearance order.
    pub fn count_by<G, F>(&self, mut f: F) -> Collection<usize>
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        let mut counts: Collection<usize> = Collection::new();
        for (k, v) in self {
            let group = f(v, k).into();
            match counts.get_mut(&group) {
                Some(n) => *n += 1,
                None => {
                    counts.put(group, 1);
                }
            }
        }
        counts
    }

    /// Extract one field from every record value. Records without the field
    /// are skipped; the result is re-indexed.
    pub fn pluck<K>(&self, field: K) -> Collection<V::Field>
    where
        K: Into<Key>,
        V: Fields,
        V::Field: Clone,
    {
        let field = field.into();
        self.values_iter()
            .filter_map(|v| v.field(&field).cloned())
            .collect()
    }

    /// Split into consecutive chunks of at most `size` entries.
    ///
    /// Entries keep their keys inside each chunk; the chunks themselves are
    /// indexed `0..`.
    ///
    /// # Errors
    /// `InvalidArgument` when `size` is 0.
    pub fn chunk(&self, size: usize) -> Result<Collection<Self>> {
        if size == 0 {
            return Err(CollectionError::invalid("chunk size must be at least 1"));
        }
        Ok(self
            .entries()
            .chunks(size)
            .map(|chunk| Self::from_unique_entries(chunk.to_vec()))
            .collect())
    }

    /// Overlapping windows of `size` entries, advancing `step` entries at a
    /// time. Only full windows are produced.
    ///
    /// # Errors
    /// `InvalidArgument` when `size` or `step` is 0.
    pub fn sliding(&self, size: usize, step: usize) -> Result<Collection<Self>> {
        if size == 0 || step == 0 {
            return Err(CollectionError::invalid(format!(
                "sliding window needs size and step of at least 1 (got size {size}, step {step})"
            )));
        }
        Ok(self
            .entries()
            .windows(size)
            .step_by(step)
            .map(|w| Self::from_unique_entries(w.to_vec()))
            .collect())
    }
}

fn field_key<V>(record: &V, key: &Key, field: &Key) -> Result<Key>
where
    V: Fields,
    V::Field: AsKey,
{
    let value = record
        .field(field)
        .ok_or_else(|| CollectionError::not_found(format!("field {field:?} in entry {key:?}")))?;
    value.as_key().ok_or_else(|| {
        CollectionError::invalid(format!(
            "field {field:?} of entry {key:?} cannot be used as a group key"
        ))
    })
}
