//! Operations over two collections: positional pairing, concatenation,
//! key/value combination and set-style comparisons.
//!
//! Positional operations ([`zip`](Collection::zip),
//! [`concat`](Collection::concat), [`combine`](Collection::combine)) discard
//! the input keys. Set operations ([`diff`](Collection::diff),
//! [`intersect`](Collection::intersect), ...) keep the receiver's keys.

use crate::error::{CollectionError, Result};
use crate::key::AsKey;
use crate::Collection;

impl<V: Clone> Collection<V> {
    /// Pair values by position: `result[i] == [self_i, other_i]`.
    /// The result is as long as the shorter input.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let zipped = collect([1, 2, 3]).zip(&collect([4, 5, 6]));
    /// assert_eq!(zipped.all(), vec![collect([1, 4]), collect([2, 5]), collect([3, 6])]);
    /// ```
    #[must_use]
    pub fn zip(&self, other: &Self) -> Collection<Self> {
        self.values_iter()
            .zip(other.values_iter())
            .map(|(a, b)| Self::from(vec![a.clone(), b.clone()]))
            .collect()
    }

    /// Values of `self` followed by values of `other`, re-indexed.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.values_iter()
            .chain(other.values_iter())
            .cloned()
            .collect()
    }

    /// Merge `other` into a copy of `self`: named keys overwrite, integer-keyed
    /// values are appended under fresh indexes.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in other {
            if k.is_index() {
                out.push(v.clone());
            } else {
                out.put(k, v.clone());
            }
        }
        out
    }

    /// Add the entries of `other` whose keys are missing from `self`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (k, v) in other {
            if !out.has(k) {
                out.put(k, v.clone());
            }
        }
        out
    }

    /// Entries of `self` whose value does not occur in `other`.
    #[must_use]
    pub fn diff(&self, other: &Self) -> Self
    where
        V: PartialEq,
    {
        self.filter(|v, _| !other.values_iter().any(|o| o == v))
    }

    /// Entries of `self` whose value also occurs in `other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self
    where
        V: PartialEq,
    {
        self.filter(|v, _| other.values_iter().any(|o| o == v))
    }

    /// Entries of `self` whose key is absent from `other`.
    #[must_use]
    pub fn diff_keys<U>(&self, other: &Collection<U>) -> Self {
        self.filter(|_, k| !other.has(k))
    }

    /// Entries of `self` whose key is present in `other`.
    #[must_use]
    pub fn intersect_by_keys<U>(&self, other: &Collection<U>) -> Self {
        self.filter(|_, k| other.has(k))
    }
}

impl<V: AsKey> Collection<V> {
    /// Use this collection's values as keys for `values`, position by
    /// position.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let person = collect(["name", "country"]).combine(&collect(["Al", "India"]))?;
    /// assert_eq!(person["name"], "Al");
    /// assert_eq!(person["country"], "India");
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` when the lengths differ or a value of `self` cannot
    /// be a key.
    pub fn combine<U: Clone>(&self, values: &Collection<U>) -> Result<Collection<U>> {
        if self.len() != values.len() {
            return Err(CollectionError::invalid(format!(
                "combine needs equal lengths (keys: {}, values: {})",
                self.len(),
                values.len()
            )));
        }
        let mut out = Collection::new();
        for ((position, key), value) in self.values_iter().enumerate().zip(values.values_iter()) {
            let key = key.as_key().ok_or_else(|| {
                CollectionError::invalid(format!("value at position {position} cannot be used as a key"))
            })?;
            out.put(key, value.clone());
        }
        Ok(out)
    }
}
