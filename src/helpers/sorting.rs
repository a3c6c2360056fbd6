//! Re-ordering helpers.
//!
//! Sorts are stable and move keys together with their values, so a sorted
//! map-like collection still answers `get(key)` exactly as before.
//! [`shuffle`](Collection::shuffle) is the exception: it re-indexes.

use crate::Collection;
use crate::key::Key;
use crate::utils::{SplitMix64, entropy_seed};
use std::cmp::Ordering;

impl<V: Clone> Collection<V> {
    fn sorted_entries_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&(Key, V), &(Key, V)) -> Ordering,
    {
        let mut entries = self.to_pairs();
        entries.sort_by(|a, b| cmp(a, b));
        Self::from_unique_entries(entries)
    }

    /// Ascending natural order.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let sorted = collect([3, 1, 2]).sort();
    /// assert_eq!(sorted.all(), vec![1, 2, 3]);
    /// assert_eq!(sorted[1], 1);
    /// ```
    #[must_use]
    pub fn sort(&self) -> Self
    where
        V: Ord,
    {
        self.sorted_entries_by(|a, b| a.1.cmp(&b.1))
    }

    /// Ascending by a comparator.
    pub fn sort_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.sorted_entries_by(|a, b| cmp(&a.1, &b.1))
    }

    /// Descending natural order; equal values keep their relative order.
    #[must_use]
    pub fn sort_desc(&self) -> Self
    where
        V: Ord,
    {
        self.sorted_entries_by(|a, b| b.1.cmp(&a.1))
    }

    /// Descending by a comparator; equal values keep their relative order.
    pub fn sort_desc_by<F>(&self, mut cmp: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.sorted_entries_by(|a, b| cmp(&b.1, &a.1))
    }

    /// Ascending by a derived sort key.
    pub fn sort_by_key<S, F>(&self, mut f: F) -> Self
    where
        S: Ord,
        F: FnMut(&V) -> S,
    {
        self.sorted_entries_by(|a, b| f(&a.1).cmp(&f(&b.1)))
    }

    /// Descending by a derived sort key.
    pub fn sort_by_key_desc<S, F>(&self, mut f: F) -> Self
    where
        S: Ord,
        F: FnMut(&V) -> S,
    {
        self.sorted_entries_by(|a, b| f(&b.1).cmp(&f(&a.1)))
    }

    /// Order entries by key.
    #[must_use]
    pub fn sort_keys(&self) -> Self {
        self.sorted_entries_by(|a, b| a.0.cmp(&b.0))
    }

    #[must_use]
    pub fn sort_keys_desc(&self) -> Self {
        self.sorted_entries_by(|a, b| b.0.cmp(&a.0))
    }

    /// Reverse the entry order, keys included.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut entries = self.to_pairs();
        entries.reverse();
        Self::from_unique_entries(entries)
    }

    /// Random order, re-indexed.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_seeded(entropy_seed())
    }

    /// Deterministic random order for a given seed, re-indexed.
    #[must_use]
    pub fn shuffle_seeded(&self, seed: u64) -> Self {
        let mut values = self.all();
        let mut rng = SplitMix64::new(seed);
        for i in (1..values.len()).rev() {
            let j = rng.next_below(i + 1);
            values.swap(i, j);
        }
        Self::from(values)
    }
}
