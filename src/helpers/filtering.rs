//! Predicate-based selection. Every method here preserves the original keys,
//! which matters for map-like collections: `filtered[key] == original[key]`.

use crate::Collection;
use crate::key::Key;
use std::collections::HashSet;
use std::hash::Hash;

impl<V: Clone> Collection<V> {
    /// Keep the entries for which `pred(value, key)` is true.
    ///
    /// ```
    /// use ironcollect::{collect, Key};
    ///
    /// let evens = collect([1, 2, 3, 4]).filter(|v, _| v % 2 == 0);
    /// assert_eq!(evens.keys().cloned().collect::<Vec<_>>(), vec![Key::Index(1), Key::Index(3)]);
    /// ```
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        Self::from_unique_entries(
            self.entries()
                .iter()
                .filter(|(k, v)| pred(v, k))
                .cloned()
                .collect(),
        )
    }

    /// Keep the entries for which `pred(value, key)` is false.
    pub fn reject<F>(&self, mut pred: F) -> Self
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.filter(|v, k| !pred(v, k))
    }

    /// Split into `(matching, non_matching)`. Every entry lands in exactly one
    /// side with its key; order is preserved within each side.
    pub fn partition<F>(&self, mut pred: F) -> (Self, Self)
    where
        F: FnMut(&V, &Key) -> bool,
    {
        let (pass, fail): (Vec<_>, Vec<_>) = self
            .entries()
            .iter()
            .cloned()
            .partition(|(k, v)| pred(v, k));
        (
            Self::from_unique_entries(pass),
            Self::from_unique_entries(fail),
        )
    }

    /// Drop repeated values, keeping the first occurrence and its key.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        V: Eq + Hash,
    {
        let mut seen = HashSet::new();
        self.filter(|v, _| seen.insert(v.clone()))
    }

    /// Drop entries whose `f(value)` was already produced by an earlier entry.
    pub fn unique_by<U, F>(&self, mut f: F) -> Self
    where
        U: Eq + Hash,
        F: FnMut(&V) -> U,
    {
        let mut seen = HashSet::new();
        self.filter(|v, _| seen.insert(f(v)))
    }
}
