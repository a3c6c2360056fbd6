//! Fallible variants of the core transforms.
//!
//! The callback's error type is the caller's own; the first `Err` stops the
//! operation and is returned unchanged.

use crate::key::Key;
use crate::Collection;

impl<V> Collection<V> {
    /// [`map`](Self::map) with a fallible callback. Keys are preserved.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let raw = collect(["1", "2", "x"]);
    /// assert!(raw.try_map(|s| s.parse::<i32>()).is_err());
    /// let ok = collect(["1", "2"]).try_map(|s| s.parse::<i32>()).unwrap();
    /// assert_eq!(ok.all(), vec![1, 2]);
    /// ```
    pub fn try_map<O, E, F>(&self, mut f: F) -> Result<Collection<O>, E>
    where
        F: FnMut(&V) -> Result<O, E>,
    {
        let entries = self
            .iter()
            .map(|(k, v)| f(v).map(|o| (k.clone(), o)))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Collection::from_unique_entries(entries))
    }

    /// [`filter`](Self::filter) with a fallible predicate. Keys are preserved.
    pub fn try_filter<E, F>(&self, mut pred: F) -> Result<Self, E>
    where
        V: Clone,
        F: FnMut(&V, &Key) -> Result<bool, E>,
    {
        let mut kept = Vec::new();
        for (k, v) in self {
            if pred(v, k)? {
                kept.push((k.clone(), v.clone()));
            }
        }
        Ok(Self::from_unique_entries(kept))
    }

    /// [`fold`](Self::fold) with a fallible step.
    pub fn try_fold<A, E, F>(&self, init: A, mut f: F) -> Result<A, E>
    where
        F: FnMut(A, &V, &Key) -> Result<A, E>,
    {
        self.iter().try_fold(init, |acc, (k, v)| f(acc, v, k))
    }
}
