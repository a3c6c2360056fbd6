//! Lookups and scalar queries.
//!
//! Absence policy, applied across the API: plain lookups (`first`, `last`,
//! `first_where`, `search`, `get`) return `None` when nothing matches, and the
//! `*_or_fail` variants turn that into [`CollectionError::NotFound`].
//! Operations that cannot produce anything from an empty collection
//! (`random`, `pop`, `reduce`, `min`, ...) fail with
//! [`CollectionError::EmptyContainer`].

use crate::error::{CollectionError, Result};
use crate::key::Key;
use crate::utils::{SplitMix64, entropy_seed};
use crate::Collection;

impl<V> Collection<V> {
    /// The first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.values_iter().next()
    }

    /// The last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.values_iter().next_back()
    }

    /// The first value satisfying `pred(value, key)`.
    pub fn first_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.iter().find(|&(k, v)| pred(v, k)).map(|(_, v)| v)
    }

    /// The last value satisfying `pred(value, key)`.
    pub fn last_where<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.iter().rev().find(|&(k, v)| pred(v, k)).map(|(_, v)| v)
    }

    /// Like [`first_where`](Self::first_where), but absence is an error.
    ///
    /// # Errors
    /// `NotFound` when no value matches.
    pub fn first_or_fail<F>(&self, pred: F) -> Result<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.first_where(pred)
            .ok_or_else(|| CollectionError::not_found("no value matched the predicate"))
    }

    /// Like [`last_where`](Self::last_where), but absence is an error.
    ///
    /// # Errors
    /// `NotFound` when no value matches.
    pub fn last_or_fail<F>(&self, pred: F) -> Result<&V>
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.last_where(pred)
            .ok_or_else(|| CollectionError::not_found("no value matched the predicate"))
    }

    /// Whether any value equals `needle`.
    pub fn contains(&self, needle: &V) -> bool
    where
        V: PartialEq,
    {
        self.values_iter().any(|v| v == needle)
    }

    /// Whether any entry satisfies `pred(value, key)`.
    pub fn contains_where<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.iter().any(|(k, v)| pred(v, k))
    }

    /// Whether every entry satisfies `pred(value, key)`; true when empty.
    pub fn every<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&V, &Key) -> bool,
    {
        self.iter().all(|(k, v)| pred(v, k))
    }

    /// Key of the first value equal to `needle`.
    pub fn search(&self, needle: &V) -> Option<&Key>
    where
        V: PartialEq,
    {
        self.iter().find(|(_, v)| *v == needle).map(|(k, _)| k)
    }

    /// One uniformly chosen value.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn random(&self) -> Result<&V> {
        self.random_seeded(entropy_seed())
    }

    /// Deterministic variant of [`random`](Self::random).
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn random_seeded(&self, seed: u64) -> Result<&V> {
        if self.is_empty() {
            return Err(CollectionError::empty("random"));
        }
        let i = SplitMix64::new(seed).next_below(self.len());
        Ok(&self.entries()[i].1)
    }

    /// `n` distinct entries chosen uniformly, returned in their original
    /// order and re-indexed.
    ///
    /// # Errors
    /// `InvalidArgument` when `n` exceeds the collection length.
    pub fn random_many(&self, n: usize) -> Result<Self>
    where
        V: Clone,
    {
        self.random_many_seeded(n, entropy_seed())
    }

    /// Deterministic variant of [`random_many`](Self::random_many).
    ///
    /// # Errors
    /// `InvalidArgument` when `n` exceeds the collection length.
    pub fn random_many_seeded(&self, n: usize, seed: u64) -> Result<Self>
    where
        V: Clone,
    {
        if n > self.len() {
            return Err(CollectionError::invalid(format!(
                "requested {n} items but only {} available",
                self.len()
            )));
        }
        let mut rng = SplitMix64::new(seed);
        let mut positions: Vec<usize> = (0..self.len()).collect();
        // Partial Fisher-Yates: the first n slots end up a uniform sample.
        for i in 0..n {
            let j = i + rng.next_below(self.len() - i);
            positions.swap(i, j);
        }
        let mut picked = positions[..n].to_vec();
        picked.sort_unstable();
        Ok(picked
            .into_iter()
            .map(|i| self.entries()[i].1.clone())
            .collect())
    }
}
