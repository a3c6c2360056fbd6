//! Pull-based lazy sequences.
//!
//! A [`LazyCollection`] wraps a *producer*: a closure that starts a fresh
//! iterator every time the sequence is consumed. Adapters such as
//! [`map`](LazyCollection::map) or [`filter`](LazyCollection::filter) only
//! build a new producer, so nothing is evaluated until a terminal operation
//! ([`take`](LazyCollection::take), [`first`](LazyCollection::first),
//! [`collect`](LazyCollection::collect), ...) pulls values.
//!
//! Producers may be infinite. Terminals that stop early (`take`, `first`,
//! `first_where` with a match) are safe on them; `collect`, `all` and
//! `count` are not.
//!
//! ```
//! use ironcollect::LazyCollection;
//!
//! let evens = LazyCollection::count_from(0).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(3).all(), vec![0, 2, 4]);
//! ```

use crate::error::{CollectionError, Result};
use crate::Collection;
use std::fmt;
use std::rc::Rc;

type Producer<V> = Rc<dyn Fn() -> Box<dyn Iterator<Item = V>>>;

/// A lazily evaluated, re-startable sequence of values.
pub struct LazyCollection<V> {
    producer: Producer<V>,
}

impl<V> Clone for LazyCollection<V> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<V> fmt::Debug for LazyCollection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCollection").finish_non_exhaustive()
    }
}

impl<V: 'static> LazyCollection<V> {
    /// Wrap a producer. It is called once per consumption and must return a
    /// fresh iterator each time.
    pub fn new<F, I>(producer: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self {
            producer: Rc::new(move || -> Box<dyn Iterator<Item = V>> {
                Box::new(producer().into_iter())
            }),
        }
    }

    /// Lazy view over an owned vector; values are cloned on each pull.
    pub fn from_vec(values: Vec<V>) -> Self
    where
        V: Clone,
    {
        let values = Rc::new(values);
        Self::new(move || {
            let values = Rc::clone(&values);
            (0..values.len()).map(move |i| values[i].clone())
        })
    }

    /// Start a fresh iterator over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = V>> {
        tracing::trace!("invoking lazy producer");
        (self.producer)()
    }

    /* ---------------- lazy adapters ---------------- */

    /// Transform each value.
    #[must_use]
    pub fn map<O, F>(&self, f: F) -> LazyCollection<O>
    where
        O: 'static,
        F: Fn(V) -> O + 'static,
    {
        let source = self.clone();
        let f = Rc::new(f);
        LazyCollection::new(move || {
            let f = Rc::clone(&f);
            source.iter().map(move |v| f(v))
        })
    }

    /// Keep the values satisfying `pred`.
    #[must_use]
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        let source = self.clone();
        let pred = Rc::new(pred);
        Self::new(move || {
            let pred = Rc::clone(&pred);
            source.iter().filter(move |v| pred(v))
        })
    }

    /// Drop the first `n` values.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        let source = self.clone();
        Self::new(move || source.iter().skip(n))
    }

    /// Drop values while `pred` holds.
    #[must_use]
    pub fn skip_while<F>(&self, pred: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        let source = self.clone();
        let pred = Rc::new(pred);
        Self::new(move || {
            let pred = Rc::clone(&pred);
            source.iter().skip_while(move |v| pred(v))
        })
    }

    /// Yield values while `pred` holds, then stop.
    #[must_use]
    pub fn take_while<F>(&self, pred: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        let source = self.clone();
        let pred = Rc::new(pred);
        Self::new(move || {
            let pred = Rc::clone(&pred);
            source.iter().take_while(move |v| pred(v))
        })
    }

    /// Yield values until `pred` first holds; the matching value is excluded.
    #[must_use]
    pub fn take_until<F>(&self, pred: F) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        self.take_while(move |v| !pred(v))
    }

    /// Cap the sequence at `n` values while staying lazy.
    #[must_use]
    pub fn limit(&self, n: usize) -> Self {
        let source = self.clone();
        Self::new(move || source.iter().take(n))
    }

    /// Group consecutive values into collections of at most `size`. Each
    /// chunk is keyed by the values' positions in the whole sequence.
    ///
    /// # Errors
    /// `InvalidArgument` when `size` is zero.
    pub fn chunk(&self, size: usize) -> Result<LazyCollection<Collection<V>>> {
        if size == 0 {
            return Err(CollectionError::invalid("chunk size must be positive"));
        }
        let source = self.clone();
        Ok(LazyCollection::new(move || {
            let mut values = source.iter().enumerate();
            std::iter::from_fn(move || {
                let mut chunk = Collection::new();
                for (i, v) in values.by_ref().take(size) {
                    chunk.put(i, v);
                }
                chunk.is_not_empty().then_some(chunk)
            })
        }))
    }

    /* ---------------- terminals ---------------- */

    /// Pull at most `n` values into a list-like [`Collection`].
    ///
    /// Exactly `min(n, available)` values are pulled from the producer.
    #[must_use]
    pub fn take(&self, n: usize) -> Collection<V> {
        let taken = Collection::from_values(self.iter().take(n));
        tracing::trace!(requested = n, pulled = taken.len(), "lazy take");
        taken
    }

    /// The first value, if the sequence is non-empty.
    #[must_use]
    pub fn first(&self) -> Option<V> {
        self.iter().next()
    }

    /// The first value satisfying `pred`. Stops pulling at the match.
    pub fn first_where<F>(&self, mut pred: F) -> Option<V>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter().find(|v| pred(v))
    }

    /// Materialize every value. The sequence must be finite.
    #[must_use]
    pub fn collect(&self) -> Collection<V> {
        Collection::from_values(self.iter())
    }

    /// Materialize every value into a `Vec`. The sequence must be finite.
    #[must_use]
    pub fn all(&self) -> Vec<V> {
        self.iter().collect()
    }

    /// Count the values. The sequence must be finite.
    #[must_use]
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl LazyCollection<i64> {
    /// Infinite counter `start, start + 1, ...`.
    #[must_use]
    pub fn count_from(start: i64) -> Self {
        Self::new(move || start..)
    }

    /// Inclusive ascending range; empty when `start > end`.
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        Self::new(move || start..=end)
    }
}

impl<V: 'static> LazyCollection<V> {
    /// `f(1), f(2), ..., f(n)`.
    pub fn times<F>(n: usize, f: F) -> Self
    where
        F: Fn(usize) -> V + 'static,
    {
        let f = Rc::new(f);
        Self::new(move || {
            let f = Rc::clone(&f);
            (1..=n).map(move |i| f(i))
        })
    }
}

impl<V: Clone + 'static> Collection<V> {
    /// Lazy view over a snapshot of the values; later changes to `self` are
    /// not observed.
    #[must_use]
    pub fn lazy(&self) -> LazyCollection<V> {
        LazyCollection::from_vec(self.all())
    }
}

impl<V: 'static> IntoIterator for &LazyCollection<V> {
    type Item = V;
    type IntoIter = Box<dyn Iterator<Item = V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn producer_restarts_on_each_consumption() {
        let lazy = LazyCollection::range(1, 3);
        assert_eq!(lazy.all(), vec![1, 2, 3]);
        assert_eq!(lazy.all(), vec![1, 2, 3]);
    }

    #[test]
    fn descending_range_is_empty() {
        assert_eq!(LazyCollection::range(3, 1).count(), 0);
    }

    #[test]
    fn chunk_keys_follow_sequence_positions() {
        let chunks = LazyCollection::range(10, 14).chunk(2).unwrap().collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].get(3), Some(&13));
        assert_eq!(chunks[2].all(), vec![14]);
    }

    #[test]
    fn zero_chunk_is_rejected() {
        assert!(matches!(
            LazyCollection::count_from(0).chunk(0),
            Err(CollectionError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn times_counts_from_one() {
        assert_eq!(LazyCollection::times(3, |i| i * 10).all(), vec![10, 20, 30]);
    }
}
