//! Folds and numeric aggregates.
//!
//! `sum`, `avg` and `median` read values through [`Numeric`], so they work on
//! every primitive number and on [`Value`](crate::Value) (where a non-numeric
//! element is an `InvalidArgument` error). `min` and `max` only need
//! `PartialOrd`; a `NaN` never wins.
//!
//! `sum` of an empty collection is [`Numeric::zero`]; every other aggregate
//! on an empty collection fails with [`CollectionError::EmptyContainer`].

use crate::combiners::{AverageF64, CombineFn, Count, Max, Median, Min, Sum};
use crate::error::{CollectionError, Result};
use crate::key::Key;
use crate::numeric::Numeric;
use crate::Collection;
use std::ops::Add;

impl<V: Clone> Collection<V> {
    /// Run a combiner over all values in order.
    pub fn aggregate<C, A, O>(&self, combiner: C) -> O
    where
        C: CombineFn<V, A, O>,
    {
        let mut acc = combiner.create();
        for v in self.values_iter() {
            combiner.add_input(&mut acc, v.clone());
        }
        combiner.finish(acc)
    }

    /// Checked sum of all values.
    ///
    /// ```
    /// use ironcollect::collect;
    ///
    /// let c = collect([1, 2, 3, 4, 5]);
    /// assert_eq!(c.sum()?, 15);
    /// assert_eq!(c.avg()?, 3.0);
    /// assert_eq!(c.min()?, 1);
    /// assert_eq!(c.max()?, 5);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    ///
    /// # Errors
    /// `InvalidArgument` on integer overflow or a non-numeric value.
    pub fn sum(&self) -> Result<V>
    where
        V: Numeric,
    {
        self.aggregate(Sum::new())
    }

    /// Sum of `f(value)` over all values.
    pub fn sum_by<N, F>(&self, f: F) -> N
    where
        N: Add<Output = N> + Default,
        F: FnMut(&V) -> N,
    {
        self.values_iter().map(f).fold(N::default(), |acc, n| acc + n)
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty, `InvalidArgument` for a
    /// non-numeric value.
    pub fn avg(&self) -> Result<f64>
    where
        V: Numeric,
    {
        let mean: Option<f64> = self.as_f64s()?.aggregate(AverageF64);
        mean.ok_or(CollectionError::empty("avg"))
    }

    /// Arithmetic mean of `f(value)`.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn avg_by<F>(&self, f: F) -> Result<f64>
    where
        F: FnMut(&V) -> f64,
    {
        let projected: Collection<f64> = self.map(f);
        let mean: Option<f64> = projected.aggregate(AverageF64);
        mean.ok_or(CollectionError::empty("avg"))
    }

    /// Median of the values as `f64`.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty, `InvalidArgument` for a
    /// non-numeric value.
    pub fn median(&self) -> Result<f64>
    where
        V: Numeric,
    {
        let median: Option<f64> = self.as_f64s()?.aggregate(Median);
        median.ok_or(CollectionError::empty("median"))
    }

    /// Smallest value; the first one wins on ties.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn min(&self) -> Result<V>
    where
        V: PartialOrd,
    {
        let min: Option<V> = self.aggregate(Min::new());
        min.ok_or(CollectionError::empty("min"))
    }

    /// Largest value; the first one wins on ties.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn max(&self) -> Result<V>
    where
        V: PartialOrd,
    {
        let max: Option<V> = self.aggregate(Max::new());
        max.ok_or(CollectionError::empty("max"))
    }

    fn as_f64s(&self) -> Result<Collection<f64>>
    where
        V: Numeric,
    {
        self.try_map(Numeric::to_f64)
    }

    /// Number of values; same as [`len`](Collection::len).
    #[must_use]
    pub fn count(&self) -> usize {
        self.aggregate(Count)
    }

    /// Left fold seeded by the first value, starting at the second.
    ///
    /// # Errors
    /// `EmptyContainer` when the collection is empty.
    pub fn reduce<F>(&self, mut f: F) -> Result<V>
    where
        F: FnMut(V, &V, &Key) -> V,
    {
        let mut entries = self.iter();
        let (_, first) = entries.next().ok_or(CollectionError::empty("reduce"))?;
        Ok(entries.fold(first.clone(), |acc, (k, v)| f(acc, v, k)))
    }
}

impl<V> Collection<V> {
    /// Left fold from an explicit initial accumulator; never fails.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &Key) -> A,
    {
        self.iter().fold(init, |acc, (k, v)| f(acc, v, k))
    }
}
