//! Order and arithmetic combiners: `Sum`, `Min`, `Max`, `Count`.

use super::CombineFn;
use crate::error::Result;
use crate::numeric::Numeric;
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::mem::replace;

/// Adds values up through [`Numeric::try_add`], starting from
/// [`Numeric::zero`]. The first failed addition sticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Numeric> CombineFn<T, Result<T>, Result<T>> for Sum<T> {
    fn create(&self) -> Result<T> {
        Ok(T::zero())
    }

    fn add_input(&self, total: &mut Result<T>, v: T) {
        let current = replace(total, Ok(T::zero()));
        *total = current.and_then(|t| t.try_add(v));
    }

    fn finish(&self, total: Result<T>) -> Result<T> {
        total
    }
}

/// Keep `v` only if it compares strictly `wanted` against the current best,
/// so the earliest of several equal extremes survives. A best that is not
/// comparable with itself (`NaN`) is always replaced; an incomparable `v`
/// never wins.
fn keep_extreme<T: PartialOrd>(best: &mut Option<T>, v: T, wanted: Ordering) {
    match best {
        Some(cur) if cur.partial_cmp(&cur).is_some() && v.partial_cmp(cur) != Some(wanted) => {}
        _ => *best = Some(v),
    }
}

/// Smallest value; `None` for empty input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(PhantomData<T>);

impl<T> Min<T> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PartialOrd> CombineFn<T, Option<T>, Option<T>> for Min<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, best: &mut Option<T>, v: T) {
        keep_extreme(best, v, Ordering::Less);
    }

    fn finish(&self, best: Option<T>) -> Option<T> {
        best
    }
}

/// Largest value; `None` for empty input.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(PhantomData<T>);

impl<T> Max<T> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: PartialOrd> CombineFn<T, Option<T>, Option<T>> for Max<T> {
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, best: &mut Option<T>, v: T) {
        keep_extreme(best, v, Ordering::Greater);
    }

    fn finish(&self, best: Option<T>) -> Option<T> {
        best
    }
}

/// Number of values, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, usize, usize> for Count {
    fn create(&self) -> usize {
        0
    }

    fn add_input(&self, n: &mut usize, _v: V) {
        *n += 1;
    }

    fn finish(&self, n: usize) -> usize {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<C, A, O>(c: &C, values: Vec<i32>) -> O
    where
        C: CombineFn<i32, A, O>,
    {
        let mut acc = c.create();
        for v in values {
            c.add_input(&mut acc, v);
        }
        c.finish(acc)
    }

    #[test]
    fn extremes() {
        assert_eq!(run(&Min::new(), vec![4, 2, 9, 2]), Some(2));
        assert_eq!(run(&Max::new(), vec![4, 2, 9, 2]), Some(9));
        assert_eq!(run(&Max::<i32>::new(), vec![]), None);
    }

    #[test]
    fn nan_never_wins_an_extreme() {
        let mut best = None;
        for v in [f64::NAN, 2.0, f64::NAN, 0.5] {
            Min::new().add_input(&mut best, v);
        }
        assert_eq!(best, Some(0.5));
    }

    #[test]
    fn sum_and_count() {
        assert_eq!(run(&Sum::new(), vec![1, 2, 3]), Ok(6));
        let overflow: Result<i32> = run(&Sum::new(), vec![i32::MAX, 1]);
        assert!(overflow.is_err());
        assert_eq!(run(&Count, vec![1, 2, 3]), 3);
    }
}
