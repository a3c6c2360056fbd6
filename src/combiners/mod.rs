//! Built-in combiners for [`Collection::aggregate`](crate::Collection::aggregate).
//!
//! A combiner folds a stream of values into an accumulator and finishes it
//! into an output:
//!
//! - [`Sum<T>`] -- checked sum of [`Numeric`](crate::Numeric) values, zero when empty.
//! - [`Min<T>`] / [`Max<T>`] -- smallest / largest value, `None` when empty.
//! - [`Count`] -- number of values.
//! - [`AverageF64`] -- mean as `f64`, `None` when empty.
//! - [`Median`] -- median as `f64`, `None` when empty.
//!
//! The scalar helpers on [`Collection`](crate::Collection) (`sum`, `min`,
//! `max`, `avg`, `median`) are thin wrappers that run these combiners and turn
//! an empty result into [`CollectionError::EmptyContainer`](crate::CollectionError).
//!
//! # Examples
//! ```
//! use ironcollect::collect;
//! use ironcollect::combiners::{Max, Sum};
//!
//! let c = collect([3u64, 7, 5]);
//! assert_eq!(c.aggregate(Sum::<u64>::new()), Ok(15));
//! assert_eq!(c.aggregate(Max::<u64>::new()), Some(7));
//! ```

mod basic;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use statistical::{AverageF64, Median};

/// A fold over values `V` through accumulator `A` into output `O`.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}
