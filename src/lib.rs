//! # ironcollect
//!
//! **Ordered keyed collections** for Rust with a fluent pipeline API, plus a
//! pull-based lazy sequence type for large or infinite sources.
//!
//! ## Key Features
//!
//! - **One container for lists and maps** - entries keep insertion order and
//!   may be keyed by integer index or by name
//! - **Chainable pipeline** - map, filter, group, zip, chunk, sort, join; every
//!   operation returns a new collection
//! - **Built-in aggregates** - sum, avg, median, min, max, reduce and fold, all
//!   backed by reusable combiners
//! - **Heterogeneous data** - the [`Value`] type holds JSON-like records so a
//!   collection can mix numbers, strings and nested collections
//! - **Lazy sequences** - [`LazyCollection`] evaluates on demand and never pulls
//!   more than a terminal operation needs
//! - **Typed errors** - empty containers, missing values and bad arguments are
//!   reported through [`CollectionError`]
//!
//! ## Quick Start
//!
//! ```
//! use ironcollect::*;
//!
//! # fn main() -> Result<()> {
//! let totals = collect([3, 1, 4, 1, 5, 9, 2, 6])
//!     .filter(|n, _| n % 2 == 1)
//!     .map(|n| n * 10);
//! assert_eq!(totals.values().all(), vec![30, 10, 10, 50, 90]);
//! assert_eq!(totals.sum()?, 190);
//! assert_eq!(totals.max()?, 90);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Collection
//!
//! A [`Collection<V>`] is an ordered sequence of `(Key, V)` entries with
//! unique keys. Values appended without a key get the next sequential integer
//! index, so a collection built from a `Vec` behaves like a list:
//!
//! ```
//! use ironcollect::{collect, Collection};
//!
//! let mut stack = collect(["a", "b"]);
//! stack.push("c");
//! assert_eq!(stack.pop().unwrap(), "c");
//!
//! let mut record: Collection<&str> = collect!["name" => "al"];
//! record.put("department", "IT");
//! assert_eq!(record["department"], "IT");
//! ```
//!
//! Each operation documents what it does with keys. The rule of thumb:
//! selections (`filter`, `slice`, `take`, `sort`, `unique`, ...) keep keys,
//! while operations that build new sequences (`concat`, `zip`, `flat_map`,
//! `collapse`, `values`) re-index from 0.
//!
//! ### Keys
//!
//! A [`Key`] is either an integer index or a name. Strings that spell a
//! canonical integer (`"7"`, not `"07"`) become integer keys, so `"7"` and `7`
//! address the same entry.
//!
//! ### Errors
//!
//! Plain lookups (`first`, `get`, `first_where`) return `Option`. The
//! `*_or_fail` variants, and operations that cannot produce a result, return
//! [`Result`] with a [`CollectionError`].
//!
//! ### Combiners
//!
//! The [`combiners`] module provides reusable aggregation functions:
//! - [`Sum`], [`Count`]
//! - [`Min`] / [`Max`]
//! - [`AverageF64`], [`Median`]
//!
//! Custom aggregations implement [`CombineFn`] and run through
//! [`Collection::aggregate`].
//!
//! ### Lazy sequences
//!
//! ```
//! use ironcollect::LazyCollection;
//!
//! let squares = LazyCollection::count_from(1).map(|n| n * n);
//! assert_eq!(squares.take(4).all(), vec![1, 4, 9, 16]);
//! ```
//!
//! ## Feature Flags
//!
//! - `testing` (default) - assertion helpers, builders, fixtures and a
//!   `tracing` subscriber installer for tests
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Collection` type, construction and mutation
//! - [`helpers`] - pipeline operations, grouped by family
//! - [`combiners`] - aggregation functions
//! - [`key`] - entry keys and key conversion
//! - [`value`] - dynamic values for heterogeneous data
//! - [`lazy`] - lazily evaluated sequences
//! - [`numeric`] - the numeric view behind `sum`, `avg` and `median`
//! - [`error`] - the error type

pub mod collection;
pub mod combiners;
pub mod error;
pub mod helpers;
pub mod key;
pub mod lazy;
pub mod numeric;
pub mod utils;
pub mod value;

#[cfg(feature = "testing")]
pub mod testing;

pub use collection::{Collection, Iter, collect};
pub use combiners::{AverageF64, CombineFn, Count, Max, Median, Min, Sum};
pub use error::{CollectionError, Result};
pub use helpers::Fields;
pub use key::{AsKey, Key};
pub use lazy::LazyCollection;
pub use numeric::Numeric;
pub use value::Value;
