//! Pipeline operations on [`Collection`](crate::Collection), one family per
//! file. Each file adds an `impl Collection<V>` block; the only item exported
//! from here is the [`Fields`] trait used by the record helpers.

mod aggregate;
mod combine;
mod filtering;
pub mod grouping;
mod query;
mod slicing;
mod sorting;
mod strings;
mod transform;
mod try_process;

pub use grouping::Fields;
