//! Testing utilities for code built on ironcollect.
//!
//! This module gives end-users the pieces they need to write idiomatic Rust
//! tests against collections:
//!
//! - **Assertions**: compare collections structurally, canonically or by values
//! - **Builders**: assemble test collections and `Value` records fluently
//! - **Fixtures**: small ready-made datasets (people, employees, hobbies)
//! - **Tracing**: [`init_tracing`] routes the crate's `tracing` output to the
//!   test harness
//!
//! # Quick Start
//!
//! ```
//! use ironcollect::*;
//! use ironcollect::testing::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! init_tracing();
//!
//! let doubled = collect([1, 2, 3]).map(|x| x * 2);
//! assert_values_equal(&doubled, &[2, 4, 6]);
//! assert_all(&doubled, |x| x % 2 == 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: same keys, same values, same order
//! - [`assert_collections_canonical_equal`]: same values in any order, keys ignored
//! - [`assert_values_equal`]: values in order against a slice
//! - [`assert_keys_equal`]: keys in order
//! - [`assert_all`] / [`assert_any`] / [`assert_none`]: predicate checks

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber that writes through the test harness.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Safe to call from
/// every test; only the first call installs anything, and an already
/// installed global subscriber is left alone.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
