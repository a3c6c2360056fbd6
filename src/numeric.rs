//! Numeric view used by the scalar aggregates (`sum`, `avg`, `median`).
//!
//! Implemented for every primitive integer and float, and for [`Value`],
//! whose non-numeric variants are rejected with
//! [`CollectionError::InvalidArgument`].

use crate::error::{CollectionError, Result};
use crate::value::Value;

/// A value that can be summed and read as `f64`.
pub trait Numeric: Sized {
    /// Additive identity; the sum of an empty collection.
    fn zero() -> Self;

    /// `self + rhs`, failing on overflow or a non-numeric operand.
    ///
    /// # Errors
    /// `InvalidArgument` when the addition has no numeric result.
    fn try_add(self, rhs: Self) -> Result<Self>;

    /// The value as `f64`.
    ///
    /// # Errors
    /// `InvalidArgument` for values with no numeric reading.
    fn to_f64(&self) -> Result<f64>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn zero() -> Self {
                0
            }

            fn try_add(self, rhs: Self) -> Result<Self> {
                self.checked_add(rhs).ok_or_else(|| {
                    CollectionError::invalid(format!(
                        "{self} + {rhs} overflows {}",
                        stringify!($t)
                    ))
                })
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_f64(&self) -> Result<f64> {
                Ok(*self as f64)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn zero() -> Self {
                0.0
            }

            fn try_add(self, rhs: Self) -> Result<Self> {
                Ok(self + rhs)
            }

            #[allow(clippy::cast_lossless)]
            fn to_f64(&self) -> Result<f64> {
                Ok(*self as f64)
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// `Int + Int` stays an integer (overflow is an error); any float operand
/// makes the result a float. `Null` is the identity so an empty sum is
/// `Value::default()`, but a `Null` element is still rejected.
impl Numeric for Value {
    fn zero() -> Self {
        Self::Null
    }

    #[allow(clippy::cast_precision_loss)]
    fn try_add(self, rhs: Self) -> Result<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a.try_add(b).map(Self::Int),
            (Self::Int(a), Self::Float(b)) => Ok(Self::Float(a as f64 + b)),
            (Self::Float(a), Self::Int(b)) => Ok(Self::Float(a + b as f64)),
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(a + b)),
            (Self::Null, rhs @ (Self::Int(_) | Self::Float(_))) => Ok(rhs),
            (lhs, rhs) => Err(CollectionError::invalid(format!(
                "cannot add {rhs:?} to {lhs:?}"
            ))),
        }
    }

    fn to_f64(&self) -> Result<f64> {
        self.as_f64()
            .ok_or_else(|| CollectionError::invalid(format!("{self:?} is not numeric")))
    }
}
