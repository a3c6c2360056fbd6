//! Statistical combiners: `AverageF64`, `Median`

use super::CombineFn;

/* ===================== AverageF64 ===================== */

/// Arithmetic mean as `f64`.
///
/// Values must be convertible into `f64` via `Into<f64>`.
///
/// - Accumulator: `(sum_f64, count_u64)`
/// - Output: `Option<f64>` (`None` for empty input)
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<V, (f64, u64), Option<f64>> for AverageF64
where
    V: Into<f64>,
{
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, acc: (f64, u64)) -> Option<f64> {
        if acc.1 == 0 {
            None
        } else {
            Some(acc.0 / (acc.1 as f64))
        }
    }
}

/* ===================== Median ===================== */

/// Median as `f64`; the mean of the two middle values for even counts.
///
/// - Accumulator: `Vec<f64>`
/// - Output: `Option<f64>` (`None` for empty input)
#[derive(Clone, Copy, Debug, Default)]
pub struct Median;

impl<V> CombineFn<V, Vec<f64>, Option<f64>> for Median
where
    V: Into<f64>,
{
    fn create(&self) -> Vec<f64> {
        Vec::new()
    }

    fn add_input(&self, acc: &mut Vec<f64>, v: V) {
        acc.push(v.into());
    }

    fn finish(&self, mut acc: Vec<f64>) -> Option<f64> {
        if acc.is_empty() {
            return None;
        }
        acc.sort_by(f64::total_cmp);
        let mid = acc.len() / 2;
        if acc.len() % 2 == 1 {
            Some(acc[mid])
        } else {
            Some((acc[mid - 1] + acc[mid]) / 2.0)
        }
    }
}
