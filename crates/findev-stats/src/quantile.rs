//! Interpolated quantile estimation
//!
//! Uses the linear-interpolation definition: for a sorted sample of size `n`
//! the `p` quantile sits at rank `h = (n - 1) * p`, interpolating between the
//! neighbouring order statistics when `h` is fractional. This matches the
//! default quantile definition of mainstream dataframe libraries, which the
//! winsorization step depends on for reproducible clip bounds.

use crate::error::{Error, Result};

/// Sort a copy of the finite values of `data` in ascending order.
///
/// NaN and infinite values are excluded so they cannot poison the rank
/// arithmetic below.
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    values
}

/// Compute the `p` quantile of a sorted sample.
///
/// The caller guarantees `sorted` is ascending and free of non-finite values
/// (see [`sorted_finite`]). Returns an error when `p` is outside [0, 1] or the
/// sample is empty.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_probability(p));
    }
    if sorted.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }

    let n = sorted.len();
    if n == 1 {
        return Ok(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Compute the `p` quantile of an unsorted sample, ignoring non-finite values.
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    quantile_sorted(&sorted_finite(data), p)
}
