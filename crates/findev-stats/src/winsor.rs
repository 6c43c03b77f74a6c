//! Winsorization: clipping a sample at chosen lower/upper percentiles

use crate::error::{Error, Result};
use crate::quantile::{quantile_sorted, sorted_finite};

/// Clip bounds derived from a sample's own distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorBounds {
    pub lower: f64,
    pub upper: f64,
}

impl WinsorBounds {
    /// Clip one value into the bounds. Non-finite values pass through
    /// untouched so missing data stays missing.
    pub fn clip(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        value.clamp(self.lower, self.upper)
    }
}

/// Compute winsorization bounds at the given lower/upper probabilities.
///
/// Returns `Ok(None)` when the sample has no finite values, so callers can
/// leave an all-missing column untouched rather than fail the run.
pub fn winsor_bounds(data: &[f64], lower_p: f64, upper_p: f64) -> Result<Option<WinsorBounds>> {
    if lower_p > upper_p {
        return Err(Error::InvalidParameter(format!(
            "lower probability {lower_p} exceeds upper probability {upper_p}"
        )));
    }

    let sorted = sorted_finite(data);
    if sorted.is_empty() {
        return Ok(None);
    }

    Ok(Some(WinsorBounds {
        lower: quantile_sorted(&sorted, lower_p)?,
        upper: quantile_sorted(&sorted, upper_p)?,
    }))
}

/// Winsorize a sample in place at the 5th/95th percentiles of its own
/// distribution.
pub fn winsorize_default(data: &mut [f64]) -> Result<()> {
    winsorize(data, 0.05, 0.95)
}

/// Winsorize a sample in place at the given percentiles.
pub fn winsorize(data: &mut [f64], lower_p: f64, upper_p: f64) -> Result<()> {
    if let Some(bounds) = winsor_bounds(data, lower_p, upper_p)? {
        for v in data.iter_mut() {
            *v = bounds.clip(*v);
        }
    }
    Ok(())
}
