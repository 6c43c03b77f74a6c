//! Configuration types for DataFrame statistics

use crate::{Error, Result};

/// Percentile limits for winsorization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WinsorLimits {
    pub lower: f64,
    pub upper: f64,
}

impl WinsorLimits {
    /// Create limits, validating that both probabilities are in [0, 1] and
    /// ordered.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) {
            return Err(Error::InvalidParameter(format!(
                "winsor limits ({lower}, {upper}) must lie in [0, 1]"
            )));
        }
        if lower > upper {
            return Err(Error::InvalidParameter(format!(
                "lower winsor limit {lower} exceeds upper limit {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }
}

impl Default for WinsorLimits {
    /// 5th/95th percentile clipping
    fn default() -> Self {
        Self {
            lower: 0.05,
            upper: 0.95,
        }
    }
}

/// Inclusive one-sided year filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    /// Keep rows with year <= the given value
    AtMost(i32),
    /// Keep rows with year >= the given value
    AtLeast(i32),
}
