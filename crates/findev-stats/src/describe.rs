//! Five-number descriptive summary: mean, median, std, min, max

use crate::quantile::{quantile_sorted, sorted_finite};

/// Statistic labels in report order.
pub const STATISTIC_NAMES: [&str; 5] = ["mean", "median", "std", "min", "max"];

/// Descriptive summary of one sample.
///
/// All fields are computed over the finite values of the sample; a sample with
/// no finite values yields NaN throughout, and `std` needs at least two values
/// (sample standard deviation, ddof = 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Compute the summary for a sample, skipping non-finite values.
    pub fn of(data: &[f64]) -> Self {
        let sorted = sorted_finite(data);
        let n = sorted.len();
        if n == 0 {
            return Self {
                mean: f64::NAN,
                median: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };
        // quantile_sorted cannot fail here: 0.5 is in range and n > 0
        let median = quantile_sorted(&sorted, 0.5).unwrap_or(f64::NAN);

        Self {
            mean,
            median,
            std,
            min: sorted[0],
            max: sorted[n - 1],
        }
    }

    /// Values in the order of [`STATISTIC_NAMES`].
    pub fn values(&self) -> [f64; 5] {
        [self.mean, self.median, self.std, self.min, self.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_basic() {
        let s = Summary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_relative_eq!(s.mean, 5.0);
        assert_relative_eq!(s.median, 4.5);
        // sample std (ddof = 1) of this classic sample
        assert_relative_eq!(s.std, 2.138089935299395, epsilon = 1e-12);
        assert_relative_eq!(s.min, 2.0);
        assert_relative_eq!(s.max, 9.0);
    }

    #[test]
    fn test_summary_skips_missing() {
        let s = Summary::of(&[1.0, f64::NAN, 3.0]);
        assert_relative_eq!(s.mean, 2.0);
        assert_relative_eq!(s.median, 2.0);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.max, 3.0);
    }

    #[test]
    fn test_summary_empty_is_nan() {
        let s = Summary::of(&[]);
        assert!(s.mean.is_nan());
        assert!(s.median.is_nan());
        assert!(s.std.is_nan());
        assert!(s.min.is_nan());
        assert!(s.max.is_nan());
    }

    #[test]
    fn test_summary_single_value_has_nan_std() {
        let s = Summary::of(&[5.0]);
        assert_relative_eq!(s.mean, 5.0);
        assert!(s.std.is_nan());
    }

    #[test]
    fn test_statistic_names_match_values_order() {
        assert_eq!(STATISTIC_NAMES, ["mean", "median", "std", "min", "max"]);
        let s = Summary::of(&[1.0, 2.0, 3.0]);
        let values = s.values();
        assert_relative_eq!(values[0], s.mean);
        assert_relative_eq!(values[4], s.max);
    }
}
