//! Descriptive statistics kernel for the financial development analysis
//!
//! This crate provides the small set of estimators the pipeline needs:
//! - interpolated quantiles (the definition spreadsheet tooling uses)
//! - winsorization at per-column percentile bounds
//! - five-number summaries (mean, median, std, min, max)
//!
//! All operations work on `f64` slices and skip non-finite values, so missing
//! observations never poison an aggregate.
//!
//! # Example
//!
//! ```rust
//! use findev_stats::{Summary, winsor_bounds};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 100.0];
//! let bounds = winsor_bounds(&sample, 0.05, 0.95).unwrap().unwrap();
//! assert!(bounds.upper < 100.0);
//!
//! let summary = Summary::of(&sample);
//! assert_eq!(summary.median, 3.0);
//! ```

mod describe;
mod error;
mod quantile;
mod winsor;

pub use describe::{Summary, STATISTIC_NAMES};
pub use error::{Error, Result};
pub use quantile::{quantile, quantile_sorted, sorted_finite};
pub use winsor::{winsor_bounds, winsorize, winsorize_default, WinsorBounds};
