//! Polars integration for the financial development analysis
//!
//! This crate provides a single extension trait over Polars DataFrames for the
//! operations the pipeline needs: winsorization, five-number summaries,
//! crisis-window year filtering, and group means.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use findev_polars::{FindevStatsExt, WinsorLimits, YearFilter};
//!
//! let df = df![
//!     "GFDD.SI.01" => [12.0, 14.0, 3.0, 18.0],
//!     "Year" => [2005.0, 2007.0, 2008.0, 2010.0],
//! ].unwrap();
//!
//! let clean = df.winsorize_columns(&["GFDD.SI.01"], WinsorLimits::default()).unwrap();
//! let pre = clean.filter_years("Year", YearFilter::AtMost(2007)).unwrap();
//! assert_eq!(pre.height(), 2);
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::{WinsorLimits, YearFilter};
pub use error::{Error, Result};
pub use traits::FindevStatsExt;
