//! Financial development analysis pipeline
//!
//! A single-pass analysis of the Global Financial Development Database: load
//! one sheet, winsorize three indicators, summarize overall and around the
//! 2008 crisis, render three charts, and write one report workbook with the
//! charts embedded.
//!
//! The heavy lifting lives in the workspace crates, re-exported here:
//! - [`findev_stats`] — quantiles, winsorization, five-number summaries
//! - [`findev_polars`] — the DataFrame operations
//! - [`findev_viz`] — chart rendering
//! - [`findev_xlsx`] — workbook reading and report writing

pub mod config;
mod error;
pub mod pipeline;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use pipeline::{run, AnalysisReport};

// Re-export workspace crates
pub use findev_polars;
pub use findev_stats;
pub use findev_viz;
pub use findev_xlsx;
