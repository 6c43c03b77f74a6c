//! Core trait for descriptive statistics on Polars DataFrames

use crate::{Result, WinsorLimits, YearFilter};
use findev_stats::Summary;
use polars::prelude::*;

/// Extension trait for the analysis operations on Polars DataFrames
pub trait FindevStatsExt {
    /// Winsorize the named columns at the given percentile limits.
    ///
    /// Each column is clipped to the quantile bounds of its own distribution.
    /// Columns absent from the frame are silently skipped, as are columns with
    /// no finite values. Null entries stay null.
    ///
    /// # Returns
    /// A new DataFrame with the same row count and column set
    fn winsorize_columns(&self, columns: &[&str], limits: WinsorLimits) -> Result<DataFrame>;

    /// Compute {mean, median, std, min, max} for the named columns.
    ///
    /// Unlike [`winsorize_columns`](Self::winsorize_columns), a missing column
    /// here is an error.
    ///
    /// # Returns
    /// DataFrame with a leading `statistic` label column and one column per
    /// input name, five rows
    fn describe_columns(&self, columns: &[&str]) -> Result<DataFrame>;

    /// Five-number summary of a single numeric column
    fn column_summary(&self, column: &str) -> Result<Summary>;

    /// Keep rows whose year matches the filter.
    ///
    /// Rows with a null year match neither side of the filter and are always
    /// dropped.
    fn filter_years(&self, year_col: &str, filter: YearFilter) -> Result<DataFrame>;

    /// Mean of `value_col` grouped by `group_col`, sorted by group.
    ///
    /// Rows with a null group key are excluded.
    ///
    /// # Returns
    /// Two-column DataFrame: the group keys and their means
    fn mean_by(&self, group_col: &str, value_col: &str) -> Result<DataFrame>;
}
