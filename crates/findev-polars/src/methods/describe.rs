//! Five-number summaries over DataFrame columns

use super::numeric_values;
use crate::{Error, Result};
use findev_stats::{Summary, STATISTIC_NAMES};
use polars::prelude::*;

/// Build the summary table for the named columns.
///
/// Output shape: a `statistic` label column with the five rows
/// {mean, median, std, min, max}, then one `f64` column per requested name.
/// Missing columns are an error here.
pub(super) fn describe_columns(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut out_cols: Vec<Column> = Vec::with_capacity(columns.len() + 1);
    out_cols.push(Series::new("statistic".into(), STATISTIC_NAMES.to_vec()).into());

    for name in columns {
        let column = df
            .column(name)
            .map_err(|_| Error::InvalidColumn(name.to_string()))?;
        let summary = Summary::of(&numeric_values(column)?);
        out_cols.push(Series::new((*name).into(), summary.values().to_vec()).into());
    }

    Ok(DataFrame::new(out_cols)?)
}
