//! Year filtering and group means

use super::has_column;
use crate::{Error, Result, YearFilter};
use polars::prelude::*;

/// Keep rows whose year satisfies the filter. Null years match neither side.
pub(super) fn filter_years(
    df: &DataFrame,
    year_col: &str,
    filter: YearFilter,
) -> Result<DataFrame> {
    if !has_column(df, year_col) {
        return Err(Error::InvalidColumn(year_col.to_string()));
    }

    let predicate = match filter {
        YearFilter::AtMost(y) => col(year_col).lt_eq(lit(y)),
        YearFilter::AtLeast(y) => col(year_col).gt_eq(lit(y)),
    };

    Ok(df.clone().lazy().filter(predicate).collect()?)
}

/// Mean of `value_col` per `group_col`, rows with a null group key excluded,
/// sorted ascending by group.
pub(super) fn mean_by(df: &DataFrame, group_col: &str, value_col: &str) -> Result<DataFrame> {
    for name in [group_col, value_col] {
        if !has_column(df, name) {
            return Err(Error::InvalidColumn(name.to_string()));
        }
    }

    let out = df
        .clone()
        .lazy()
        .filter(col(group_col).is_not_null())
        .group_by([col(group_col)])
        .agg([col(value_col).mean()])
        .sort([group_col], Default::default())
        .collect()?;

    Ok(out)
}
