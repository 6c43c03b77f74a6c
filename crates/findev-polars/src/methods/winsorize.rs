//! Winsorization over DataFrame columns

use super::{has_column, numeric_values};
use crate::{Result, WinsorLimits};
use findev_stats::winsor_bounds;
use polars::prelude::*;

/// Clip the named columns to the quantile bounds of their own distributions.
///
/// Absent columns are skipped without error; the asymmetry with
/// `describe_columns` is deliberate (cleaning tolerates a sparse sheet,
/// reporting does not). Null entries pass through untouched, so the output
/// frame has exactly the input's shape.
pub(super) fn winsorize_columns(
    df: &DataFrame,
    columns: &[&str],
    limits: WinsorLimits,
) -> Result<DataFrame> {
    let mut out = df.clone();

    for name in columns {
        if !has_column(df, name) {
            continue;
        }

        let values = numeric_values(df.column(name)?)?;
        let Some(bounds) = winsor_bounds(&values, limits.lower, limits.upper)? else {
            // no finite values to derive bounds from
            continue;
        };

        let ca = df.column(name)?.cast(&DataType::Float64)?;
        let clipped: Float64Chunked = ca
            .f64()?
            .into_iter()
            .map(|opt| opt.map(|v| bounds.clip(v)))
            .collect();
        let series = clipped.into_series().with_name((*name).into());
        out.with_column(series)?;
    }

    Ok(out)
}
