//! Method implementations for [`FindevStatsExt`]

mod describe;
mod groups;
mod winsorize;

use crate::{Error, FindevStatsExt, Result, WinsorLimits, YearFilter};
use findev_stats::Summary;
use polars::prelude::*;

impl FindevStatsExt for DataFrame {
    fn winsorize_columns(&self, columns: &[&str], limits: WinsorLimits) -> Result<DataFrame> {
        winsorize::winsorize_columns(self, columns, limits)
    }

    fn describe_columns(&self, columns: &[&str]) -> Result<DataFrame> {
        describe::describe_columns(self, columns)
    }

    fn column_summary(&self, column: &str) -> Result<Summary> {
        let column = self
            .column(column)
            .map_err(|_| Error::InvalidColumn(column.to_string()))?;
        Ok(Summary::of(&numeric_values(column)?))
    }

    fn filter_years(&self, year_col: &str, filter: YearFilter) -> Result<DataFrame> {
        groups::filter_years(self, year_col, filter)
    }

    fn mean_by(&self, group_col: &str, value_col: &str) -> Result<DataFrame> {
        groups::mean_by(self, group_col, value_col)
    }
}

/// Extract a column as `f64` values, nulls as NaN.
///
/// Integer and `f32` columns are cast to `f64` first; non-numeric dtypes are a
/// type mismatch.
pub(crate) fn numeric_values(column: &Column) -> Result<Vec<f64>> {
    let casted;
    let column = match column.dtype() {
        DataType::Float64 => column,
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => {
            casted = column.cast(&DataType::Float64)?;
            &casted
        }
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = column.f64()?;
    Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// True when the frame has a column with this name.
pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names_str().iter().any(|c| *c == name)
}
