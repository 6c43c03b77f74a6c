//! Common test utilities for findev-polars tests

use polars::prelude::*;

/// Country-year style frame with one heavy outlier per indicator
pub fn create_test_df() -> DataFrame {
    df![
        "GFDD.DI.12" => [5.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 400.0],
        "GFDD.SI.01" => [2.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 90.0],
        "Year" => [2004.0, 2005.0, 2006.0, 2007.0, 2008.0, 2009.0, 2010.0, 2011.0, 2012.0, 2013.0],
    ]
    .unwrap()
}

/// Extract a column as plain f64 values, panicking on nulls
pub fn column_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}
