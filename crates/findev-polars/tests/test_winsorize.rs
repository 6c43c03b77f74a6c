//! Integration tests for winsorization on DataFrames

mod common;

use common::{column_values, create_test_df};
use findev_polars::{FindevStatsExt, WinsorLimits};
use findev_stats::winsor_bounds;

#[test]
fn test_winsorize_preserves_shape_and_columns() {
    let df = create_test_df();
    let clean = df
        .winsorize_columns(&["GFDD.DI.12", "GFDD.SI.01"], WinsorLimits::default())
        .unwrap();

    assert_eq!(clean.height(), df.height());
    assert_eq!(clean.get_column_names_str(), df.get_column_names_str());
}

#[test]
fn test_clipped_values_inside_original_bounds() {
    let df = create_test_df();
    let original = column_values(&df, "GFDD.DI.12");
    let bounds = winsor_bounds(&original, 0.05, 0.95).unwrap().unwrap();

    let clean = df
        .winsorize_columns(&["GFDD.DI.12"], WinsorLimits::default())
        .unwrap();

    for v in column_values(&clean, "GFDD.DI.12") {
        assert!(v >= bounds.lower && v <= bounds.upper);
    }
}

#[test]
fn test_untouched_columns_are_identical() {
    let df = create_test_df();
    let clean = df
        .winsorize_columns(&["GFDD.DI.12"], WinsorLimits::default())
        .unwrap();

    assert_eq!(
        column_values(&df, "GFDD.SI.01"),
        column_values(&clean, "GFDD.SI.01")
    );
    assert_eq!(column_values(&df, "Year"), column_values(&clean, "Year"));
}
