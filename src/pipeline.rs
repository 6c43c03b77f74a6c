//! The five analysis stages, run once, in order
//!
//! Load the observation sheet, winsorize the three indicator columns, compute
//! the overall and crisis-window summaries, render the three charts, and
//! write everything into one report workbook. Any stage failure aborts the
//! run; there is no partial-output recovery.

use crate::config::*;
use crate::error::Result;
use findev_polars::{FindevStatsExt, WinsorLimits, YearFilter};
use findev_viz::{render_boxplot, render_line, render_scatter, BoxplotGroup, ChartLabels};
use findev_xlsx::{read_sheet, ReportWriter};
use polars::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// What a completed run produced
#[derive(Debug)]
pub struct AnalysisReport {
    /// Column names of the loaded sheet
    pub columns: Vec<String>,
    /// Rows in the cleaned table (winsorization never drops any)
    pub rows: usize,
    /// The report workbook
    pub output_path: PathBuf,
    /// The trend chart, absent when the input has no `Year` column
    pub line_chart: Option<PathBuf>,
    /// Whether the regional pivot sheet was written
    pub has_pivot: bool,
}

/// Run the full analysis.
pub fn run(config: &AnalysisConfig) -> Result<AnalysisReport> {
    // 1. Load
    let df = read_sheet(&config.input_path, &config.sheet_name)?;
    let columns: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("Loaded columns: {:?}", columns);
    info!(rows = df.height(), cols = columns.len(), "sheet loaded");

    // 2. Winsorize the indicator columns at their 5th/95th percentiles.
    // Absent columns are skipped; rows are never dropped.
    let clean = df.winsorize_columns(&WINSORIZED_COLUMNS, WinsorLimits::default())?;
    info!(rows = clean.height(), "winsorization done");

    // 3. Summaries. The overall table requires all four indicators; the
    // crisis split requires `Year` and the z-score column.
    let stats_overall = clean.describe_columns(&INDICATORS)?;

    let pre_crisis = clean.filter_years(YEAR, YearFilter::AtMost(PRE_CRISIS_MAX_YEAR))?;
    let post_crisis = clean.filter_years(YEAR, YearFilter::AtLeast(POST_CRISIS_MIN_YEAR))?;
    let stats_pre = pre_crisis.describe_columns(&[ZSCORE])?;
    let stats_post = post_crisis.describe_columns(&[ZSCORE])?;
    info!(
        pre_rows = pre_crisis.height(),
        post_rows = post_crisis.height(),
        "crisis split done"
    );

    // 4. Charts
    let scatter_path = config.scatter_path();
    let points: Vec<(f64, f64)> = column_f64(&clean, PRIVATE_CREDIT)?
        .into_iter()
        .zip(column_f64(&clean, ZSCORE)?)
        .collect();
    render_scatter(
        &scatter_path,
        &ChartLabels::new(
            "Scatter Plot: Private Credit vs. Z-Score (Overall)",
            "Private Credit to GDP (%)",
            "Z-Score",
        ),
        &points,
    )?;

    let line_chart = if has_column(&clean, YEAR) {
        let trend = clean.mean_by(YEAR, ZSCORE)?;
        let series: Vec<(i32, f64)> = column_f64(&trend, YEAR)?
            .into_iter()
            .zip(column_f64(&trend, ZSCORE)?)
            .map(|(year, mean)| (year as i32, mean))
            .collect();
        let path = config.line_path();
        render_line(
            &path,
            &ChartLabels::new(
                "Trend of Average Z-Score Over Time",
                "Year",
                "Average Z-Score",
            ),
            &series,
        )?;
        Some(path)
    } else {
        None
    };

    let boxplot_path = config.boxplot_path();
    render_boxplot(
        &boxplot_path,
        &ChartLabels::new("Boxplot of Z-Score: Pre- vs. Post-Crisis", "", "Z-Score"),
        &[
            BoxplotGroup::new("Pre-Crisis", column_f64(&pre_crisis, ZSCORE)?),
            BoxplotGroup::new("Post-Crisis", column_f64(&post_crisis, ZSCORE)?),
        ],
    )?;
    info!("charts rendered");

    // 5. Pivot: mean private credit by region, when a region column exists
    let pivot = if has_column(&clean, REGION) {
        let pivot = clean.mean_by(REGION, PRIVATE_CREDIT)?;
        (pivot.height() > 0).then_some(pivot)
    } else {
        None
    };

    // 6. Report workbook: sheets queue in order, saved in one scoped write
    let output_path = config.output_path();
    let mut writer = ReportWriter::new();
    writer.add_frame(SHEET_CLEAN, &clean)?;
    writer.add_frame(SHEET_OVERALL, &stats_overall)?;
    writer.add_frame(SHEET_PRE, &stats_pre)?;
    writer.add_frame(SHEET_POST, &stats_post)?;
    if let Some(pivot) = &pivot {
        writer.add_frame(SHEET_PIVOT, pivot)?;
    }
    writer.add_image(SHEET_SCATTER, &scatter_path)?;
    if let Some(line_path) = &line_chart {
        writer.add_image(SHEET_LINE, line_path)?;
    }
    writer.add_image(SHEET_BOXPLOT, &boxplot_path)?;
    writer.finish(&output_path)?;

    println!(
        "Excel file '{}' has been created with all analyses.",
        output_path.display()
    );

    Ok(AnalysisReport {
        columns,
        rows: clean.height(),
        output_path,
        line_chart,
        has_pivot: pivot.is_some(),
    })
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names_str().iter().any(|c| *c == name)
}

/// Column as `f64` values, nulls as NaN (chart renderers skip non-finite).
fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let casted = df.column(name)?.cast(&DataType::Float64)?;
    Ok(casted
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}
