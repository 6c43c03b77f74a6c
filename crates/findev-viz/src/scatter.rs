//! Scatter chart rendering

use crate::error::{Error, Result};
use crate::style::{padded_range, ChartLabels, CAPTION_FONT, CHART_SIZE};
use plotters::prelude::*;
use std::path::Path;

/// Render a scatter chart of `(x, y)` points to a PNG file.
///
/// Pairs with a non-finite coordinate are skipped, mirroring how plotting
/// libraries drop missing observations.
pub fn render_scatter(path: &Path, labels: &ChartLabels, points: &[(f64, f64)]) -> Result<()> {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let (x_min, x_max) = padded_range(finite.iter().map(|(x, _)| *x));
    let (y_min, y_max) = padded_range(finite.iter().map(|(_, y)| *y));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(Error::render)?;

    chart
        .configure_mesh()
        .x_desc(labels.x.as_str())
        .y_desc(labels.y.as_str())
        .draw()
        .map_err(Error::render)?;

    chart
        .draw_series(
            finite
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 3, BLUE.mix(0.6).filled())),
        )
        .map_err(Error::render)?;

    root.present().map_err(Error::render)?;
    Ok(())
}
