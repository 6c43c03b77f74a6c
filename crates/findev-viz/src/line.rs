//! Trend line chart rendering

use crate::error::{Error, Result};
use crate::style::{padded_range, ChartLabels, CAPTION_FONT, CHART_SIZE};
use plotters::prelude::*;
use std::path::Path;

/// Render a year-indexed trend line with point markers to a PNG file.
///
/// `series` is expected sorted by year; entries with a non-finite value are
/// skipped.
pub fn render_line(path: &Path, labels: &ChartLabels, series: &[(i32, f64)]) -> Result<()> {
    let finite: Vec<(i32, f64)> = series
        .iter()
        .copied()
        .filter(|(_, v)| v.is_finite())
        .collect();

    let (x_min, x_max) = match (finite.first(), finite.last()) {
        (Some((first, _)), Some((last, _))) if first < last => (*first, *last),
        (Some((only, _)), _) => (*only - 1, *only + 1),
        _ => (0, 1),
    };
    let (y_min, y_max) = padded_range(finite.iter().map(|(_, v)| *v));

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
        .draw_series(LineSeries::new(finite.iter().copied(), &GREEN))
        .map_err(Error::render)?;
    chart
        .draw_series(
            finite
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, GREEN.filled())),
        )
        .map_err(Error::render)?;

    root.present().map_err(Error::render)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.png");
        let labels = ChartLabels::new("Trend", "Year", "Mean");
        let series = vec![(2005, 10.0), (2006, 12.0), (2007, f64::NAN), (2010, 9.0)];

        render_line(&path, &labels, &series).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_line_single_year_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("single.png");
        let labels = ChartLabels::new("Trend", "Year", "Mean");

        render_line(&path, &labels, &[(2010, 5.0)]).unwrap();
        assert!(path.exists());
    }
}
