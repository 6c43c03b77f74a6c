//! Grouped boxplot rendering

use crate::error::{Error, Result};
use crate::style::{padded_range, ChartLabels, CAPTION_FONT, CHART_SIZE};
use plotters::prelude::*;
use std::path::Path;

/// One labelled distribution on the boxplot's category axis
#[derive(Debug, Clone)]
pub struct BoxplotGroup {
    pub label: String,
    pub values: Vec<f64>,
}

impl BoxplotGroup {
    pub fn new(label: &str, values: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            values,
        }
    }

    fn finite_values(&self) -> Vec<f64> {
        self.values.iter().copied().filter(|v| v.is_finite()).collect()
    }
}

/// Render vertical boxplots, one per group, to a PNG file.
///
/// Groups with no finite values keep their slot on the category axis but draw
/// no box. At least one group is required.
pub fn render_boxplot(path: &Path, labels: &ChartLabels, groups: &[BoxplotGroup]) -> Result<()> {
    if groups.is_empty() {
        return Err(Error::InvalidInput(
            "boxplot needs at least one group".to_string(),
        ));
    }

    let group_labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    let (y_min, y_max) = padded_range(groups.iter().flat_map(|g| g.finite_values()));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&labels.title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(
            group_labels[..].into_segmented(),
            y_min as f32..y_max as f32,
        )
        .map_err(Error::render)?;

    chart
        .configure_mesh()
        .x_desc(labels.x.as_str())
        .y_desc(labels.y.as_str())
        .draw()
        .map_err(Error::render)?;

    chart
        .draw_series(groups.iter().zip(group_labels.iter()).filter_map(|(group, label)| {
            let values = group.finite_values();
            if values.is_empty() {
                return None;
            }
            let quartiles = Quartiles::new(&values);
            Some(
                Boxplot::new_vertical(SegmentValue::CenterOf(label), &quartiles)
                    .width(40)
                    .whisker_width(0.5),
            )
        }))
        .map_err(Error::render)?;

    root.present().map_err(Error::render)?;
    Ok(())
}
