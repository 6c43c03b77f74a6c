//! Shared chart styling

/// Output bitmap size in pixels, matching the original 8x6 inch figures.
pub const CHART_SIZE: (u32, u32) = (800, 600);

/// Caption font used across all charts
pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 22);

/// Title and axis labels for one chart
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x: String,
    pub y: String,
}

impl ChartLabels {
    pub fn new(title: &str, x: &str, y: &str) -> Self {
        Self {
            title: title.to_string(),
            x: x.to_string(),
            y: y.to_string(),
        }
    }
}

/// Pad a value range by 5% on each side so points never sit on the frame.
/// Degenerate or empty ranges fall back to a unit span.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
