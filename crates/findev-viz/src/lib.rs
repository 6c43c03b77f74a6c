//! Chart rendering for the financial development analysis
//!
//! Three renderers, all writing 800x600 PNGs with a caption, axis labels, and
//! a mesh grid:
//! - [`render_scatter`] for indicator-vs-indicator point clouds
//! - [`render_line`] for year-indexed trends
//! - [`render_boxplot`] for labelled distribution comparisons

mod boxplot;
mod error;
mod line;
mod scatter;
mod style;

pub use boxplot::{render_boxplot, BoxplotGroup};
pub use error::{Error, Result};
pub use line::render_line;
pub use scatter::render_scatter;
pub use style::{ChartLabels, CHART_SIZE};
