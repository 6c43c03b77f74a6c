//! Error type for the pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Workbook I/O error: {0}")]
    Xlsx(#[from] findev_xlsx::Error),

    #[error("DataFrame error: {0}")]
    Frame(#[from] findev_polars::Error),

    #[error("Chart error: {0}")]
    Viz(#[from] findev_viz::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;
