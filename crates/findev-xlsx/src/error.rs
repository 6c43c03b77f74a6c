//! Error types for workbook I/O

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading the input workbook failed (missing file, bad archive,
    /// missing sheet)
    #[error("Workbook read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// Writing the output workbook failed
    #[error("Workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The requested sheet exists but holds no rows
    #[error("Sheet '{0}' is empty")]
    EmptySheet(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
