//! Error types for chart rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Plotters drawing failure. The backend error borrows the pixel buffer,
    /// so it is flattened to a message here.
    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        Self::Render(err.to_string())
    }
}
