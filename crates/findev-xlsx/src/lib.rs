//! Workbook I/O for the financial development analysis
//!
//! Two halves:
//! - [`read_sheet`] loads one named worksheet into a Polars DataFrame
//!   (numeric-or-empty columns as `Float64`, everything else as `String`)
//! - [`ReportWriter`] queues DataFrame sheets and embedded-image sheets and
//!   saves them as a single workbook on [`ReportWriter::finish`]

mod error;
mod read;
mod write;

pub use error::{Error, Result};
pub use read::read_sheet;
pub use write::{sanitize_sheet_name, ReportWriter};
