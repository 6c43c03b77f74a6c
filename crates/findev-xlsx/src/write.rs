//! Report workbook writing

use crate::error::Result;
use polars::prelude::*;
use rust_xlsxwriter::{Image, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Characters Excel forbids in sheet names
const FORBIDDEN: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Replace forbidden characters and enforce the 31-character sheet name limit.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '-' } else { c })
        .collect();
    cleaned.chars().take(31).collect()
}

/// Scoped writer for the output workbook.
///
/// Sheets are queued in memory in the order they are added; nothing touches
/// disk until [`finish`](Self::finish) saves the workbook and consumes the
/// writer, so an aborted run never leaves a half-written file behind.
pub struct ReportWriter {
    workbook: Workbook,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
        }
    }

    /// Append a sheet holding a DataFrame: one header row with the column
    /// names, then the data. Nulls and non-finite numbers become blank cells.
    pub fn add_frame(&mut self, name: &str, df: &DataFrame) -> Result<&mut Self> {
        let sheet_name = sanitize_sheet_name(name);
        debug!(sheet = %sheet_name, rows = df.height(), "adding data sheet");
        let worksheet = self.workbook.add_worksheet().set_name(&sheet_name)?;

        for (c, column) in df.get_columns().iter().enumerate() {
            let col = c as u16;
            worksheet.write_string(0, col, column.name().as_str())?;
            write_column(worksheet, col, column)?;
        }
        Ok(self)
    }

    /// Append a sheet with a single image anchored at cell B2.
    pub fn add_image(&mut self, name: &str, image_path: &Path) -> Result<&mut Self> {
        let sheet_name = sanitize_sheet_name(name);
        debug!(sheet = %sheet_name, path = %image_path.display(), "adding image sheet");
        let worksheet = self.workbook.add_worksheet().set_name(&sheet_name)?;
        let image = Image::new(image_path)?;
        worksheet.insert_image(1, 1, &image)?;
        Ok(self)
    }

    /// Save the workbook and release the writer.
    pub fn finish(mut self, path: &Path) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_column(worksheet: &mut Worksheet, col: u16, column: &Column) -> Result<()> {
    let numeric = matches!(
        column.dtype(),
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    );
    if numeric {
        let casted = column.cast(&DataType::Float64)?;
        for (r, value) in casted.f64()?.into_iter().enumerate() {
            if let Some(v) = value {
                if v.is_finite() {
                    worksheet.write_number(r as u32 + 1, col, v)?;
                }
            }
        }
    } else {
        let series = column.as_materialized_series();
        for r in 0..series.len() {
            match series.get(r)? {
                AnyValue::Null => {}
                AnyValue::String(s) => {
                    worksheet.write_string(r as u32 + 1, col, s)?;
                }
                other => {
                    worksheet.write_string(r as u32 + 1, col, other.to_string())?;
                }
            }
        }
    }
    Ok(())
}
