//! Loading one worksheet into a Polars DataFrame

use crate::error::{Error, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Read the named sheet of an xlsx workbook into a DataFrame.
///
/// The first row is taken as the header. A column whose body cells are all
/// numeric or empty becomes `Float64` (empty cells as null); any other column
/// becomes `String`. A missing file or missing sheet is fatal.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<DataFrame> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(sheet)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(Error::EmptySheet(sheet.to_string()));
    };

    let names: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::Empty => format!("column_{i}"),
            other => other.to_string(),
        })
        .collect();

    let body: Vec<&[Data]> = rows.collect();
    debug!(sheet, rows = body.len(), cols = names.len(), "loaded sheet");

    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for (j, name) in names.iter().enumerate() {
        let cells = body.iter().map(|row| &row[j]);
        columns.push(build_column(name, cells));
    }

    Ok(DataFrame::new(columns)?)
}

/// Numeric reading of one cell, when the cell is numeric at all.
fn numeric_cell(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::DateTime(dt) => Some(dt.as_f64()),
        _ => None,
    }
}

fn build_column<'a>(name: &str, cells: impl Iterator<Item = &'a Data> + Clone) -> Column {
    let is_numeric = cells
        .clone()
        .all(|cell| matches!(cell, Data::Empty) || numeric_cell(cell).is_some());

    if is_numeric {
        let values: Vec<Option<f64>> = cells.map(numeric_cell).collect();
        Series::new(name.into(), values).into()
    } else {
        let values: Vec<Option<String>> = cells
            .map(|cell| match cell {
                Data::Empty => None,
                other => Some(other.to_string()),
            })
            .collect();
        Series::new(name.into(), values).into()
    }
}
