//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(b';');
    builder
}

fn write_rows<T: Serialize, W: Write>(rows: &[T], sink: W) -> Result<W> {
    let mut writer = builder().from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    let sink = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(sink)
}

/// Writes rows to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Header: the row type's field names, written before the first row
/// - Encoding: UTF-8
///
/// An empty slice produces an empty file.
pub fn write_csv<T: Serialize>(rows: &[T], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file)?;
    Ok(())
}

/// Converts rows to a CSV string, same format as [`write_csv`].
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let bytes = write_rows(rows, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}
