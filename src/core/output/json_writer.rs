//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Writes any serializable result to a file as pretty-printed JSON.
///
/// # Format
/// ```json
/// [
///   {"label": "Alice", "count": 3},
///   {"label": "Bob", "count": 1}
/// ]
/// ```
pub fn write_json<T: Serialize + ?Sized>(value: &T, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(value)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts any serializable result to a pretty-printed JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
