//! JSON Lines (JSONL) output writer.
//!
//! One object per line; convenient for piping into `jq` or loading row by
//! row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

fn write_lines<T: Serialize, W: Write>(rows: &[T], writer: &mut W) -> Result<()> {
    for row in rows {
        let line = serde_json::to_string(row)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes rows to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"label":"Alice","count":3}
/// {"label":"Bob","count":1}
/// ```
pub fn write_jsonl<T: Serialize>(rows: &[T], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(rows, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts rows to a JSONL string, same format as [`write_jsonl`].
pub fn to_jsonl<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LabeledCount;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let rows = vec![LabeledCount::new("Alice", 3), LabeledCount::new("Bob", 1)];

        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&rows, temp_file.path()).unwrap();

        let file = std::fs::File::open(temp_file.path()).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["label"], "Alice");
        assert_eq!(first["count"], 3);
    }

    #[test]
    fn test_to_jsonl_no_array_brackets() {
        let content = to_jsonl(&[LabeledCount::new("Alice", 1)]).unwrap();
        assert_eq!(content, "{\"label\":\"Alice\",\"count\":1}\n");
        assert!(!content.contains('['));
    }
}
