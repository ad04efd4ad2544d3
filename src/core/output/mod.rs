//! Output format writers.
//!
//! Every analysis result is a slice of `Serialize` rows (or one
//! `Serialize` value), so the same writers serve all of them:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty-printed JSON - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, to_jsonl};
//! use chatstat::core::filter::SenderFilter;
//! use chatstat::stats::activity_by_weekday;
//! use chatstat::TranscriptParser;
//!
//! let t = TranscriptParser::new().parse_str("1/1/24, 9:00 AM - Alice: hi\n");
//! let rows = activity_by_weekday(&t, &SenderFilter::Overall);
//!
//! let csv = to_csv(&rows)?;
//! assert!(csv.starts_with("label;count\nMonday;1\n"));
//! assert_eq!(to_jsonl(&rows)?.lines().count(), 7);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
