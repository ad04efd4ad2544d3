//! Core plumbing shared by every analysis.
//!
//! This module contains:
//! - [`filter`] - Sender selection and date-range views of a transcript
//! - [`output`] - Row writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstat::core::{
//!     FilterConfig, SenderFilter,
//!     to_csv, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{FilterConfig, SenderFilter, parse_date};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
