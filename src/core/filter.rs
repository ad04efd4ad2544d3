//! Filter transcripts by sender and date range.
//!
//! This module provides [`SenderFilter`], the "Overall or one sender"
//! selector every statistic accepts, and [`FilterConfig`] for combined
//! sender + date views.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date (whole day) |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from one sender |
//!
//! # Examples
//!
//! ```
//! use chatstat::core::filter::FilterConfig;
//! use chatstat::TranscriptParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let transcript = TranscriptParser::new().parse_str(
//!     "1/1/24, 9:00 AM - Alice: old\n15/6/24, 9:00 AM - Alice: new\n15/6/24, 9:05 AM - Bob: hi\n",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_sender("Alice")
//!     .with_date_from("2024-06-01")?;
//!
//! let view = config.apply(&transcript);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view.records()[0].body(), "new");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; an unknown sender yields an empty view
//! - Records without timestamps are **excluded** when date filters are active
//! - Multiple filters are combined with AND logic

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::OVERALL;
use crate::error::ChatstatError;
use crate::record::MessageRecord;
use crate::transcript::Transcript;

/// Either every sender, or exactly one.
///
/// Converting from a string maps the `"Overall"` sentinel to
/// [`SenderFilter::Overall`]; anything else selects that sender.
///
/// ```
/// use chatstat::core::filter::SenderFilter;
///
/// assert_eq!(SenderFilter::from("Overall"), SenderFilter::Overall);
/// assert!(SenderFilter::from("Alice").matches("Alice"));
/// assert!(!SenderFilter::from("Alice").matches("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SenderFilter {
    /// No filtering.
    #[default]
    Overall,
    /// Only this sender.
    Sender(String),
}

impl SenderFilter {
    /// Returns `true` if a record from `sender` passes the filter.
    pub fn matches(&self, sender: &str) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => name == sender,
        }
    }

    /// Returns `true` if this is the no-filter value.
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }
}

impl From<&str> for SenderFilter {
    fn from(value: &str) -> Self {
        if value == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(value.to_string())
        }
    }
}

impl From<String> for SenderFilter {
    fn from(value: String) -> Self {
        if value == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(value)
        }
    }
}

impl From<Option<&str>> for SenderFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(SenderFilter::Overall, SenderFilter::from)
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderFilter::Overall => f.write_str(OVERALL),
            SenderFilter::Sender(name) => f.write_str(name),
        }
    }
}

/// Configuration for filtering a transcript by date and sender.
///
/// Dates are calendar days; both ends are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this day.
    pub from: Option<NaiveDate>,

    /// Include only records on or before this day.
    pub to: Option<NaiveDate>,

    /// Include only records matching this sender filter.
    pub sender: SenderFilter,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.from = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.to = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets both ends of the date range from already-parsed dates.
    #[must_use]
    pub fn with_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<SenderFilter>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || !self.sender.is_overall()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Returns `true` if a record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if !self.sender.matches(record.sender()) {
            return false;
        }

        if self.has_date_filter() {
            let Some(date) = record.date_only() else {
                // No timestamp - exclude from date-filtered results
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }

        true
    }

    /// Returns a new transcript containing only matching records.
    pub fn apply(&self, transcript: &Transcript) -> Transcript {
        if !self.is_active() {
            return transcript.clone();
        }
        Transcript::from_records(
            transcript
                .iter()
                .filter(|r| self.matches(r))
                .cloned()
                .collect(),
        )
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatstatError::invalid_date(date_str))
}
