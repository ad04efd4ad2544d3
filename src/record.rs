//! Parsed and enriched transcript records.
//!
//! This module provides [`MessageRecord`], one attributed message from a chat
//! export, together with its derived fields. Derived fields are computed once
//! in [`MessageRecord::new`] and there are no setters, so they can never drift
//! away from the `timestamp` and `body` they were computed from.
//!
//! # Examples
//!
//! ```
//! use chatstat::record::{MessageRecord, TimePeriod};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 1, 12, 16, 5, 0).unwrap();
//! let record = MessageRecord::new("Alice", "Hello there", Some(ts));
//!
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.word_count(), 2);
//! assert_eq!(record.hour(), Some(16));
//! assert_eq!(record.time_period(), Some(TimePeriod::Afternoon));
//! ```

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::Serialize;

use crate::enrich;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a month number (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Returns the English name of a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekdays in display order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Quarter of the day a message was sent in.
///
/// Boundaries are half-open: `[0, 6)` Night, `[6, 12)` Morning,
/// `[12, 18)` Afternoon, `[18, 24)` Evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TimePeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl TimePeriod {
    /// Buckets an hour of the day.
    ///
    /// ```
    /// use chatstat::record::TimePeriod;
    ///
    /// assert_eq!(TimePeriod::from_hour(0), TimePeriod::Night);
    /// assert_eq!(TimePeriod::from_hour(6), TimePeriod::Morning);
    /// assert_eq!(TimePeriod::from_hour(17), TimePeriod::Afternoon);
    /// assert_eq!(TimePeriod::from_hour(23), TimePeriod::Evening);
    /// ```
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => TimePeriod::Night,
            6..=11 => TimePeriod::Morning,
            12..=17 => TimePeriod::Afternoon,
            _ => TimePeriod::Evening,
        }
    }

    /// Returns all periods in chronological order.
    pub fn all() -> &'static [TimePeriod] {
        &[
            TimePeriod::Night,
            TimePeriod::Morning,
            TimePeriod::Afternoon,
            TimePeriod::Evening,
        ]
    }

    /// Position of this period in [`TimePeriod::all`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the display label.
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Night => "Night",
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Date and time parts derived from a record's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    /// Calendar date without the time.
    pub date_only: NaiveDate,
    pub year: i32,
    /// Month number, 1-12.
    pub month_number: u32,
    pub month_name: &'static str,
    pub day_of_month: u32,
    #[serde(skip)]
    pub weekday: Weekday,
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    /// 12-hour clock time, e.g. `04:05 PM`.
    pub formatted_time: String,
    pub time_period: TimePeriod,
}

impl Calendar {
    /// Derives all parts from a timestamp.
    pub fn from_timestamp(ts: &DateTime<Utc>) -> Self {
        let weekday = ts.weekday();
        Self {
            date_only: ts.date_naive(),
            year: ts.year(),
            month_number: ts.month(),
            month_name: month_name(ts.month()),
            day_of_month: ts.day(),
            weekday,
            day_name: day_name(weekday),
            hour: ts.hour(),
            minute: ts.minute(),
            formatted_time: ts.format("%I:%M %p").to_string(),
            time_period: TimePeriod::from_hour(ts.hour()),
        }
    }
}

/// One attributed message from a transcript, with derived fields.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<DateTime<Utc>>` | `None` when the header didn't parse |
/// | `sender` | `String` | Author, always non-empty |
/// | `body` | `String` | Trimmed message text, possibly a placeholder |
/// | `calendar` | `Option<Calendar>` | Date parts, present iff `timestamp` is |
/// | `word_count` | `usize` | Whitespace-delimited tokens in `body` |
/// | `url_count` | `usize` | Links detected in `body` |
/// | `emoji_count` | `usize` | Emoji (including ZWJ sequences) in `body` |
///
/// Records serialize to JSON with the calendar parts nested; there is no
/// `Deserialize` impl since derived fields are only ever computed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    sender: String,
    body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    calendar: Option<Calendar>,
    word_count: usize,
    url_count: usize,
    emoji_count: usize,
}

impl MessageRecord {
    /// Builds a record and computes every derived field.
    ///
    /// The body is trimmed before anything is derived from it.
    pub fn new(
        sender: impl Into<String>,
        body: impl AsRef<str>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let body = body.as_ref().trim().to_string();
        Self {
            timestamp,
            sender: sender.into(),
            calendar: timestamp.as_ref().map(Calendar::from_timestamp),
            word_count: enrich::word_count(&body),
            url_count: enrich::url_count(&body),
            emoji_count: enrich::emoji_count(&body),
            body,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the trimmed message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if the header parsed.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the derived date parts, if the header parsed.
    pub fn calendar(&self) -> Option<&Calendar> {
        self.calendar.as_ref()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }

    pub fn emoji_count(&self) -> usize {
        self.emoji_count
    }

    // =========================================================================
    // Calendar shortcuts
    // =========================================================================

    pub fn date_only(&self) -> Option<NaiveDate> {
        self.calendar.as_ref().map(|c| c.date_only)
    }

    pub fn hour(&self) -> Option<u32> {
        self.calendar.as_ref().map(|c| c.hour)
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.calendar.as_ref().map(|c| c.weekday)
    }

    pub fn time_period(&self) -> Option<TimePeriod> {
        self.calendar.as_ref().map(|c| c.time_period)
    }

    /// Returns `true` if the trimmed body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
