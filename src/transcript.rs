//! The Transcript Table: an immutable, ordered sequence of records.
//!
//! A [`Transcript`] is built once per uploaded file and only ever read
//! afterwards. Every filtering operation returns a new `Transcript` (or
//! borrows records through an iterator); nothing mutates records in place.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::OVERALL;
use crate::core::filter::SenderFilter;
use crate::record::MessageRecord;

/// Parsed and enriched records in source order.
///
/// Order is the order of appearance in the export, which is usually but not
/// always chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<MessageRecord>,
}

impl Transcript {
    /// Wraps already-built records.
    pub fn from_records(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Iterates records matching the sender filter.
    pub fn select<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        self.records.iter().filter(move |r| filter.matches(r.sender()))
    }

    /// Returns a new transcript with only the records matching `filter`.
    pub fn for_sender(&self, filter: &SenderFilter) -> Transcript {
        Transcript::from_records(self.select(filter).cloned().collect())
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(MessageRecord::sender)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Sender picker list: distinct senders sorted, with the overall
    /// sentinel first.
    ///
    /// ```
    /// use chatstat::TranscriptParser;
    ///
    /// let t = TranscriptParser::new().parse_str(
    ///     "1/1/24, 9:00 AM - Zoe: hi\n1/1/24, 9:01 AM - Adam: hey\n",
    /// );
    /// assert_eq!(t.sender_options(), vec!["Overall", "Adam", "Zoe"]);
    /// ```
    pub fn sender_options(&self) -> Vec<String> {
        let sorted: BTreeSet<&str> = self.records.iter().map(MessageRecord::sender).collect();
        std::iter::once(OVERALL.to_string())
            .chain(sorted.into_iter().map(str::to_string))
            .collect()
    }

    /// Earliest and latest calendar dates present, ignoring untimed records.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(MessageRecord::date_only);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Number of records whose header did not parse.
    pub fn untimed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.timestamp().is_none())
            .count()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Case-insensitive substring search over a sender picker list.
///
/// ```
/// use chatstat::transcript::search_senders;
///
/// let options = vec!["Overall".to_string(), "Alice".to_string(), "Malik".to_string()];
/// assert_eq!(search_senders(&options, "LI"), vec!["Alice", "Malik"]);
/// assert_eq!(search_senders(&options, "").len(), 3);
/// ```
pub fn search_senders<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
