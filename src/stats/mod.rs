//! Statistics engine: pure aggregations over a [`Transcript`].
//!
//! Every function takes the transcript by reference plus a
//! [`SenderFilter`]; [`SenderFilter::Overall`] means "every sender" and an
//! unknown sender simply yields an empty (or all-zero) result.
//!
//! Records without a timestamp are counted by [`fetch_stats`],
//! [`message_counts`] and [`busiest_and_least_busy`], and are skipped by
//! every date-keyed aggregation.
//!
//! # Example
//!
//! ```rust
//! use chatstat::TranscriptParser;
//! use chatstat::core::filter::SenderFilter;
//! use chatstat::stats::{fetch_stats, busiest_and_least_busy};
//!
//! let t = TranscriptParser::new().parse_str(
//!     "12/1/23, 4:05 PM - Alice: Hello there\n12/1/23, 4:06 PM - Bob: <Media omitted>\n",
//! );
//!
//! let overall = fetch_stats(&t, &SenderFilter::Overall);
//! assert_eq!(overall.total_messages, 2);
//! assert_eq!(overall.media_messages, 1);
//!
//! let ranking = busiest_and_least_busy(&t);
//! assert_eq!(ranking.top[0].label, "Alice");
//! ```
//!
//! [`Transcript`]: crate::transcript::Transcript
//! [`SenderFilter`]: crate::core::filter::SenderFilter
//! [`SenderFilter::Overall`]: crate::core::filter::SenderFilter::Overall

mod activity;
mod counters;
mod timeline;

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

pub use activity::{
    ActivityCell, ActivityGrid, Heatmap, HeatmapRow, activity_by_month, activity_by_weekday,
    activity_heatmap, activity_over_time, comparative_activity,
};
pub use counters::{
    Busiest, ChatStats, busiest_and_least_busy, busiest_with, emoji_frequency, fetch_stats,
    fetch_stats_with, message_counts,
};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};

/// A label and how many messages it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: usize,
}

impl LabeledCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts keys, keeping the order in which each key first appeared.
pub(crate) fn tally<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            counts[i].1 += 1;
        } else {
            index.insert(key.clone(), counts.len());
            counts.push((key, 1));
        }
    }

    counts
}

/// [`tally`] over string keys, sorted by count descending.
///
/// The sort is stable, so equal counts stay in first-appearance order.
pub(crate) fn ranked<'a, I>(keys: I) -> Vec<LabeledCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<LabeledCount> = tally(keys)
        .into_iter()
        .map(|(label, count)| LabeledCount::new(label, count))
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_first_appearance() {
        let counts = tally(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_ranked_is_stable() {
        let counts = ranked(["x", "y", "z", "y", "x"]);
        let labels: Vec<_> = counts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
        assert_eq!(counts[2].count, 1);
    }

    #[test]
    fn test_ranked_empty() {
        assert!(ranked(std::iter::empty()).is_empty());
    }
}
