//! Activity distributions: by date, month, weekday and time of day.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::{LabeledCount, ranked};
use crate::core::filter::SenderFilter;
use crate::record::{TimePeriod, WEEKDAYS, day_name};
use crate::transcript::Transcript;

/// Per-date, per-sender message counts with missing cells filled with 0.
///
/// Rows are dates in ascending order; columns are senders sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityGrid {
    pub dates: Vec<NaiveDate>,
    pub senders: Vec<String>,
    /// `counts[row][column]`, one row per entry of `dates`.
    pub counts: Vec<Vec<usize>>,
}

/// One cell of an [`ActivityGrid`], for long-format output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCell {
    pub date: NaiveDate,
    pub sender: String,
    pub count: usize,
}

impl ActivityGrid {
    /// Count for one date and sender; 0 for anything outside the grid.
    pub fn get(&self, date: NaiveDate, sender: &str) -> usize {
        let row = self.dates.binary_search(&date).ok();
        let col = self.senders.iter().position(|s| s == sender);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Total messages on one date across every sender.
    pub fn day_total(&self, date: NaiveDate) -> usize {
        self.dates
            .binary_search(&date)
            .map_or(0, |r| self.counts[r].iter().sum())
    }

    /// Every cell, zeros included, row by row.
    pub fn cells(&self) -> Vec<ActivityCell> {
        self.dates
            .iter()
            .zip(&self.counts)
            .flat_map(|(date, row)| {
                self.senders.iter().zip(row).map(|(sender, &count)| ActivityCell {
                    date: *date,
                    sender: sender.clone(),
                    count,
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Messages per calendar date and sender.
pub fn activity_over_time(transcript: &Transcript, sender: &SenderFilter) -> ActivityGrid {
    let mut cells: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    let mut dates = BTreeSet::new();
    let mut senders = BTreeSet::new();

    for record in transcript.select(sender) {
        let Some(date) = record.date_only() else {
            continue;
        };
        dates.insert(date);
        senders.insert(record.sender());
        *cells.entry((date, record.sender())).or_default() += 1;
    }

    let dates: Vec<NaiveDate> = dates.into_iter().collect();
    let senders: Vec<&str> = senders.into_iter().collect();
    let counts = dates
        .iter()
        .map(|&date| {
            senders
                .iter()
                .map(|&s| cells.get(&(date, s)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    ActivityGrid {
        dates,
        senders: senders.into_iter().map(str::to_string).collect(),
        counts,
    }
}

/// Messages per month name, all years folded together.
///
/// Busiest month first; ties keep first-appearance order.
pub fn activity_by_month(transcript: &Transcript, sender: &SenderFilter) -> Vec<LabeledCount> {
    ranked(
        transcript
            .select(sender)
            .filter_map(|r| r.calendar().map(|c| c.month_name)),
    )
}

/// Messages per day name, Monday through Sunday, zeros included.
pub fn activity_by_weekday(transcript: &Transcript, sender: &SenderFilter) -> Vec<LabeledCount> {
    let mut counts = [0usize; 7];
    for weekday in transcript.select(sender).filter_map(|r| r.weekday()) {
        counts[weekday.num_days_from_monday() as usize] += 1;
    }

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(&day, count)| LabeledCount::new(day_name(day), count))
        .collect()
}

/// Day-of-week by time-of-day message counts.
///
/// Always the full 7×4 matrix: Monday..Sunday rows, Night..Evening columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub counts: [[usize; 4]; 7],
}

/// One weekday row of a [`Heatmap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub day: &'static str,
    pub night: usize,
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
}

impl Heatmap {
    pub fn get(&self, weekday: Weekday, period: TimePeriod) -> usize {
        self.counts[weekday.num_days_from_monday() as usize][period.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Named rows in Monday..Sunday order.
    pub fn rows(&self) -> Vec<HeatmapRow> {
        WEEKDAYS
            .iter()
            .zip(&self.counts)
            .map(|(&day, row)| HeatmapRow {
                day: day_name(day),
                night: row[TimePeriod::Night.index()],
                morning: row[TimePeriod::Morning.index()],
                afternoon: row[TimePeriod::Afternoon.index()],
                evening: row[TimePeriod::Evening.index()],
            })
            .collect()
    }
}

/// Weekday × time period pivot of message counts.
pub fn activity_heatmap(transcript: &Transcript, sender: &SenderFilter) -> Heatmap {
    let mut heatmap = Heatmap::default();
    for record in transcript.select(sender) {
        if let (Some(day), Some(period)) = (record.weekday(), record.time_period()) {
            heatmap.counts[day.num_days_from_monday() as usize][period.index()] += 1;
        }
    }
    heatmap
}

/// Messages per listed sender between two dates, both days inclusive.
///
/// Only listed senders with at least one message appear, most active first
/// with ties in first-appearance order. A reversed range is empty.
pub fn comparative_activity<S: AsRef<str>>(
    transcript: &Transcript,
    senders: &[S],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<LabeledCount> {
    let wanted: BTreeSet<&str> = senders.iter().map(|s| s.as_ref()).collect();

    ranked(
        transcript
            .iter()
            .filter(|r| wanted.contains(r.sender()))
            .filter(|r| r.date_only().is_some_and(|d| start <= d && d <= end))
            .map(|r| r.sender()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 1 Jan 2024 is a Monday
    fn chat() -> Transcript {
        TranscriptParser::new().parse_str(
            "1/1/24, 1:00 AM - Bob: night owl\n\
             1/1/24, 9:00 AM - Alice: morning\n\
             1/1/24, 9:30 AM - Alice: still morning\n\
             2/1/24, 3:00 PM - Carol: afternoon\n\
             7/1/24, 8:00 PM - Bob: sunday evening\n\
             3/2/24, 10:00 AM - Alice: february\n\
             31/2/24, 10:00 AM - Alice: untimed\n",
        )
    }

    #[test]
    fn test_activity_over_time_fills_zeros() {
        let grid = activity_over_time(&chat(), &SenderFilter::Overall);
        assert_eq!(grid.senders, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(
            grid.dates,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 7), date(2024, 2, 3)]
        );
        assert_eq!(grid.counts[0], vec![2, 1, 0]);
        assert_eq!(grid.get(date(2024, 1, 2), "Carol"), 1);
        assert_eq!(grid.get(date(2024, 1, 2), "Alice"), 0);
        assert_eq!(grid.get(date(2030, 1, 1), "Alice"), 0);
        assert_eq!(grid.day_total(date(2024, 1, 1)), 3);
        assert_eq!(grid.cells().len(), 12);
    }

    #[test]
    fn test_activity_over_time_single_sender() {
        let grid = activity_over_time(&chat(), &SenderFilter::from("Bob"));
        assert_eq!(grid.senders, vec!["Bob"]);
        assert_eq!(grid.dates.len(), 2);

        let none = activity_over_time(&chat(), &SenderFilter::from("Nobody"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_activity_by_month() {
        let months = activity_by_month(&chat(), &SenderFilter::Overall);
        assert_eq!(
            months,
            vec![LabeledCount::new("January", 5), LabeledCount::new("February", 1)]
        );
    }

    #[test]
    fn test_activity_by_weekday_all_days() {
        let days = activity_by_weekday(&chat(), &SenderFilter::Overall);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], LabeledCount::new("Monday", 3));
        assert_eq!(days[1], LabeledCount::new("Tuesday", 1));
        assert_eq!(days[5], LabeledCount::new("Saturday", 1));
        assert_eq!(days[6], LabeledCount::new("Sunday", 1));
        assert_eq!(days[3].count, 0);
    }

    #[test]
    fn test_heatmap_full_matrix() {
        let heatmap = activity_heatmap(&chat(), &SenderFilter::Overall);
        assert_eq!(heatmap.get(Weekday::Mon, TimePeriod::Night), 1);
        assert_eq!(heatmap.get(Weekday::Mon, TimePeriod::Morning), 2);
        assert_eq!(heatmap.get(Weekday::Tue, TimePeriod::Afternoon), 1);
        assert_eq!(heatmap.get(Weekday::Sun, TimePeriod::Evening), 1);
        assert_eq!(heatmap.get(Weekday::Wed, TimePeriod::Morning), 0);
        assert_eq!(heatmap.total(), 6);

        let rows = heatmap.rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].day, "Monday");
        assert_eq!(rows[0].morning, 2);
    }

    #[test]
    fn test_heatmap_unknown_sender_is_zero() {
        let heatmap = activity_heatmap(&chat(), &SenderFilter::from("Nobody"));
        assert_eq!(heatmap, Heatmap::default());
    }

    #[test]
    fn test_comparative_activity_inclusive_range() {
        let counts = comparative_activity(
            &chat(),
            &["Alice", "Bob"],
            date(2024, 1, 1),
            date(2024, 1, 7),
        );
        assert_eq!(
            counts,
            vec![LabeledCount::new("Bob", 2), LabeledCount::new("Alice", 2)]
        );
    }

    #[test]
    fn test_comparative_activity_excludes_unlisted_and_zero() {
        let counts = comparative_activity(
            &chat(),
            &["Carol".to_string(), "Nobody".to_string()],
            date(2024, 1, 2),
            date(2024, 1, 2),
        );
        assert_eq!(counts, vec![LabeledCount::new("Carol", 1)]);
    }

    #[test]
    fn test_comparative_activity_reversed_range() {
        let counts = comparative_activity(&chat(), &["Alice"], date(2024, 2, 1), date(2024, 1, 1));
        assert!(counts.is_empty());
    }
}
