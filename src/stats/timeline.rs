//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::tally;
use crate::core::filter::SenderFilter;
use crate::record::month_name;
use crate::transcript::Transcript;

/// Messages in one (year, month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    /// `"<MonthName>-<Year>"`, e.g. `January-2024`.
    pub label: String,
    pub count: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// One row per (year, month) present, in order of first appearance.
///
/// ```
/// use chatstat::TranscriptParser;
/// use chatstat::core::filter::SenderFilter;
/// use chatstat::stats::monthly_timeline;
///
/// let t = TranscriptParser::new().parse_str(
///     "5/3/24, 9:00 AM - A: x\n1/1/24, 9:00 AM - A: y\n9/3/24, 9:00 AM - B: z\n",
/// );
/// let labels: Vec<_> = monthly_timeline(&t, &SenderFilter::Overall)
///     .into_iter()
///     .map(|m| (m.label, m.count))
///     .collect();
/// assert_eq!(labels, vec![("March-2024".to_string(), 2), ("January-2024".to_string(), 1)]);
/// ```
pub fn monthly_timeline(transcript: &Transcript, sender: &SenderFilter) -> Vec<MonthlyCount> {
    let keys = transcript
        .select(sender)
        .filter_map(|r| r.calendar().map(|c| (c.year, c.month_number)));

    tally(keys)
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            year,
            month,
            label: format!("{}-{year}", month_name(month)),
            count,
        })
        .collect()
}

/// One row per calendar date present, ascending.
pub fn daily_timeline(transcript: &Transcript, sender: &SenderFilter) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in transcript.select(sender).filter_map(|r| r.date_only()) {
        *days.entry(date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;

    fn chat() -> Transcript {
        TranscriptParser::new().parse_str(
            "15/12/23, 9:00 AM - Alice: december\n\
             1/1/24, 9:00 AM - Bob: new year\n\
             20/12/23, 9:00 AM - Bob: late entry\n\
             1/1/24, 11:00 PM - Alice: again\n\
             1/1/25, 9:00 AM - Alice: next year\n\
             99/99/24, 9:00 AM - Alice: untimed\n",
        )
    }

    #[test]
    fn test_monthly_timeline_first_appearance() {
        let months = monthly_timeline(&chat(), &SenderFilter::Overall);
        let labels: Vec<_> = months.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["December-2023", "January-2024", "January-2025"]);
        assert_eq!(months[0].count, 2);
        assert_eq!(months[1].count, 2);
        assert_eq!(months[2].year, 2025);
    }

    #[test]
    fn test_monthly_timeline_separates_years() {
        let months = monthly_timeline(&chat(), &SenderFilter::from("Alice"));
        assert_eq!(months.len(), 3);
        assert!(months.iter().all(|m| m.count == 1));
    }

    #[test]
    fn test_daily_timeline_sorted() {
        let days = daily_timeline(&chat(), &SenderFilter::Overall);
        let dates: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2023-12-15", "2023-12-20", "2024-01-01", "2025-01-01"]
        );
        assert_eq!(days[2].count, 2);
    }

    #[test]
    fn test_timelines_unknown_sender() {
        assert!(monthly_timeline(&chat(), &SenderFilter::from("Nobody")).is_empty());
        assert!(daily_timeline(&chat(), &SenderFilter::from("Nobody")).is_empty());
    }
}
