//! WhatsApp TXT export tokenizer.
//!
//! Android exports start every message with a header such as
//! `12/1/23, 4:05 PM - ` followed by `Sender: text`. Continuation lines of a
//! multi-line message carry no header, and system notices (encryption
//! banner, joins, subject changes) carry a header but no `Sender:` prefix.
//!
//! Some exports put a narrow no-break space (`U+202F`) between the time and
//! the meridiem marker; [`normalize_spaces`] folds it to a plain space before
//! the header is parsed.

use std::ops::Range;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::config::ParserConfig;

/// Message header: `D/M/YY, H:MM AM - ` with 1-2 digit day and month,
/// 2-4 digit year and a case-insensitive meridiem.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[ap]m\s-\s")
        .expect("header pattern is valid")
});

/// One header and the text that follows it, up to the next header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The header exactly as it appears, trailing ` - ` included.
    pub header: &'a str,
    /// Everything after the header; may span several lines.
    pub body: &'a str,
}

/// Finds the byte range of every message header, in order.
///
/// ```
/// use chatstat::parsing::scan_headers;
///
/// let text = "12/1/23, 4:05 PM - Alice: Hi\n12/1/23, 4:06 PM - Bob: Yo";
/// let spans = scan_headers(text);
/// assert_eq!(spans.len(), 2);
/// assert_eq!(&text[spans[1].clone()], "12/1/23, 4:06 PM - ");
/// ```
pub fn scan_headers(text: &str) -> Vec<Range<usize>> {
    HEADER_PATTERN.find_iter(text).map(|m| m.range()).collect()
}

/// Pairs each header with the text up to the next header.
///
/// Text before the first header is not part of any segment; see
/// [`leading_text`].
pub fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let spans = scan_headers(text);
    let mut segments = Vec::with_capacity(spans.len());

    for (i, span) in spans.iter().enumerate() {
        let body_end = spans.get(i + 1).map_or(text.len(), |next| next.start);
        segments.push(Segment {
            header: &text[span.clone()],
            body: &text[span.end..body_end],
        });
    }

    segments
}

/// Returns whatever precedes the first header (usually nothing).
pub fn leading_text(text: &str) -> &str {
    HEADER_PATTERN
        .find(text)
        .map_or(text, |m| &text[..m.start()])
}

/// Replaces every Unicode whitespace character with an ASCII space.
pub fn normalize_spaces(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

/// Parses a header into a timestamp using the fixed day/month/year,
/// 12-hour clock layout.
///
/// Two-digit years are expanded with [`ParserConfig::expand_year`]; any
/// other year width than 2 or 4 digits, an impossible date, or a
/// malformed clock yields `None`.
///
/// ```
/// use chatstat::config::ParserConfig;
/// use chatstat::parsing::parse_header_timestamp;
/// use chrono::{Datelike, Timelike};
///
/// let ts = parse_header_timestamp("12/1/23, 4:05\u{202f}pm - ", &ParserConfig::default()).unwrap();
/// assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 1, 12));
/// assert_eq!((ts.hour(), ts.minute()), (16, 5));
///
/// assert!(parse_header_timestamp("31/2/2023, 4:05 PM - ", &ParserConfig::default()).is_none());
/// ```
pub fn parse_header_timestamp(header: &str, config: &ParserConfig) -> Option<DateTime<Utc>> {
    let normalized = normalize_spaces(header);
    let stamp = normalized.trim_end().trim_end_matches('-').trim_end();
    let (date_part, time_part) = stamp.split_once(',')?;

    let mut fields = date_part.trim().split('/');
    let day: u32 = fields.next()?.parse().ok()?;
    let month: u32 = fields.next()?.parse().ok()?;
    let year_str = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let year = match year_str.len() {
        2 => config.expand_year(year_str.parse().ok()?),
        4 => year_str.parse().ok()?,
        _ => return None,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::parse_from_str(time_part.trim(), "%I:%M %p").ok()?;
    Some(date.and_time(time).and_utc())
}

/// Splits a segment body into `(sender, message)`.
///
/// The sender is the text before the first colon on the header line that
/// is followed by whitespace or ends the body. The message is the rest,
/// trimmed, and may contain further colons. Returns `None` for bodies with
/// no such colon or an empty sender; those are system notices.
///
/// ```
/// use chatstat::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: see you at 10:30: ok\n"), Some(("Alice", "see you at 10:30: ok")));
/// assert_eq!(split_sender("Messages are end-to-end encrypted.\n"), None);
/// assert_eq!(split_sender("Bob changed the time to 10:30\n"), None);
/// ```
pub fn split_sender(body: &str) -> Option<(&str, &str)> {
    let line_end = body.find('\n').unwrap_or(body.len());

    for (idx, _) in body[..line_end].match_indices(':') {
        let rest = &body[idx + 1..];
        if rest.chars().next().is_none_or(char::is_whitespace) {
            let sender = body[..idx].trim();
            if sender.is_empty() {
                return None;
            }
            return Some((sender, rest.trim()));
        }
    }

    None
}
