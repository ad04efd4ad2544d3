//! Per-sender counters, rankings and emoji frequency.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{LabeledCount, ranked};
use crate::config::StatsConfig;
use crate::core::filter::SenderFilter;
use crate::enrich::find_emojis;
use crate::transcript::Transcript;

/// Phone-number-like text or a shared vCard file.
static CONTACT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\+?\d{2,4}[\s-]?\d{10}|\.vcf\b").expect("contact pattern is valid")
});

/// A Google Maps pin as WhatsApp shares it.
static LOCATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)//maps\.google\.com/\?q=-?\d+\.\d+,-?\d+\.\d+")
        .expect("location pattern is valid")
});

/// The nine headline counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    pub total_messages: usize,
    /// Sum of per-message word counts, placeholders included.
    pub total_words: usize,
    /// Messages whose body is exactly the media placeholder.
    pub media_messages: usize,
    pub links: usize,
    pub emojis: usize,
    pub deleted_messages: usize,
    pub edited_messages: usize,
    /// Messages containing a phone number or a `.vcf` attachment.
    pub shared_contacts: usize,
    pub shared_locations: usize,
}

/// Headline counters with the default markers.
pub fn fetch_stats(transcript: &Transcript, sender: &SenderFilter) -> ChatStats {
    fetch_stats_with(transcript, sender, &StatsConfig::default())
}

/// Headline counters with custom placeholder and marker strings.
///
/// The media placeholder must match the whole body. Deleted and edited
/// markers match anywhere in the body, ignoring case.
pub fn fetch_stats_with(
    transcript: &Transcript,
    sender: &SenderFilter,
    config: &StatsConfig,
) -> ChatStats {
    let deleted = config.deleted_marker.to_lowercase();
    let edited = config.edited_marker.to_lowercase();

    transcript
        .select(sender)
        .fold(ChatStats::default(), |mut stats, record| {
            let body = record.body();
            let lowered = body.to_lowercase();

            stats.total_messages += 1;
            stats.total_words += record.word_count();
            stats.links += record.url_count();
            stats.emojis += record.emoji_count();
            stats.media_messages += usize::from(body == config.media_placeholder);
            stats.deleted_messages += usize::from(!deleted.is_empty() && lowered.contains(&deleted));
            stats.edited_messages += usize::from(!edited.is_empty() && lowered.contains(&edited));
            stats.shared_contacts += usize::from(CONTACT_PATTERN.is_match(body));
            stats.shared_locations += usize::from(LOCATION_PATTERN.is_match(body));
            stats
        })
}

/// Messages per sender, most active first, ties in first-appearance order.
pub fn message_counts(transcript: &Transcript) -> Vec<LabeledCount> {
    ranked(transcript.iter().map(|r| r.sender()))
}

/// The most and least active senders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Busiest {
    /// Head of the descending ranking.
    pub top: Vec<LabeledCount>,
    /// Tail of the same ranking, still in descending order.
    pub bottom: Vec<LabeledCount>,
}

/// Top and bottom five senders by message count.
pub fn busiest_and_least_busy(transcript: &Transcript) -> Busiest {
    busiest_with(transcript, &StatsConfig::default())
}

/// Top and bottom `config.ranking_size` senders by message count.
///
/// With fewer senders than the ranking size, both lists hold everyone.
pub fn busiest_with(transcript: &Transcript, config: &StatsConfig) -> Busiest {
    let counts = message_counts(transcript);
    let n = config.ranking_size.min(counts.len());

    Busiest {
        top: counts[..n].to_vec(),
        bottom: counts[counts.len() - n..].to_vec(),
    }
}

/// Each distinct emoji with how often it was used, most frequent first.
///
/// Ties keep first-appearance order. Skin-tone and ZWJ sequences count as
/// one emoji.
pub fn emoji_frequency(transcript: &Transcript, sender: &SenderFilter) -> Vec<LabeledCount> {
    ranked(transcript.select(sender).flat_map(|r| find_emojis(r.body())))
}
