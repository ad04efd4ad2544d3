//! # Chatstat
//!
//! A Rust library for turning WhatsApp chat exports into statistics: message
//! and word counters, activity timelines, weekday/time-of-day heatmaps,
//! sentiment, keywords and topics.
//!
//! ## Overview
//!
//! A raw export is parsed once into a [`Transcript`] of enriched
//! [`MessageRecord`]s. Every analysis is then a pure function over that
//! transcript plus a [`SenderFilter`](core::filter::SenderFilter) that picks
//! either one sender or everybody.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 12/1/23, 4:00 PM - Messages and calls are end-to-end encrypted.
//! 12/1/23, 4:05 PM - Alice: Hello there https://example.com
//! 12/1/23, 4:06 PM - Bob: <Media omitted>
//! 13/1/23, 9:15 AM - Alice: Good morning 😀
//! ";
//!     let transcript = TranscriptParser::new().parse_str(export);
//!
//!     let alice = fetch_stats(&transcript, &SenderFilter::from("Alice"));
//!     assert_eq!(alice.total_messages, 2);
//!     assert_eq!(alice.links, 1);
//!     assert_eq!(alice.emojis, 1);
//!
//!     let days = daily_timeline(&transcript, &SenderFilter::Overall);
//!     assert_eq!(days.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`]: export text to [`Transcript`]
//! - [`parsing`] - Header scanning and sender splitting stages
//! - [`record`] - [`MessageRecord`] and its calendar fields
//! - [`enrich`] - Word, URL and emoji extraction
//! - [`transcript`] - [`Transcript`], sender lists and date bounds
//! - [`stats`] - Counters, rankings, activity grids, heatmaps, timelines
//! - [`text`] - Sentiment, TF-IDF keywords, LDA topics
//! - [`cache`] - Fingerprint cache for repeated uploads
//! - [`config`] - Parser, statistics and text-model configuration
//! - [`core`] - Filters and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`ChatstatError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod stats;
pub mod text;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use config::OVERALL;
pub use error::{ChatstatError, Result};
pub use parser::TranscriptParser;
pub use record::MessageRecord;
pub use transcript::Transcript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::record::{MessageRecord, TimePeriod};
    pub use crate::transcript::Transcript;

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Parsing
    pub use crate::parser::TranscriptParser;

    // Configs
    pub use crate::config::{OVERALL, ParserConfig, StatsConfig, TextConfig};

    // Filtering
    pub use crate::core::filter::{FilterConfig, SenderFilter};

    // Statistics
    pub use crate::stats::{
        LabeledCount, activity_by_month, activity_by_weekday, activity_heatmap,
        activity_over_time, busiest_and_least_busy, comparative_activity, daily_timeline,
        emoji_frequency, fetch_stats, message_counts, monthly_timeline,
    };

    // Text analytics
    pub use crate::text::{
        GibbsLda, LexiconSentiment, Sentiment, TfIdfRanker, sentiment, sentiment_breakdown,
        sentiment_trend, top_keywords, topic_model,
    };

    // Caching
    pub use crate::cache::{MemoryCache, NoCache, TranscriptCache, load_transcript};

    // Output
    pub use crate::format::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
