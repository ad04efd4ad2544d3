//! Transcript parser: raw export text to a [`Transcript`].
//!
//! # Example
//!
//! ```rust
//! use chatstat::TranscriptParser;
//!
//! let text = "\
//! 12/1/23, 4:00 PM - Messages and calls are end-to-end encrypted.
//! 12/1/23, 4:05 PM - Alice: Hello there
//! 12/1/23, 4:06 PM - Bob: <Media omitted>
//! ";
//!
//! let transcript = TranscriptParser::new().parse_str(text);
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.records()[0].body(), "Hello there");
//! ```
//!
//! # Pipeline
//!
//! 1. [`split_segments`] finds header boundaries and pairs each header with
//!    the text up to the next one.
//! 2. [`parse_header_timestamp`] turns the header into a timestamp, or
//!    `None` when it doesn't fit the fixed layout.
//! 3. [`split_sender`] separates `Sender: text`; segments without a sender
//!    are system notices and are dropped.
//! 4. [`MessageRecord::new`] derives every enriched field.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::parsing::{leading_text, parse_header_timestamp, split_segments, split_sender};
use crate::record::MessageRecord;
use crate::transcript::Transcript;

/// Parser for WhatsApp TXT exports.
///
/// Parsing is deterministic and never fails on content: the same text
/// always yields an identical [`Transcript`].
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text.
    pub fn parse_str(&self, text: &str) -> Transcript {
        let preamble = leading_text(text);
        if !preamble.trim().is_empty() {
            warn!(
                bytes = preamble.len(),
                "discarding text before the first message header"
            );
        }

        let segments = split_segments(text);
        let mut records = Vec::with_capacity(segments.len());
        let mut notices = 0usize;
        let mut untimed = 0usize;

        for segment in &segments {
            let Some((sender, message)) = split_sender(segment.body) else {
                notices += 1;
                continue;
            };

            let timestamp = parse_header_timestamp(segment.header, &self.config);
            if timestamp.is_none() {
                untimed += 1;
                if self.config.drop_untimed {
                    continue;
                }
            }

            records.push(MessageRecord::new(sender, message, timestamp));
        }

        debug!(
            segments = segments.len(),
            records = records.len(),
            notices,
            untimed,
            "parsed transcript"
        );

        Transcript::from_records(records)
    }

    /// Parses uploaded bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Transcript> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ChatstatError::utf8("transcript upload", e))?;
        Ok(self.parse_str(text))
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }
}
