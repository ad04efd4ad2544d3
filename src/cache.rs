//! Content-fingerprint cache for parsed transcripts.
//!
//! Uploading the same export twice should not parse it twice. The cache is
//! an explicit value owned by the caller rather than a process-wide
//! singleton, so tests (and one-shot CLI runs) can pass [`NoCache`].
//!
//! ```rust
//! use chatstat::cache::{MemoryCache, load_transcript};
//! use chatstat::TranscriptParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let parser = TranscriptParser::new();
//! let mut cache = MemoryCache::new();
//! let bytes = b"1/1/24, 9:00 AM - Alice: hi\n";
//!
//! let first = load_transcript(bytes, &parser, &mut cache)?;
//! let second = load_transcript(bytes, &parser, &mut cache)?;
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! assert_eq!(cache.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ChatstatError, Result};
use crate::parser::TranscriptParser;
use crate::transcript::Transcript;

/// Hex-encoded SHA-256 of the raw upload.
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Get-or-compute storage for parsed transcripts, keyed by fingerprint.
pub trait TranscriptCache {
    /// Returns the cached transcript for `key`, running `parse` on a miss.
    fn get_or_parse(
        &mut self,
        key: &str,
        parse: &mut dyn FnMut() -> Transcript,
    ) -> Arc<Transcript>;
}

/// In-memory cache; entries live as long as the cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, Arc<Transcript>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a transcript is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TranscriptCache for MemoryCache {
    fn get_or_parse(
        &mut self,
        key: &str,
        parse: &mut dyn FnMut() -> Transcript,
    ) -> Arc<Transcript> {
        if let Some(hit) = self.entries.get(key) {
            debug!(key, "transcript cache hit");
            return Arc::clone(hit);
        }

        debug!(key, "transcript cache miss");
        let transcript = Arc::new(parse());
        self.entries.insert(key.to_string(), Arc::clone(&transcript));
        transcript
    }
}

/// Cache that never stores anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl TranscriptCache for NoCache {
    fn get_or_parse(
        &mut self,
        _key: &str,
        parse: &mut dyn FnMut() -> Transcript,
    ) -> Arc<Transcript> {
        Arc::new(parse())
    }
}

/// Decodes and parses an upload, reusing a cached parse of identical bytes.
///
/// # Errors
///
/// Returns [`ChatstatError::Utf8`] if the bytes are not UTF-8. Nothing is
/// cached in that case.
pub fn load_transcript(
    bytes: &[u8],
    parser: &TranscriptParser,
    cache: &mut dyn TranscriptCache,
) -> Result<Arc<Transcript>> {
    let text = std::str::from_utf8(bytes).map_err(|e| ChatstatError::utf8("transcript upload", e))?;
    let key = fingerprint(bytes);
    Ok(cache.get_or_parse(&key, &mut || parser.parse_str(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &[u8] = b"1/1/24, 9:00 AM - Alice: hi\n1/1/24, 9:01 AM - Bob: hey\n";

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint(CHAT);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(a, fingerprint(CHAT));
        assert_ne!(a, fingerprint(b"something else"));
    }

    #[test]
    fn test_fingerprint_known_value() {
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_memory_cache_parses_once() {
        let parser = TranscriptParser::new();
        let mut cache = MemoryCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            cache.get_or_parse("k", &mut || {
                calls += 1;
                parser.parse_str("1/1/24, 9:00 AM - Alice: hi")
            });
        }

        assert_eq!(calls, 1);
        assert!(cache.contains("k"));
    }

    #[test]
    fn test_no_cache_always_parses() {
        let parser = TranscriptParser::new();
        let mut cache = NoCache;
        let a = load_transcript(CHAT, &parser, &mut cache).unwrap();
        let b = load_transcript(CHAT, &parser, &mut cache).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_load_transcript_distinct_content() {
        let parser = TranscriptParser::new();
        let mut cache = MemoryCache::new();
        load_transcript(CHAT, &parser, &mut cache).unwrap();
        load_transcript(b"2/1/24, 9:00 AM - Carol: yo", &parser, &mut cache).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_load_transcript_invalid_utf8_not_cached() {
        let parser = TranscriptParser::new();
        let mut cache = MemoryCache::new();
        let err = load_transcript(&[0xff, 0x00, 0xfe], &parser, &mut cache).unwrap_err();
        assert!(matches!(err, ChatstatError::Utf8 { .. }));
        assert!(cache.is_empty());
    }
}
