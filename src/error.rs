//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers every
//! failure the library can report. Content problems inside a transcript
//! (unparsable headers, notices without a sender, odd bodies) are never
//! errors: they are absorbed by the parser. What remains is I/O, decoding,
//! user-supplied dates, and model fits that cannot run on the corpus given.
//!
//! # Insufficient data
//!
//! Keyword ranking and topic modeling distinguish "no data" from
//! "not enough data for this model". The latter is always reported as
//! [`ChatstatError::InsufficientData`] so callers can tell it apart from an
//! empty result:
//!
//! ```rust
//! use chatstat::text::{TfIdfRanker, top_keywords};
//!
//! let err = top_keywords(&TfIdfRanker::default(), &["only one message"], 5).unwrap_err();
//! assert!(err.is_insufficient_data());
//! ```

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist or can't be read
    /// - The output file can't be created
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Uploaded content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
    },

    /// Invalid date supplied by the caller.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Something doesn't match the expected structure (e.g. an output
    /// path with an unknown extension).
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The corpus is too small or too degenerate to fit a model.
    ///
    /// This is distinct from an empty result: zero matches is a valid
    /// answer, while this means no answer could be computed.
    #[error("Insufficient data for {model}: {reason}")]
    InsufficientData {
        /// The model that could not be fitted (e.g. "TF-IDF", "LDA")
        model: &'static str,
        /// Why the corpus was rejected
        reason: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err.utf8_error(),
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an insufficient-data error for the named model.
    pub fn insufficient_data(model: &'static str, reason: impl Into<String>) -> Self {
        ChatstatError::InsufficientData {
            model,
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a decoding error for uploaded bytes.
    pub fn utf8(context: impl Into<String>, source: std::str::Utf8Error) -> Self {
        ChatstatError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if a model could not be fitted on the corpus.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, ChatstatError::InsufficientData { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}
