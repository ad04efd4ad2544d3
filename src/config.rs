//! Configuration types for parsing, statistics and text analytics.
//!
//! Each stage has its own configuration struct, built with `with_*` setters
//! and serializable so a front end can persist user choices:
//!
//! - [`ParserConfig`] - transcript tokenizer settings
//! - [`StatsConfig`] - sentinel strings and ranking sizes for the statistics engine
//! - [`TextConfig`] - vocabulary pruning and model parameters for text analytics
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::ParserConfig;
//! use chatstat::TranscriptParser;
//!
//! let config = ParserConfig::new()
//!     .with_year_pivot(50)
//!     .with_drop_untimed(true);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Sentinel meaning "do not filter by sender".
pub const OVERALL: &str = "Overall";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_year_pivot(70);
/// assert_eq!(config.expand_year(23), 2023);
/// assert_eq!(config.expand_year(85), 1985);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Two-digit years below this value land in the 2000s, the rest in the
    /// 1900s (default: 70)
    pub year_pivot: u32,

    /// Drop records whose header could not be parsed into a timestamp
    /// (default: false)
    pub drop_untimed: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            year_pivot: 70,
            drop_untimed: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the two-digit year pivot.
    #[must_use]
    pub fn with_year_pivot(mut self, pivot: u32) -> Self {
        self.year_pivot = pivot.min(100);
        self
    }

    /// Sets whether untimed records are dropped.
    #[must_use]
    pub fn with_drop_untimed(mut self, drop: bool) -> Self {
        self.drop_untimed = drop;
        self
    }

    /// Expands a two-digit year using the configured pivot.
    pub fn expand_year(&self, two_digit: u32) -> i32 {
        let century = if two_digit < self.year_pivot { 2000 } else { 1900 };
        century + two_digit as i32
    }
}

/// Configuration for the statistics engine.
///
/// The defaults match the English Android export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Body of a message whose attachment was left out of the export
    pub media_placeholder: String,

    /// Marker substring of a deleted message
    pub deleted_marker: String,

    /// Marker substring of an edited message
    pub edited_marker: String,

    /// Number of senders in each busiest / least busy ranking (default: 5)
    pub ranking_size: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            media_placeholder: "<Media omitted>".to_string(),
            deleted_marker: "This message was deleted".to_string(),
            edited_marker: "<This message was edited>".to_string(),
            ranking_size: 5,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the deleted-message marker.
    #[must_use]
    pub fn with_deleted_marker(mut self, marker: impl Into<String>) -> Self {
        self.deleted_marker = marker.into();
        self
    }

    /// Sets the edited-message marker.
    #[must_use]
    pub fn with_edited_marker(mut self, marker: impl Into<String>) -> Self {
        self.edited_marker = marker.into();
        self
    }

    /// Sets the ranking size.
    #[must_use]
    pub fn with_ranking_size(mut self, size: usize) -> Self {
        self.ranking_size = size;
        self
    }
}

/// Configuration for keyword ranking and topic modeling.
///
/// # Example
///
/// ```rust
/// use chatstat::config::TextConfig;
///
/// let config = TextConfig::new()
///     .with_terms_per_topic(3)
///     .with_seed(42);
/// assert_eq!(config.terms_per_topic, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    /// Ignore terms appearing in fewer messages than this (default: 2)
    pub min_df: usize,

    /// Ignore terms appearing in more than this share of messages (default: 0.95)
    pub max_df: f64,

    /// Smallest vocabulary a model will be fitted on (default: 2)
    pub min_vocabulary: usize,

    /// Terms listed per topic (default: 5)
    pub terms_per_topic: usize,

    /// Gibbs sampling sweeps over the corpus (default: 200)
    pub iterations: usize,

    /// Random seed for topic assignment (default: 0)
    pub seed: u64,

    /// Document-topic prior; `None` means one over the topic count
    pub alpha: Option<f64>,

    /// Topic-term prior; `None` means one over the topic count
    pub beta: Option<f64>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            min_df: 2,
            max_df: 0.95,
            min_vocabulary: 2,
            terms_per_topic: 5,
            iterations: 200,
            seed: 0,
            alpha: None,
            beta: None,
        }
    }
}

impl TextConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum document frequency.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Sets the maximum document frequency as a share of the corpus.
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of terms listed per topic.
    #[must_use]
    pub fn with_terms_per_topic(mut self, terms: usize) -> Self {
        self.terms_per_topic = terms;
        self
    }

    /// Sets the number of sampling sweeps.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the Dirichlet priors.
    #[must_use]
    pub fn with_priors(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = Some(alpha);
        self.beta = Some(beta);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.year_pivot, 70);
        assert!(!config.drop_untimed);
    }

    #[test]
    fn test_year_pivot() {
        let config = ParserConfig::new();
        assert_eq!(config.expand_year(0), 2000);
        assert_eq!(config.expand_year(69), 2069);
        assert_eq!(config.expand_year(70), 1970);
        assert_eq!(config.expand_year(99), 1999);

        let config = ParserConfig::new().with_year_pivot(100);
        assert_eq!(config.expand_year(99), 2099);
    }

    #[test]
    fn test_stats_config_default() {
        let config = StatsConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.ranking_size, 5);
    }

    #[test]
    fn test_text_config_builder() {
        let config = TextConfig::new()
            .with_min_df(1)
            .with_max_df(1.5)
            .with_terms_per_topic(2)
            .with_priors(0.1, 0.01);

        assert_eq!(config.min_df, 1);
        assert!((config.max_df - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.terms_per_topic, 2);
        assert_eq!(config.alpha, Some(0.1));
    }

    #[test]
    fn test_text_config_keys() {
        let value = serde_json::to_value(TextConfig::default()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "alpha",
                "beta",
                "iterations",
                "max_df",
                "min_df",
                "min_vocabulary",
                "seed",
                "terms_per_topic"
            ]
        );
    }

    #[test]
    fn test_config_serde() {
        let config = TextConfig::new().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TextConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
