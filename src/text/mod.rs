//! Text analytics: sentiment, keywords and topics.
//!
//! The statistical models sit behind three small traits so they can be
//! swapped without touching the callers:
//!
//! | Trait | Built-in | Used by |
//! |-------|----------|---------|
//! | [`SentimentModel`] | [`LexiconSentiment`] | [`sentiment`], [`sentiment_breakdown`], [`sentiment_trend`] |
//! | [`KeywordRanker`] | [`TfIdfRanker`] | [`top_keywords`] |
//! | [`TopicModeler`] | [`GibbsLda`] | [`topic_model`] |
//!
//! Keyword ranking and topic modeling fail with
//! [`ChatstatError::InsufficientData`](crate::ChatstatError::InsufficientData)
//! when the corpus is too small to fit, which is distinct from a fit that
//! finds nothing.
//!
//! # Example
//!
//! ```rust
//! use chatstat::text::{GibbsLda, Sentiment, TfIdfRanker, sentiment, top_keywords, topic_model};
//!
//! # fn main() -> chatstat::Result<()> {
//! assert_eq!(sentiment("what a great day"), Sentiment::Positive);
//!
//! let messages = ["pizza tonight", "pizza again", "guitar lesson", "guitar practice"];
//! let keywords = top_keywords(&TfIdfRanker::default(), &messages, 5)?;
//! assert_eq!(keywords.len(), 2);
//!
//! let topics = topic_model(&GibbsLda::default(), &messages, 2)?;
//! assert!(topics[0].starts_with("Topic 1: "));
//! # Ok(())
//! # }
//! ```

mod keywords;
mod sentiment;
mod topics;
mod vectorize;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::filter::SenderFilter;
use crate::error::Result;
use crate::transcript::Transcript;

pub use keywords::TfIdfRanker;
pub use sentiment::LexiconSentiment;
pub use topics::GibbsLda;
pub use vectorize::{TermCounts, tokenize};

// ============================================================================
// Model interfaces
// ============================================================================

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// `> 0` is positive, exactly `0` neutral, `< 0` negative.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies one message at a time, with no state carried between calls.
pub trait SentimentModel {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Ranks corpus terms, most important first, each with a weight.
pub trait KeywordRanker {
    fn rank_terms(&self, corpus: &[&str]) -> Result<Vec<(String, f64)>>;
}

/// Fits `num_topics` topics and returns each topic's terms, strongest first.
pub trait TopicModeler {
    fn fit_topics(&self, corpus: &[&str], num_topics: usize) -> Result<Vec<Vec<String>>>;
}

// ============================================================================
// Per-message and corpus operations
// ============================================================================

/// Sentiment of one message with the built-in lexicon.
pub fn sentiment(text: &str) -> Sentiment {
    LexiconSentiment.classify(text)
}

/// The `k` highest-ranked terms with their weights.
pub fn top_keywords<R, S>(ranker: &R, messages: &[S], k: usize) -> Result<Vec<(String, f64)>>
where
    R: KeywordRanker + ?Sized,
    S: AsRef<str>,
{
    let corpus: Vec<&str> = messages.iter().map(|m| m.as_ref()).collect();
    let mut ranked = ranker.rank_terms(&corpus)?;
    ranked.truncate(k);
    Ok(ranked)
}

/// Topic summaries formatted as `Topic i: term | term | ...`, numbered from 1.
pub fn topic_model<M, S>(modeler: &M, messages: &[S], num_topics: usize) -> Result<Vec<String>>
where
    M: TopicModeler + ?Sized,
    S: AsRef<str>,
{
    let corpus: Vec<&str> = messages.iter().map(|m| m.as_ref()).collect();
    let topics = modeler.fit_topics(&corpus, num_topics)?;
    Ok(topics
        .iter()
        .enumerate()
        .map(|(i, terms)| format!("Topic {}: {}", i + 1, terms.join(" | ")))
        .collect())
}

/// Message bodies of the selected sender, in transcript order.
pub fn corpus<'a>(transcript: &'a Transcript, sender: &'a SenderFilter) -> Vec<&'a str> {
    transcript.select(sender).map(|r| r.body()).collect()
}

// ============================================================================
// Sentiment aggregations
// ============================================================================

/// Message counts per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    fn add(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Sentiment counts on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentDay {
    pub date: NaiveDate,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDay {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Classifies every selected message and counts the labels.
pub fn sentiment_breakdown<M: SentimentModel + ?Sized>(
    transcript: &Transcript,
    sender: &SenderFilter,
    model: &M,
) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();
    for record in transcript.select(sender) {
        breakdown.add(model.classify(record.body()));
    }
    breakdown
}

/// Per-date sentiment counts, ascending by date; untimed messages are skipped.
pub fn sentiment_trend<M: SentimentModel + ?Sized>(
    transcript: &Transcript,
    sender: &SenderFilter,
    model: &M,
) -> Vec<SentimentDay> {
    let mut days: BTreeMap<NaiveDate, SentimentBreakdown> = BTreeMap::new();
    for record in transcript.select(sender) {
        if let Some(date) = record.date_only() {
            days.entry(date)
                .or_default()
                .add(model.classify(record.body()));
        }
    }

    days.into_iter()
        .map(|(date, counts)| SentimentDay {
            date,
            positive: counts.positive,
            neutral: counts.neutral,
            negative: counts.negative,
        })
        .collect()
}
