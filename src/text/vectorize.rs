//! Bag-of-words vectorization shared by keyword ranking and topic models.
//!
//! Tokens are runs of two or more word characters in the lowercased text,
//! minus English stop words. Terms are then pruned by document frequency:
//! a term must appear in at least `min_df` messages and in no more than
//! `max_df` (a fraction) of them.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use stop_words::{LANGUAGE, get};
use tracing::debug;

use crate::config::TextConfig;
use crate::error::{ChatstatError, Result};

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    get(LANGUAGE::English)
        .iter()
        .map(ToString::to_string)
        .collect()
});

/// Lowercased tokens of `text`, stop words removed.
///
/// ```
/// use chatstat::text::tokenize;
///
/// assert_eq!(tokenize("The Pizza was SPICY, pizza!"), vec!["pizza", "spicy", "pizza"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(*t))
        .map(str::to_string)
        .collect()
}

/// Sparse term counts for a corpus after document-frequency pruning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCounts {
    /// Kept terms in alphabetical order; a term's position is its id.
    pub terms: Vec<String>,
    /// Per message, `(term id, count)` pairs in ascending id order.
    pub documents: Vec<Vec<(usize, usize)>>,
    /// Number of messages each term appears in.
    pub document_frequency: Vec<usize>,
}

impl TermCounts {
    /// Tokenizes and prunes `corpus`.
    ///
    /// # Errors
    ///
    /// [`ChatstatError::InsufficientData`] when the corpus has fewer than two
    /// messages, when `max_df` leaves room for fewer messages than `min_df`
    /// requires, or when fewer than `min_vocabulary` terms survive pruning.
    pub fn fit<S: AsRef<str>>(corpus: &[S], config: &TextConfig, model: &'static str) -> Result<Self> {
        let n_docs = corpus.len();
        if n_docs < 2 {
            return Err(ChatstatError::insufficient_data(
                model,
                format!("needs at least 2 messages, got {n_docs}"),
            ));
        }

        let max_docs = config.max_df * n_docs as f64;
        if max_docs < config.min_df as f64 {
            return Err(ChatstatError::insufficient_data(
                model,
                format!(
                    "{n_docs} messages leave room for {max_docs:.2} per term, below min_df {}",
                    config.min_df
                ),
            ));
        }

        let bags: Vec<BTreeMap<String, usize>> = corpus
            .iter()
            .map(|doc| {
                let mut bag = BTreeMap::new();
                for token in tokenize(doc.as_ref()) {
                    *bag.entry(token).or_insert(0) += 1;
                }
                bag
            })
            .collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for bag in &bags {
            for term in bag.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let total_terms = df.len();
        let kept: BTreeMap<&str, usize> = df
            .into_iter()
            .filter(|&(_, f)| f >= config.min_df && f as f64 <= max_docs)
            .collect();

        debug!(
            model,
            messages = n_docs,
            vocabulary = total_terms,
            kept = kept.len(),
            "vectorized corpus"
        );

        if kept.len() < config.min_vocabulary {
            return Err(ChatstatError::insufficient_data(
                model,
                format!(
                    "{} terms left after pruning, need at least {}",
                    kept.len(),
                    config.min_vocabulary
                ),
            ));
        }

        let ids: BTreeMap<&str, usize> = kept.keys().enumerate().map(|(i, &t)| (t, i)).collect();
        let documents = bags
            .iter()
            .map(|bag| {
                bag.iter()
                    .filter_map(|(term, &count)| ids.get(term.as_str()).map(|&id| (id, count)))
                    .collect()
            })
            .collect();

        Ok(Self {
            terms: kept.keys().map(|t| (*t).to_string()).collect(),
            document_frequency: kept.into_values().collect(),
            documents,
        })
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }
}
