//! Lexicon-based polarity scoring.
//!
//! Each opinion word carries a weight; an intensifier directly before it
//! scales the weight and a negation within the two preceding words flips it
//! (at reduced strength). The polarity is the mean weight of the opinion
//! words found, clamped to `[-1.0, 1.0]`, or `0.0` when there are none.

use std::sync::LazyLock;

use regex::Regex;

use super::{Sentiment, SentimentModel};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}'’]+").expect("word pattern is valid"));

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("wonderful", 0.9),
    ("fantastic", 0.9),
    ("perfect", 1.0),
    ("brilliant", 0.9),
    ("best", 1.0),
    ("better", 0.5),
    ("nice", 0.6),
    ("cool", 0.4),
    ("fine", 0.3),
    ("happy", 0.8),
    ("glad", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("like", 0.2),
    ("enjoy", 0.4),
    ("enjoyed", 0.5),
    ("fun", 0.3),
    ("funny", 0.25),
    ("beautiful", 0.85),
    ("cute", 0.5),
    ("congrats", 0.7),
    ("congratulations", 0.7),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("welcome", 0.8),
    ("excited", 0.4),
    ("grateful", 0.6),
    ("lucky", 0.5),
    ("proud", 0.8),
    ("win", 0.8),
    ("won", 0.7),
    ("yay", 0.6),
    ("haha", 0.2),
    ("lol", 0.8),
    ("sweet", 0.35),
    ("super", 0.33),
    ("well", 0.1),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sad", -0.5),
    ("angry", -0.5),
    ("upset", -0.4),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("boring", -1.0),
    ("bored", -0.5),
    ("sick", -0.71),
    ("tired", -0.4),
    ("sorry", -0.5),
    ("wrong", -0.5),
    ("stupid", -0.8),
    ("ugly", -0.7),
    ("poor", -0.4),
    ("fail", -0.5),
    ("failed", -0.5),
    ("lost", -0.2),
    ("problem", -0.3),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("worried", -0.3),
    ("scared", -0.5),
    ("crazy", -0.6),
    ("hard", -0.3),
    ("late", -0.3),
    ("miss", -0.2),
    ("useless", -0.5),
    ("ugh", -0.4),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
    ("totally", 1.3),
    ("absolutely", 1.5),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "cannot",
];

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|&(_, weight)| weight)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n’t")
}

/// Built-in English opinion lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    /// Polarity score in `[-1.0, 1.0]`.
    ///
    /// ```
    /// use chatstat::text::LexiconSentiment;
    ///
    /// let model = LexiconSentiment::new();
    /// assert!(model.polarity("this is great") > 0.0);
    /// assert!(model.polarity("this is not great") < 0.0);
    /// assert_eq!(model.polarity("see you at six"), 0.0);
    /// ```
    pub fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = WORD_PATTERN.find_iter(&lowered).map(|m| m.as_str()).collect();

        let mut total = 0.0;
        let mut hits = 0u32;

        for (i, word) in words.iter().enumerate() {
            let Some(mut score) = lookup(POSITIVE, word).or_else(|| lookup(NEGATIVE, word)) else {
                continue;
            };

            // An intensifier that is itself an opinion word ("super") is
            // still counted on its own.
            if let Some(factor) = i.checked_sub(1).and_then(|p| lookup(INTENSIFIERS, words[p])) {
                score *= factor;
            }

            let negated = words[i.saturating_sub(2)..i].iter().any(|w| is_negation(w));
            if negated {
                score *= -0.5;
            }

            total += score;
            hits += 1;
        }

        if hits == 0 {
            0.0
        } else {
            (total / f64::from(hits)).clamp(-1.0, 1.0)
        }
    }
}

impl SentimentModel for LexiconSentiment {
    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}
