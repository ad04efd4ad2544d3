//! TF-IDF keyword ranking.

use super::KeywordRanker;
use super::vectorize::TermCounts;
use crate::config::TextConfig;
use crate::error::Result;

/// Ranks terms by their summed TF-IDF weight across messages.
///
/// Weights follow the usual smoothed form: raw term count times
/// `ln((1 + n) / (1 + df)) + 1`, with each message's vector scaled to unit
/// length. A term's reported weight is its largest weight in any single
/// message.
#[derive(Debug, Clone, Default)]
pub struct TfIdfRanker {
    config: TextConfig,
}

impl TfIdfRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }
}

impl KeywordRanker for TfIdfRanker {
    fn rank_terms(&self, corpus: &[&str]) -> Result<Vec<(String, f64)>> {
        let counts = TermCounts::fit(corpus, &self.config, "TF-IDF")?;
        let n = counts.num_documents() as f64;

        let idf: Vec<f64> = counts
            .document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut column_sum = vec![0.0; counts.num_terms()];
        let mut column_max = vec![0.0_f64; counts.num_terms()];

        for doc in &counts.documents {
            let weights: Vec<(usize, f64)> = doc
                .iter()
                .map(|&(id, tf)| (id, tf as f64 * idf[id]))
                .collect();
            let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm == 0.0 {
                continue;
            }
            for (id, w) in weights {
                let w = w / norm;
                column_sum[id] += w;
                column_max[id] = column_max[id].max(w);
            }
        }

        let mut order: Vec<usize> = (0..counts.num_terms()).collect();
        order.sort_by(|&a, &b| column_sum[b].total_cmp(&column_sum[a]));

        Ok(order
            .into_iter()
            .map(|id| (counts.terms[id].clone(), column_max[id]))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec![
            "pizza tonight?",
            "pizza pizza pizza",
            "guitar practice",
            "guitar after pizza",
            "chess club",
            "chess or guitar",
        ]
    }

    #[test]
    fn test_rank_terms_order() {
        let ranked = TfIdfRanker::new().rank_terms(&corpus()).unwrap();
        let terms: Vec<_> = ranked.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(terms, vec!["pizza", "guitar", "chess"]);
    }

    #[test]
    fn test_rank_terms_weight_is_row_maximum() {
        let ranked = TfIdfRanker::new().rank_terms(&corpus()).unwrap();
        // "pizza pizza pizza" has only one kept term, so it normalizes to 1
        assert!((ranked[0].1 - 1.0).abs() < 1e-12);
        assert!(ranked.iter().all(|(_, w)| *w > 0.0 && *w <= 1.0));
    }

    #[test]
    fn test_rank_terms_single_message() {
        let err = TfIdfRanker::new().rank_terms(&["pizza"]).unwrap_err();
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_rank_terms_custom_min_df() {
        let ranker = TfIdfRanker::with_config(TextConfig::new().with_min_df(3));
        let mut terms: Vec<_> = ranker
            .rank_terms(&corpus())
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        terms.sort();
        // chess only reaches two messages
        assert_eq!(terms, vec!["guitar", "pizza"]);
    }
}
