//! Latent Dirichlet Allocation by collapsed Gibbs sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::TopicModeler;
use super::vectorize::TermCounts;
use crate::config::TextConfig;
use crate::error::Result;

/// Seeded LDA topic model over pruned term counts.
///
/// The same corpus, topic count and seed always produce the same topics.
/// Priors default to `1 / num_topics` for both the document-topic and the
/// topic-term distributions; non-positive priors fall back to that default.
#[derive(Debug, Clone, Default)]
pub struct GibbsLda {
    config: TextConfig,
}

impl GibbsLda {
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

/// Sampler state: one topic assignment per token plus the count tables.
struct Sampler {
    /// `(document, term)` for every token occurrence.
    tokens: Vec<(usize, usize)>,
    assignments: Vec<usize>,
    doc_topic: Vec<Vec<usize>>,
    term_topic: Vec<Vec<usize>>,
    topic_total: Vec<usize>,
}

impl Sampler {
    fn new(counts: &TermCounts, num_topics: usize, rng: &mut StdRng) -> Self {
        let tokens: Vec<(usize, usize)> = counts
            .documents
            .iter()
            .enumerate()
            .flat_map(|(d, doc)| {
                doc.iter()
                    .flat_map(move |&(term, n)| std::iter::repeat_n((d, term), n))
            })
            .collect();

        let mut sampler = Self {
            assignments: Vec::with_capacity(tokens.len()),
            doc_topic: vec![vec![0; num_topics]; counts.num_documents()],
            term_topic: vec![vec![0; num_topics]; counts.num_terms()],
            topic_total: vec![0; num_topics],
            tokens,
        };

        for i in 0..sampler.tokens.len() {
            let topic = rng.gen_range(0..num_topics);
            sampler.assignments.push(topic);
            sampler.add(i, topic);
        }

        sampler
    }

    fn add(&mut self, i: usize, topic: usize) {
        let (d, w) = self.tokens[i];
        self.doc_topic[d][topic] += 1;
        self.term_topic[w][topic] += 1;
        self.topic_total[topic] += 1;
    }

    fn remove(&mut self, i: usize, topic: usize) {
        let (d, w) = self.tokens[i];
        self.doc_topic[d][topic] -= 1;
        self.term_topic[w][topic] -= 1;
        self.topic_total[topic] -= 1;
    }

    fn sweep(&mut self, alpha: f64, beta: f64, rng: &mut StdRng, weights: &mut [f64]) {
        let vocab_beta = self.term_topic.len() as f64 * beta;

        for i in 0..self.tokens.len() {
            let (d, w) = self.tokens[i];
            let old = self.assignments[i];
            self.remove(i, old);

            let mut total = 0.0;
            for (t, weight) in weights.iter_mut().enumerate() {
                *weight = (self.term_topic[w][t] as f64 + beta)
                    * (self.doc_topic[d][t] as f64 + alpha)
                    / (self.topic_total[t] as f64 + vocab_beta);
                total += *weight;
            }

            let mut target = rng.gen_range(0.0..total);
            let mut new = weights.len() - 1;
            for (t, &weight) in weights.iter().enumerate() {
                if target < weight {
                    new = t;
                    break;
                }
                target -= weight;
            }

            self.assignments[i] = new;
            self.add(i, new);
        }
    }
}

impl TopicModeler for GibbsLda {
    fn fit_topics(&self, corpus: &[&str], num_topics: usize) -> Result<Vec<Vec<String>>> {
        let counts = TermCounts::fit(corpus, &self.config, "LDA")?;
        if num_topics == 0 {
            return Ok(Vec::new());
        }

        let prior = 1.0 / num_topics as f64;
        let alpha = self.config.alpha.filter(|a| *a > 0.0).unwrap_or(prior);
        let beta = self.config.beta.filter(|b| *b > 0.0).unwrap_or(prior);

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut sampler = Sampler::new(&counts, num_topics, &mut rng);
        let mut weights = vec![0.0; num_topics];

        for _ in 0..self.config.iterations {
            sampler.sweep(alpha, beta, &mut rng, &mut weights);
        }

        debug!(
            topics = num_topics,
            terms = counts.num_terms(),
            tokens = sampler.tokens.len(),
            iterations = self.config.iterations,
            "fitted topic model"
        );

        let topics = (0..num_topics)
            .map(|t| {
                let mut order: Vec<usize> = (0..counts.num_terms()).collect();
                // Stable: equal weights keep alphabetical order.
                order.sort_by(|&a, &b| sampler.term_topic[b][t].cmp(&sampler.term_topic[a][t]));
                order
                    .into_iter()
                    .take(self.config.terms_per_topic)
                    .map(|id| counts.terms[id].clone())
                    .collect()
            })
            .collect();

        Ok(topics)
    }
}
