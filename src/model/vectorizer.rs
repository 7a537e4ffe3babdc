//! TF-IDF vectorizer over unigram word counts.
//!
//! Follows the common text-classification conventions: tokens are two-plus
//! character word runs, IDF is smoothed (`ln((1 + n) / (1 + df)) + 1`) and each
//! document vector is L2-normalized. The vocabulary is capped at a fixed
//! feature budget, keeping the most frequent terms; indices are assigned in
//! alphabetical order so fitting is fully deterministic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

static RE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern"));

/// Sparse document vector: `(feature index, value)` pairs sorted by index.
pub type SparseVec = Vec<(usize, f64)>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit vocabulary and IDF values on a corpus of (already normalized) texts.
    pub fn fit<T: AsRef<str>>(texts: &[T], max_features: usize) -> Self {
        debug!(num_texts = texts.len(), max_features, "fitting TF-IDF vectorizer");

        // Document frequency and total term count per token.
        let mut df: HashMap<String, usize> = HashMap::new();
        let mut tf_total: HashMap<String, usize> = HashMap::new();
        for text in texts {
            let counts = count_tokens(text.as_ref());
            for (tok, c) in counts {
                *df.entry(tok.clone()).or_insert(0) += 1;
                *tf_total.entry(tok).or_insert(0) += c;
            }
        }

        // Cap the vocabulary: keep the highest-frequency terms, ties broken
        // alphabetically, then assign indices in alphabetical order.
        let mut ranked: Vec<(String, usize)> = tf_total.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_features);
        let mut selected: Vec<String> = ranked.into_iter().map(|(tok, _)| tok).collect();
        selected.sort();

        let n_docs = texts.len() as f64;
        let mut vocab = HashMap::with_capacity(selected.len());
        let mut idf = Vec::with_capacity(selected.len());
        for (idx, tok) in selected.into_iter().enumerate() {
            let doc_freq = df.get(&tok).copied().unwrap_or(0) as f64;
            idf.push(((n_docs + 1.0) / (doc_freq + 1.0)).ln() + 1.0);
            vocab.insert(tok, idx);
        }

        debug!(vocab_size = vocab.len(), "TF-IDF fit complete");
        Self { vocab, idf }
    }

    /// Transform a single document into its L2-normalized TF-IDF vector.
    /// Tokens outside the vocabulary are dropped.
    pub fn transform_one(&self, text: &str) -> SparseVec {
        let mut entries: SparseVec = count_tokens(text)
            .into_iter()
            .filter_map(|(tok, count)| {
                self.vocab
                    .get(&tok)
                    .map(|&idx| (idx, count as f64 * self.idf[idx]))
            })
            .collect();
        entries.sort_by_key(|&(idx, _)| idx);

        let norm = entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in entries.iter_mut() {
                *v /= norm;
            }
        }
        entries
    }

    pub fn num_features(&self) -> usize {
        self.vocab.len()
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocab
    }
}

/// Per-document token counts (two-plus character word runs, lowercased).
fn count_tokens(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for m in RE_TOKEN.find_iter(&lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}
