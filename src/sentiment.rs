//! # Sentiment Scoring
//! Lexicon-based polarity scorer. Word scores live in an embedded JSON asset
//! (integer scores in -5..=5); the text polarity is the average score over
//! scored words, scaled into [-1, 1].
//!
//! Threshold policy: polarity > 0.1 is Positive, < -0.1 is Negative,
//! everything else Neutral.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../assets/sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Coarse sentiment label derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Scalar polarity in [-1, 1]; 0.0 when no token is in the sentiment lexicon.
pub fn polarity(text: &str) -> f64 {
    let mut sum: i64 = 0;
    let mut scored: usize = 0;
    for tok in tokenize(text) {
        if let Some(&s) = LEXICON.get(&tok) {
            sum += s as i64;
            scored += 1;
        }
    }
    if scored == 0 {
        return 0.0;
    }
    (sum as f64 / (5.0 * scored as f64)).clamp(-1.0, 1.0)
}

/// Polarity plus its label under the fixed thresholds.
pub fn sentiment(text: &str) -> (Sentiment, f64) {
    let p = polarity(text);
    let label = if p > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if p < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };
    (label, p)
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}
