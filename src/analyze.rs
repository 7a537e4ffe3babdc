//! # Analysis Pipeline
//! Pure, testable logic that maps raw input text to an [`AnalysisResult`]:
//! normalization, classifier invocation, lexicon matching, sentiment scoring,
//! and severity tiering. No I/O; the model is passed in by the caller.

use serde::{Deserialize, Serialize};

use crate::highlight;
use crate::lexicon;
use crate::model::AbuseModel;
use crate::normalize;
use crate::sentiment::{self, Sentiment};

/// Binary classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    Abusive,
    NonAbusive,
}

/// Coarse severity bucket derived from classifier probability and match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Everything one analysis produces. Created fresh per call, immutable,
/// discarded after display — nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub normalized: String,
    /// Matched abusive tokens in first-occurrence order, duplicates preserved.
    pub abusive_tokens: Vec<String>,
    pub label: Label,
    /// Probability of the abusive class, in [0, 1].
    pub probability: f64,
    pub sentiment: Sentiment,
    /// Polarity in [-1, 1].
    pub polarity: f64,
    pub severity: Tier,
    /// Raw input with matched words wrapped in highlight spans.
    pub highlighted: String,
    pub total_words: usize,
    pub abusive_words: usize,
    pub clean_words: usize,
}

/// Severity tiering policy: no matched tokens is always `Low`; otherwise the
/// probability bands decide.
pub fn tier(probability: f64, abusive_token_count: usize) -> Tier {
    if abusive_token_count == 0 {
        Tier::Low
    } else if probability < 0.2 {
        Tier::Low
    } else if probability < 0.5 {
        Tier::Medium
    } else {
        Tier::High
    }
}

/// Run the full pipeline on raw input. Empty or whitespace-only input is a
/// no-op and returns `None` (not an error).
pub fn analyze(model: &AbuseModel, raw: &str) -> Option<AnalysisResult> {
    if raw.trim().is_empty() {
        return None;
    }

    // De-obfuscate once; matching and sentiment see the de-obfuscated text,
    // the classifier sees the fully cleaned form.
    let deobfuscated = normalize::normalize_censored(raw);
    let normalized = normalize::clean_text(&deobfuscated);

    let (abusive, probability) = model.classify(&normalized);
    let abusive_tokens = lexicon::detect(&deobfuscated);
    let (sent, polarity) = sentiment::sentiment(&deobfuscated);

    let total_words = normalized.split_whitespace().count();
    let abusive_words = abusive_tokens.len();
    let severity = tier(probability, abusive_words);
    let highlighted = highlight::highlight(raw, &abusive_tokens);

    Some(AnalysisResult {
        normalized,
        label: if abusive {
            Label::Abusive
        } else {
            Label::NonAbusive
        },
        probability,
        sentiment: sent,
        polarity,
        severity,
        highlighted,
        total_words,
        abusive_words,
        clean_words: total_words.saturating_sub(abusive_words),
        abusive_tokens,
    })
}
