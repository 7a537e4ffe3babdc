//! # Abuse Classifier
//! TF-IDF + logistic regression pipeline: offline training, a single JSON
//! artifact on disk, and read-only inference shared across requests.
//!
//! The artifact is loaded once at startup; a missing or corrupt file is a
//! fatal error (no degraded mode). The decision threshold is fixed at
//! training time and is not configurable at inference.

pub mod corpus;
mod logistic;
mod vectorizer;

pub use self::logistic::FitParams;
pub use self::vectorizer::TfidfVectorizer;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use self::corpus::LabeledText;
use self::logistic::LogisticRegression;

/// Vocabulary cap used at training time.
pub const MAX_FEATURES: usize = 5000;
/// Decision threshold baked into the artifact.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Trained vectorizer + classifier pair. Opaque at request time: built by the
/// trainer, loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbuseModel {
    vectorizer: TfidfVectorizer,
    clf: LogisticRegression,
    threshold: f64,
}

impl AbuseModel {
    /// Fit the full pipeline on normalized texts with labels (true = abusive).
    pub fn fit(texts: &[String], labels: &[bool], params: FitParams) -> Self {
        let vectorizer = TfidfVectorizer::fit(texts, MAX_FEATURES);
        let rows: Vec<_> = texts.iter().map(|t| vectorizer.transform_one(t)).collect();
        let y: Vec<f64> = labels.iter().map(|&l| if l { 1.0 } else { 0.0 }).collect();
        let clf = LogisticRegression::fit(&rows, &y, vectorizer.num_features(), params);
        info!(
            num_texts = texts.len(),
            num_features = vectorizer.num_features(),
            "abuse model fitted"
        );
        Self {
            vectorizer,
            clf,
            threshold: DECISION_THRESHOLD,
        }
    }

    /// Classify normalized text: `(abusive, probability)` with the probability
    /// of the abusive class and the label from the fixed threshold.
    pub fn classify(&self, normalized: &str) -> (bool, f64) {
        let row = self.vectorizer.transform_one(normalized);
        let p = self.clf.predict_proba(&row);
        debug!(probability = p, "classified text");
        (p >= self.threshold, p)
    }

    /// Fraction of examples (normalized text + expected label) the model gets
    /// right. Returns 1.0 for an empty slice.
    pub fn accuracy(&self, examples: &[LabeledText]) -> f64 {
        if examples.is_empty() {
            return 1.0;
        }
        let correct = examples
            .iter()
            .filter(|ex| self.classify(&ex.text).0 == ex.label)
            .count();
        correct as f64 / examples.len() as f64
    }

    pub fn num_features(&self) -> usize {
        self.vectorizer.num_features()
    }

    /// Persist the fitted pipeline as a single JSON artifact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self).context("serializing model artifact")?;
        fs::write(path, json)
            .with_context(|| format!("writing model artifact to {}", path.display()))?;
        Ok(())
    }

    /// Load the artifact written by [`AbuseModel::save`]. Any failure here is
    /// fatal to the caller: the service must not start without a usable model.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading model artifact from {}", path.display()))?;
        let model: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing model artifact {}", path.display()))?;
        info!(
            num_features = model.num_features(),
            path = %path.display(),
            "model artifact loaded"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn sample_model() -> AbuseModel {
        let texts: Vec<String> = [
            "I hate you",
            "You are amazing",
            "This is stupid",
            "Have a great day",
            "Idiot!",
            "Thank you for helping",
        ]
        .iter()
        .map(|t| normalize(t))
        .collect();
        let labels = vec![true, false, true, false, true, false];
        AbuseModel::fit(&texts, &labels, FitParams::default())
    }

    #[test]
    fn separates_the_sample_corpus() {
        let model = sample_model();
        let (abusive, p) = model.classify(&normalize("I hate you"));
        assert!(abusive, "expected abusive, p = {p}");
        let (abusive, p) = model.classify(&normalize("Thank you for helping"));
        assert!(!abusive, "expected non-abusive, p = {p}");
    }

    #[test]
    fn classify_is_deterministic() {
        let model = sample_model();
        let a = model.classify("you are stupid");
        let b = model.classify("you are stupid");
        assert_eq!(a, b);
    }

    #[test]
    fn probability_stays_in_unit_interval() {
        let model = sample_model();
        for text in ["", "hate hate hate", "completely unseen words"] {
            let (_, p) = model.classify(text);
            assert!((0.0..=1.0).contains(&p), "p = {p} for {text:?}");
        }
    }

    #[test]
    fn artifact_round_trips_exactly() {
        let model = sample_model();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("abuse_model.json");

        model.save(&path).expect("save artifact");
        let loaded = AbuseModel::load(&path).expect("load artifact");

        for text in ["i hate you", "have a great day", "stupid idiot"] {
            assert_eq!(model.classify(text), loaded.classify(text));
        }
    }

    #[test]
    fn loading_missing_or_corrupt_artifacts_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(AbuseModel::load(&dir.path().join("nope.json")).is_err());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").expect("write bad artifact");
        assert!(AbuseModel::load(&bad).is_err());
    }
}
