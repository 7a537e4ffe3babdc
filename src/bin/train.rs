//! Offline training binary.
//!
//! Reads the labeled CSV corpus, normalizes the texts, fits the TF-IDF +
//! logistic regression pipeline, reports held-out accuracy, and writes the
//! model artifact the server loads at startup.
//!
//! Usage: `train [corpus.csv] [artifact.json]`
//! (defaults: `data/sample_data.csv`, `abuse_model.json`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toxiguard::model::{corpus, AbuseModel, FitParams};
use toxiguard::normalize::normalize;

const DEFAULT_CORPUS: &str = "data/sample_data.csv";
const DEFAULT_ARTIFACT: &str = "abuse_model.json";
const TEST_FRACTION: f64 = 0.2;
const SPLIT_SEED: u64 = 42;

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toxiguard=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();

    let mut args = std::env::args().skip(1);
    let corpus_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_CORPUS.to_string()));
    let artifact_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_ARTIFACT.to_string()));

    let examples = corpus::load(&corpus_path)?;
    info!(rows = examples.len(), corpus = %corpus_path.display(), "corpus loaded");

    // Normalize up front so training and inference see identical text.
    let normalized: Vec<corpus::LabeledText> = examples
        .into_iter()
        .map(|ex| corpus::LabeledText {
            text: normalize(&ex.text),
            label: ex.label,
        })
        .collect();

    let (train, test) = corpus::split(normalized, TEST_FRACTION, SPLIT_SEED);

    let texts: Vec<String> = train.iter().map(|ex| ex.text.clone()).collect();
    let labels: Vec<bool> = train.iter().map(|ex| ex.label).collect();
    let model = AbuseModel::fit(&texts, &labels, FitParams::default());

    if test.is_empty() {
        println!("No held-out examples; skipping accuracy report.");
    } else {
        let accuracy = model.accuracy(&test);
        println!(
            "Model accuracy: {:.2}% ({} held-out examples)",
            accuracy * 100.0,
            test.len()
        );
    }

    model
        .save(&artifact_path)
        .context("persisting model artifact")?;
    println!("Model saved to {}", artifact_path.display());
    Ok(())
}
