//! Labeled training corpus: a UTF-8 CSV with a `text,label` header and labels
//! in {`abusive`, `non-abusive`}, plus the deterministic train/test split.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use std::path::Path;

pub const LABEL_ABUSIVE: &str = "abusive";
pub const LABEL_NON_ABUSIVE: &str = "non-abusive";

/// One labeled example; `label` is true for abusive.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledText {
    pub text: String,
    pub label: bool,
}

#[derive(Debug, Deserialize)]
struct Row {
    text: String,
    label: String,
}

/// Load the corpus from a CSV file. Unknown labels are an error, not a skip,
/// so a malformed corpus fails loudly before training.
pub fn load(path: &Path) -> Result<Vec<LabeledText>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening training corpus {}", path.display()))?;

    let mut out = Vec::new();
    for (i, row) in reader.deserialize::<Row>().enumerate() {
        let row = row.with_context(|| format!("parsing corpus row {}", i + 1))?;
        let label = match row.label.as_str() {
            LABEL_ABUSIVE => true,
            LABEL_NON_ABUSIVE => false,
            other => bail!("row {}: unknown label {:?}", i + 1, other),
        };
        out.push(LabeledText {
            text: row.text,
            label,
        });
    }
    if out.is_empty() {
        bail!("training corpus {} has no rows", path.display());
    }
    Ok(out)
}

/// Seeded shuffle + split. `test_fraction` of the examples (rounded up, but
/// always leaving at least one training example) go to the held-out set.
pub fn split(
    mut examples: Vec<LabeledText>,
    test_fraction: f64,
    seed: u64,
) -> (Vec<LabeledText>, Vec<LabeledText>) {
    let mut rng = StdRng::seed_from_u64(seed);
    examples.shuffle(&mut rng);

    let n = examples.len();
    let n_test = ((n as f64 * test_fraction).ceil() as usize).min(n.saturating_sub(1));
    let test = examples.split_off(n - n_test);
    (examples, test)
}
