//! Binary logistic regression over sparse feature vectors, fit by full-batch
//! gradient descent. Deterministic: no random initialization, fixed iteration
//! count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::vectorizer::SparseVec;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

/// Hyperparameters for [`LogisticRegression::fit`].
#[derive(Debug, Clone, Copy)]
pub struct FitParams {
    pub max_iter: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            learning_rate: 0.5,
            l2: 1e-3,
        }
    }
}

impl LogisticRegression {
    /// Fit on sparse rows with labels in {0.0, 1.0}.
    pub fn fit(rows: &[SparseVec], labels: &[f64], num_features: usize, params: FitParams) -> Self {
        assert_eq!(rows.len(), labels.len(), "rows/labels length mismatch");
        debug!(
            num_rows = rows.len(),
            num_features,
            max_iter = params.max_iter,
            "fitting logistic regression"
        );

        let mut weights = vec![0.0f64; num_features];
        let mut bias = 0.0f64;
        let n = rows.len().max(1) as f64;

        let mut grad = vec![0.0f64; num_features];
        for _ in 0..params.max_iter {
            grad.iter_mut().for_each(|g| *g = 0.0);
            let mut grad_b = 0.0f64;

            for (row, &y) in rows.iter().zip(labels) {
                let p = sigmoid(dot(&weights, bias, row));
                let err = p - y;
                for &(idx, v) in row {
                    grad[idx] += err * v;
                }
                grad_b += err;
            }

            for (w, g) in weights.iter_mut().zip(&grad) {
                *w -= params.learning_rate * (g / n + params.l2 * *w);
            }
            bias -= params.learning_rate * grad_b / n;
        }

        Self { weights, bias }
    }

    /// Probability of the positive class.
    pub fn predict_proba(&self, row: &SparseVec) -> f64 {
        sigmoid(dot(&self.weights, self.bias, row))
    }

    pub fn num_features(&self) -> usize {
        self.weights.len()
    }
}

fn dot(weights: &[f64], bias: f64, row: &SparseVec) -> f64 {
    row.iter().map(|&(idx, v)| weights[idx] * v).sum::<f64>() + bias
}

/// Numerically stable sigmoid.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
