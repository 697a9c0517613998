//! Softmax-regression model over the eleven feature columns.

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use signal_core::{FeatureVector, HistoricalRecord, ModelError, Signal, FEATURE_DIM};
use tracing::info;

const NUM_CLASSES: usize = 3;

/// Training hyperparameters.
///
/// The seed makes training deterministic: two runs over the same records
/// produce bit-identical models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            iterations: 1000,
            seed: 42,
        }
    }
}

/// A trained multiclass classifier.
///
/// Holds the regression weights plus the per-column normalization statistics
/// captured at training time; prediction normalizes its input with the same
/// statistics. Effectively immutable after training, safe to read
/// concurrently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    weights: Array2<f64>,
    bias: Array1<f64>,
    means: Array1<f64>,
    stds: Array1<f64>,
}

impl TrainedModel {
    /// Predict the signal class for a feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Signal {
        let x = Array1::from_iter(features.as_array());
        let normalized = (&x - &self.means) / &self.stds;
        let scores = normalized.dot(&self.weights) + &self.bias;

        let mut best = 0;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = i;
            }
        }
        Signal::ALL[best]
    }
}

/// Fit a softmax-regression classifier to labeled history records.
///
/// Full-batch gradient descent over mean/variance-normalized features.
/// Training with zero records is an input-validation error.
pub fn train(records: &[HistoricalRecord], config: &TrainConfig) -> Result<TrainedModel, ModelError> {
    if records.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }
    if config.learning_rate <= 0.0 {
        return Err(ModelError::InvalidParameter(
            "learning rate must be positive".into(),
        ));
    }

    let n = records.len();
    let mut x = Array2::zeros((n, FEATURE_DIM));
    let mut y = Array2::zeros((n, NUM_CLASSES));
    for (i, record) in records.iter().enumerate() {
        for (j, value) in record.features.as_array().into_iter().enumerate() {
            x[(i, j)] = value;
        }
        y[(i, record.label.class_index())] = 1.0;
    }

    // Mean/variance normalization; constant columns get unit scale so they
    // normalize to zero instead of dividing by zero.
    let means = x.sum_axis(Axis(0)) / n as f64;
    let mut stds = ((&x - &means).mapv(|v| v * v).sum_axis(Axis(0)) / n as f64).mapv(f64::sqrt);
    stds.mapv_inplace(|s| if s == 0.0 { 1.0 } else { s });
    let xn = (&x - &means) / &stds;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut weights =
        Array2::from_shape_fn((FEATURE_DIM, NUM_CLASSES), |_| rng.gen_range(-0.01..0.01));
    let mut bias = Array1::zeros(NUM_CLASSES);

    for _ in 0..config.iterations {
        let mut probs = xn.dot(&weights) + &bias;
        softmax_rows(&mut probs);
        let diff = &probs - &y;

        let grad_w = xn.t().dot(&diff) / n as f64;
        let grad_b = diff.sum_axis(Axis(0)) / n as f64;
        weights = weights - config.learning_rate * &grad_w;
        bias = bias - config.learning_rate * &grad_b;
    }

    info!(records = n, iterations = config.iterations, "model trained");
    Ok(TrainedModel {
        weights,
        bias,
        means,
        stds,
    })
}

/// In-place row-wise softmax, shifted by the row max for stability.
fn softmax_rows(logits: &mut Array2<f64>) {
    for mut row in logits.rows_mut() {
        let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        row.mapv_inplace(|v| (v - max).exp());
        let sum: f64 = row.iter().sum();
        row.mapv_inplace(|v| v / sum);
    }
}
