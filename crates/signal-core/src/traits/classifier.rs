//! Classifier trait definition.

use crate::types::{FeatureVector, Signal};

/// Capability contract for signal classification.
///
/// Implementations are interchangeable: a fixed-threshold rule evaluator and
/// a trained statistical model both consume the same feature vector.
/// Classification is synchronous, CPU-light, and safe to call concurrently.
pub trait Classifier: Send + Sync {
    /// Classify a feature vector into a trading signal.
    ///
    /// Returns `None` when no prediction is available (e.g. no trained model
    /// loaded) rather than failing the caller.
    fn classify(&self, features: &FeatureVector) -> Option<Signal>;

    /// Get the classifier name.
    fn name(&self) -> &str;
}
