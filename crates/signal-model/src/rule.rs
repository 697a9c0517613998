//! Rule-based classifier.

use signal_core::{Classifier, FeatureVector, Signal};

/// Fixed-threshold classifier over the RSI column.
///
/// Uses the same rule the History Builder labels training rows with, so
/// rule-based inference agrees with model training labels by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl Classifier for RuleClassifier {
    fn classify(&self, features: &FeatureVector) -> Option<Signal> {
        Some(Signal::from_rsi(features.rsi))
    }

    fn name(&self) -> &str {
        "rule"
    }
}
