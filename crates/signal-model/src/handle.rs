//! Shared model handle with atomic replacement.

use std::sync::{Arc, RwLock};

use signal_core::{Classifier, FeatureVector, Signal};

use crate::model::TrainedModel;

/// Process-wide handle to the currently loaded model.
///
/// The model itself is effectively immutable; the handle swaps the inner
/// `Arc` as a unit, so in-flight classification calls observe either the
/// fully-old or fully-new model, never a mixture. Readers take a short read
/// lock only to clone the `Arc`.
#[derive(Debug, Default)]
pub struct ModelHandle {
    inner: RwLock<Option<Arc<TrainedModel>>>,
}

impl ModelHandle {
    /// A handle with no model loaded; classification returns `None` until
    /// one is installed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A handle pre-loaded with a model (e.g. from a saved artifact).
    pub fn with_model(model: TrainedModel) -> Self {
        Self {
            inner: RwLock::new(Some(Arc::new(model))),
        }
    }

    /// Snapshot the currently loaded model.
    pub fn current(&self) -> Option<Arc<TrainedModel>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically replace the loaded model.
    ///
    /// The swap seam for long-lived embedders that retrain while serving:
    /// a freshly trained model goes live without restarting readers. The
    /// CLI runs training as a separate process and picks up the saved
    /// artifact on the next start instead.
    pub fn replace(&self, model: TrainedModel) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(Arc::new(model));
    }

    /// Whether a model is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.current().is_some()
    }
}

impl Classifier for ModelHandle {
    fn classify(&self, features: &FeatureVector) -> Option<Signal> {
        self.current().map(|model| model.predict(features))
    }

    fn name(&self) -> &str {
        "trained"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{train, TrainConfig};
    use signal_core::HistoricalRecord;
    use std::thread;

    fn features() -> FeatureVector {
        FeatureVector {
            open: 100.0,
            high: 110.0,
            low: 90.0,
            close: 105.0,
            volume: 1000.0,
            sma: 100.0,
            rsi: 50.0,
            macd: 0.5,
            volatility: 2.0,
            momentum: 1.0,
            trend_strength: 0.5,
        }
    }

    fn constant_model(label: Signal) -> TrainedModel {
        // A single-class training set converges to predicting that class
        // for any input.
        let records: Vec<_> = (0..10)
            .map(|_| HistoricalRecord {
                symbol: "BTC".to_string(),
                features: features(),
                label,
            })
            .collect();
        train(&records, &TrainConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_handle_returns_unknown() {
        let handle = ModelHandle::empty();
        assert!(!handle.is_loaded());
        assert_eq!(handle.classify(&features()), None);
    }

    #[test]
    fn test_loaded_handle_predicts() {
        let handle = ModelHandle::with_model(constant_model(Signal::Buy));
        assert_eq!(handle.classify(&features()), Some(Signal::Buy));
    }

    #[test]
    fn test_replace_swaps_prediction() {
        let handle = ModelHandle::with_model(constant_model(Signal::Buy));
        handle.replace(constant_model(Signal::Sell));
        assert_eq!(handle.classify(&features()), Some(Signal::Sell));
    }

    #[test]
    fn test_replace_is_atomic_under_concurrent_reads() {
        let handle = Arc::new(ModelHandle::with_model(constant_model(Signal::Buy)));
        let replacement = constant_model(Signal::Sell);

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || {
                    for _ in 0..500 {
                        // Every observation is one whole model or the other.
                        let signal = handle.classify(&features()).unwrap();
                        assert!(signal == Signal::Buy || signal == Signal::Sell);
                    }
                })
            })
            .collect();

        handle.replace(replacement);
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(handle.classify(&features()), Some(Signal::Sell));
    }
}
