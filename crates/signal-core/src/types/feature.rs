//! Feature vector derived from a quote and its price history.

use serde::{Deserialize, Serialize};

/// Number of feature columns consumed by the classifier.
pub const FEATURE_DIM: usize = 11;

/// Fixed-shape numeric input to the signal classifier.
///
/// Derived for one symbol at one point in time and owned solely by the
/// computation that produced it. Zero values in the indicator columns are
/// insufficient-history sentinels, not true readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub sma: f64,
    pub rsi: f64,
    pub macd: f64,
    pub volatility: f64,
    pub momentum: f64,
    pub trend_strength: f64,
}

impl FeatureVector {
    /// Feature columns in the fixed order the trained model expects.
    pub fn as_array(&self) -> [f64; FEATURE_DIM] {
        [
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.sma,
            self.rsi,
            self.macd,
            self.volatility,
            self.momentum,
            self.trend_strength,
        ]
    }
}
