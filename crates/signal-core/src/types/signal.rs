//! Trading signal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete trading recommendation.
///
/// Derived, never persisted as authoritative state; recomputed each cycle.
/// A classifier with no trained model expresses "unknown" as `None`, not as
/// a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Hold,
    Sell,
}

impl Signal {
    /// All signal classes, in the fixed order used by the trained model's
    /// output columns.
    pub const ALL: [Signal; 3] = [Signal::Buy, Signal::Hold, Signal::Sell];

    /// Whether this signal should trigger a notification.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Signal::Buy | Signal::Sell)
    }

    /// Three-way RSI threshold rule: RSI > 70 is sell, RSI < 30 is buy,
    /// anything else is hold. Both boundaries are exclusive. The 0.0
    /// insufficient-history sentinel therefore classifies as buy, matching
    /// the labels the History Builder produces for warm-up rows.
    ///
    /// This single function backs both the History Builder's labeling and
    /// the rule-based classifier, so training labels and inference always
    /// agree.
    pub fn from_rsi(rsi: f64) -> Signal {
        if rsi > 70.0 {
            Signal::Sell
        } else if rsi < 30.0 {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }

    /// Index into the model's class columns.
    pub fn class_index(&self) -> usize {
        match self {
            Signal::Buy => 0,
            Signal::Hold => 1,
            Signal::Sell => 2,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "buy",
            Signal::Hold => "hold",
            Signal::Sell => "sell",
        };
        f.write_str(s)
    }
}

impl FromStr for Signal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Signal::Buy),
            "hold" => Ok(Signal::Hold),
            "sell" => Ok(Signal::Sell),
            other => Err(format!("unknown signal: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for signal in Signal::ALL {
            assert_eq!(signal.to_string().parse::<Signal>().unwrap(), signal);
        }
    }

    #[test]
    fn test_actionable() {
        assert!(Signal::Buy.is_actionable());
        assert!(Signal::Sell.is_actionable());
        assert!(!Signal::Hold.is_actionable());
    }

    #[test]
    fn test_rsi_thresholds_exclusive() {
        assert_eq!(Signal::from_rsi(75.0), Signal::Sell);
        assert_eq!(Signal::from_rsi(25.0), Signal::Buy);
        assert_eq!(Signal::from_rsi(50.0), Signal::Hold);
        // Boundaries are exclusive on both sides.
        assert_eq!(Signal::from_rsi(70.0), Signal::Hold);
        assert_eq!(Signal::from_rsi(30.0), Signal::Hold);
        // The insufficient-history sentinel stays below the buy threshold.
        assert_eq!(Signal::from_rsi(0.0), Signal::Buy);
    }

    #[test]
    fn test_class_indices_match_all_order() {
        for (i, signal) in Signal::ALL.iter().enumerate() {
            assert_eq!(signal.class_index(), i);
        }
    }
}
