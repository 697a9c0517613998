//! OHLCV quote snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV market-data snapshot for a symbol.
///
/// Immutable once produced by the quote source. Missing numeric fields in a
/// provider response default to 0.0 at deserialization time; callers treat
/// zeros as "unavailable", not true readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol identifier (BTC, ETH, ...)
    pub symbol: String,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
    /// Snapshot timestamp
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Create a new quote stamped with the current time.
    pub fn new(symbol: impl Into<String>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.into(),
            open,
            high,
            low,
            close,
            volume,
            timestamp: Utc::now(),
        }
    }

    /// The intraday four-element price window {open, high, low, close} used
    /// for single-snapshot indicator computation.
    pub fn intraday_window(&self) -> [f64; 4] {
        [self.open, self.high, self.low, self.close]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intraday_window_order() {
        let quote = Quote::new("BTC", 100.0, 110.0, 95.0, 105.0, 1_000_000.0);
        assert_eq!(quote.intraday_window(), [100.0, 110.0, 95.0, 105.0]);
    }
}
