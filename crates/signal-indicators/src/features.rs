//! Feature vector assembly.

use signal_core::{FeatureVector, Quote};

use crate::{macd, momentum, rsi, sma, trend_strength, volatility};

/// Default SMA period.
pub const SMA_PERIOD: usize = 20;
/// Default RSI period.
pub const RSI_PERIOD: usize = 14;
/// Default MACD short EMA period.
pub const MACD_SHORT: usize = 12;
/// Default MACD long EMA period.
pub const MACD_LONG: usize = 26;
/// Default volatility period.
pub const VOLATILITY_PERIOD: usize = 10;
/// Default momentum period.
pub const MOMENTUM_PERIOD: usize = 10;

/// Assemble the feature vector from a single intraday snapshot.
///
/// Indicators are computed over the narrow four-element
/// {open, high, low, close} window of the quote itself; there is no rolling
/// history buffer in the intraday path, so most indicator columns carry the
/// insufficient-history sentinel.
pub fn intraday(quote: &Quote) -> FeatureVector {
    compute(quote, &quote.intraday_window())
}

/// Assemble the feature vector from a quote and its accumulated close
/// history (oldest first, including the quote's own close as the last
/// element). Used by the History Builder.
pub fn from_series(quote: &Quote, closes: &[f64]) -> FeatureVector {
    compute(quote, closes)
}

fn compute(quote: &Quote, closes: &[f64]) -> FeatureVector {
    let sma = sma(closes, SMA_PERIOD);
    let macd = macd(closes, MACD_SHORT, MACD_LONG);
    FeatureVector {
        open: quote.open,
        high: quote.high,
        low: quote.low,
        close: quote.close,
        volume: quote.volume,
        sma,
        rsi: rsi(closes, RSI_PERIOD),
        macd,
        volatility: volatility(closes, VOLATILITY_PERIOD),
        momentum: momentum(closes, MOMENTUM_PERIOD),
        trend_strength: trend_strength(sma, macd),
    }
}
