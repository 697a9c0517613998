//! Trend strength.

/// Magnitude of MACD relative to the SMA, as a percentage.
///
/// Returns 0.0 when `sma` is 0: a zero SMA is the insufficient-history
/// sentinel, so the ratio would only ever divide by an unavailable reading.
/// Saturating to 0 keeps the sentinel consistent instead of leaking
/// `inf`/`NaN` into the feature vector.
pub fn trend_strength(sma: f64, macd: f64) -> f64 {
    if sma == 0.0 {
        return 0.0;
    }
    (macd / sma).abs() * 100.0
}
