//! Moving averages.

/// Simple Moving Average over the most recent `period` values.
///
/// Returns 0.0 when the series is shorter than `period`.
pub fn sma(series: &[f64], period: usize) -> f64 {
    if period == 0 || series.len() < period {
        return 0.0;
    }
    let window = &series[series.len() - period..];
    window.iter().sum::<f64>() / period as f64
}

/// Exponential Moving Average.
///
/// Seeded with the arithmetic mean of the first `period` values, then
/// `ema = (price - ema) * 2/(period+1) + ema` for each subsequent value.
/// Returns 0.0 when the series is shorter than `period`.
pub fn ema(series: &[f64], period: usize) -> f64 {
    if period == 0 || series.len() < period {
        return 0.0;
    }
    let smoothing = 2.0 / (period as f64 + 1.0);
    let mut ema = series[..period].iter().sum::<f64>() / period as f64;
    for &price in &series[period..] {
        ema = (price - ema) * smoothing + ema;
    }
    ema
}
