//! Volatility.

/// Population standard deviation of the most recent `period` values.
///
/// Returns 0.0 when the series is shorter than `period`.
pub fn volatility(series: &[f64], period: usize) -> f64 {
    if period == 0 || series.len() < period {
        return 0.0;
    }
    let window = &series[series.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / period as f64;
    variance.sqrt()
}
