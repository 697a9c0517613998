//! Momentum indicators.

use crate::moving_average::ema;

/// Relative Strength Index.
///
/// Average gain and loss are taken over the first `period - 1` deltas of the
/// series. The fixed window (rather than a sliding last-`period` one) is kept
/// deliberately: the training labels were produced with it, and inference
/// must agree with them.
///
/// Returns 0.0 when the series is shorter than `period`, and 100.0 when the
/// cumulative loss over the window is exactly zero.
pub fn rsi(series: &[f64], period: usize) -> f64 {
    if period == 0 || series.len() < period {
        return 0.0;
    }

    let mut gain = 0.0;
    let mut loss = 0.0;
    for i in 1..period {
        let change = series[i] - series[i - 1];
        if change > 0.0 {
            gain += change;
        } else {
            loss -= change;
        }
    }

    if loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + gain / loss)
}

/// Moving Average Convergence/Divergence: short EMA minus long EMA.
pub fn macd(series: &[f64], short_period: usize, long_period: usize) -> f64 {
    ema(series, short_period) - ema(series, long_period)
}

/// Raw momentum: last value minus the value `period` steps back.
///
/// Returns 0.0 when the series is shorter than `period`.
pub fn momentum(series: &[f64], period: usize) -> f64 {
    if period == 0 || series.len() < period {
        return 0.0;
    }
    series[series.len() - 1] - series[series.len() - period]
}
