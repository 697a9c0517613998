//! Incremental record building.

use signal_core::{HistoricalRecord, Quote, Signal};
use signal_indicators::features;
use tracing::debug;

/// Convert a time-ordered quote sequence (oldest first) into labeled
/// feature rows.
///
/// For each quote the close is appended to a running series and indicators
/// are computed against the history accumulated so far: only quotes seen up
/// to and including the current one, no look-ahead. The label comes from the
/// RSI threshold rule shared with the rule-based classifier.
///
/// Output length equals input length and order is preserved. Malformed
/// provider fields have already been zero-defaulted at deserialization, so
/// nothing here fails; an empty input yields an empty output.
pub fn build_records(symbol: &str, quotes: &[Quote]) -> Vec<HistoricalRecord> {
    let mut closes = Vec::with_capacity(quotes.len());
    let mut records = Vec::with_capacity(quotes.len());

    for quote in quotes {
        closes.push(quote.close);
        let features = features::from_series(quote, &closes);
        let label = Signal::from_rsi(features.rsi);
        records.push(HistoricalRecord {
            symbol: symbol.to_string(),
            features,
            label,
        });
    }

    debug!(symbol, records = records.len(), "built history records");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_quotes(closes: &[f64]) -> Vec<Quote> {
        closes
            .iter()
            .map(|&c| Quote::new("BTC", c, c + 1.0, c - 1.0, c, 1000.0))
            .collect()
    }

    #[test]
    fn test_output_length_matches_input() {
        for n in [0usize, 1, 5, 25] {
            let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
            let quotes = daily_quotes(&closes);
            let records = build_records("BTC", &quotes);
            assert_eq!(records.len(), quotes.len());
        }
    }

    #[test]
    fn test_order_preserved() {
        let closes: Vec<f64> = (0..10).map(|i| 50.0 + i as f64).collect();
        let quotes = daily_quotes(&closes);
        let records = build_records("BTC", &quotes);
        for (record, quote) in records.iter().zip(&quotes) {
            assert_eq!(record.features.close, quote.close);
        }
    }

    #[test]
    fn test_sustained_downtrend_labels_buy_after_warmup() {
        // 25 monotonically decreasing closes: once RSI has a full window
        // (index 14 onward, 15 closes and beyond) the window has zero gains,
        // so RSI stays at 0 and every record is labeled buy.
        let closes: Vec<f64> = (0..25).map(|i| 100.0 - i as f64).collect();
        let quotes = daily_quotes(&closes);
        let records = build_records("BTC", &quotes);

        for record in &records[14..] {
            assert_eq!(record.features.rsi, 0.0);
            assert_eq!(record.label, Signal::Buy);
        }
    }

    #[test]
    fn test_no_lookahead() {
        // Record at index i must be identical whether or not later quotes
        // exist in the input.
        let closes: Vec<f64> = (0..30).map(|i| (i as f64 * 0.9).cos() * 10.0 + 100.0).collect();
        let quotes = daily_quotes(&closes);

        let full = build_records("BTC", &quotes);
        let prefix = build_records("BTC", &quotes[..20]);
        assert_eq!(&full[..20], &prefix[..]);
    }

    #[test]
    fn test_label_agrees_with_rule() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 13) as f64).collect();
        let quotes = daily_quotes(&closes);
        for record in build_records("BTC", &quotes) {
            assert_eq!(record.label, Signal::from_rsi(record.features.rsi));
        }
    }
}
