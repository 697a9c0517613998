//! Predict command implementation.

use anyhow::Result;
use signal_config::load_config;
use signal_core::QuoteSource;
use signal_indicators::features;
use std::path::Path;

use crate::cli::commands::{classifier, quote_source};
use crate::cli::PredictArgs;

pub async fn run(args: PredictArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = quote_source(&config)?;

    let quote = source.fetch_latest(&args.symbol).await?;
    let features = features::intraday(&quote);
    let classifier = classifier(&config, args.rule);

    println!("Symbol: {}", quote.symbol);
    println!(
        "OHLCV: {} / {} / {} / {} / {}",
        quote.open, quote.high, quote.low, quote.close, quote.volume
    );
    match classifier.classify(&features) {
        Some(signal) => println!("Decision: {signal}"),
        None => println!("Decision: unknown (no trained model; run `train` first or pass --rule)"),
    }

    Ok(())
}
