//! Train command implementation.

use anyhow::{bail, Result};
use signal_config::load_config;
use signal_core::{HistoryStore, QuoteSource};
use signal_data::FileHistoryStore;
use signal_history::build_records;
use signal_model::{train, FileModelStore, TrainConfig};
use std::path::Path;
use tracing::info;

use crate::cli::commands::quote_source;
use crate::cli::TrainArgs;

pub async fn run(args: TrainArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let source = quote_source(&config)?;

    let days = args.days.unwrap_or(config.monitor.history_days);
    info!(symbol = %args.symbol, days, "fetching training history");

    let quotes = source.fetch_history(&args.symbol, days).await?;
    let records = build_records(&args.symbol, &quotes);
    if records.is_empty() {
        bail!("no valid data available for training");
    }

    // Persist the labeled rows alongside the model.
    let history = FileHistoryStore::new(&config.model.history_path);
    history.append(&records).await?;

    let train_config = TrainConfig {
        learning_rate: config.model.learning_rate,
        iterations: config.model.iterations,
        seed: config.model.seed,
    };
    let model = train(&records, &train_config)?;

    let store = FileModelStore::new(&config.model.artifact_path);
    store.save(&model)?;

    println!("Model trained on {} records", records.len());
    println!("Artifact saved to {}", store.path().display());
    println!("History appended to {}", history.path().display());

    Ok(())
}
