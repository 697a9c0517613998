//! Monitor command implementation.

use anyhow::Result;
use signal_config::load_config;
use signal_core::{Holding, HoldingsStore};
use signal_data::{LogNotifier, MemoryHoldings};
use signal_monitor::Monitor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::cli::commands::{classifier, quote_source};
use crate::cli::MonitorArgs;

pub async fn run(args: MonitorArgs, config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;

    let holdings = MemoryHoldings::new();
    for symbol in &args.symbols {
        holdings
            .upsert(Holding {
                user_id: "local".to_string(),
                symbol: symbol.clone(),
                amount: 0.0,
            })
            .await?;
    }

    let monitor = Monitor::new(
        Arc::new(quote_source(&config)?),
        Arc::new(holdings),
        classifier(&config, args.rule),
        Arc::new(LogNotifier),
        Duration::from_secs(config.monitor.interval_secs),
    );

    let shutdown = CancellationToken::new();
    let task = {
        let monitor = monitor.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move { monitor.run(shutdown).await })
    };

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, stopping monitor");
    shutdown.cancel();
    task.await?;

    Ok(())
}
