//! Validate configuration command.

use anyhow::Result;
use signal_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Provider base URL: {}", config.provider.base_url);
            println!("API key env var: {}", config.provider.api_key_env);
            println!("Scan interval: {}s", config.monitor.interval_secs);
            println!("History window: {} days", config.monitor.history_days);
            println!("Model artifact: {}", config.model.artifact_path);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
