//! Configuration structures.

use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub monitor: MonitorSettings,
    #[serde(default)]
    pub model: ModelSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "crypto-signal".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Market-data provider settings. The API key is read from an environment
/// variable, never stored in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub api_key_env: String,
    pub base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key_env: "CMC_API_KEY".to_string(),
            base_url: "https://pro-api.coinmarketcap.com/v1".to_string(),
        }
    }
}

/// Monitoring loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Inter-cycle delay in seconds.
    pub interval_secs: u64,
    /// Days of history fetched for training.
    pub history_days: u32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            interval_secs: 600,
            history_days: 30,
        }
    }
}

/// Trained-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Where the model artifact is persisted.
    pub artifact_path: String,
    /// Where labeled training rows accumulate, one JSON record per line.
    pub history_path: String,
    pub learning_rate: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            artifact_path: "crypto_signal_model.json".to_string(),
            history_path: "crypto_signal_history.jsonl".to_string(),
            learning_rate: 0.1,
            iterations: 1000,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.monitor.interval_secs, 600);
        assert_eq!(config.monitor.history_days, 30);
        assert_eq!(config.model.seed, 42);
        assert_eq!(config.model.history_path, "crypto_signal_history.jsonl");
        assert_eq!(config.provider.api_key_env, "CMC_API_KEY");
    }

    #[test]
    fn test_partial_file_overrides() {
        let raw = r#"
            [monitor]
            interval_secs = 60
            history_days = 90
        "#;
        let config: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.monitor.interval_secs, 60);
        assert_eq!(config.monitor.history_days, 90);
        // Untouched sections keep their defaults.
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.model.iterations, 1000);
    }
}
