//! CLI command implementations.

pub mod monitor;
pub mod predict;
pub mod train;
pub mod validate;

use anyhow::{Context, Result};
use signal_config::AppConfig;
use signal_core::Classifier;
use signal_data::{CmcQuoteSource, ProviderConfig};
use signal_model::{FileModelStore, ModelHandle, RuleClassifier};
use std::sync::Arc;

/// Build the provider client, resolving the API key from the configured
/// environment variable.
pub(crate) fn quote_source(config: &AppConfig) -> Result<CmcQuoteSource> {
    let api_key = std::env::var(&config.provider.api_key_env)
        .with_context(|| format!("{} not set", config.provider.api_key_env))?;
    let source =
        CmcQuoteSource::new(ProviderConfig::new(api_key, config.provider.base_url.clone()))?;
    Ok(source)
}

/// Pick the classifier: the rule evaluator on request, otherwise the trained
/// model handle loaded from the saved artifact (empty if none exists yet).
pub(crate) fn classifier(config: &AppConfig, rule: bool) -> Arc<dyn Classifier> {
    if rule {
        return Arc::new(RuleClassifier);
    }
    let store = FileModelStore::new(&config.model.artifact_path);
    match store.load() {
        Some(model) => Arc::new(ModelHandle::with_model(model)),
        None => Arc::new(ModelHandle::empty()),
    }
}
