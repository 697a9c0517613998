//! CoinMarketCap-style quote provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use serde::Deserialize;
use signal_core::{DataError, Quote, QuoteSource};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Provider connection settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

/// HTTP client for a CoinMarketCap-compatible market-data API.
///
/// Responses are schema-typed with optional numeric fields; a missing field
/// defaults to 0.0 in the produced [`Quote`] rather than failing the fetch.
/// Request timeouts live here, not in the callers.
pub struct CmcQuoteSource {
    client: Client,
    config: ProviderConfig,
}

/// `/cryptocurrency/quotes/latest` response.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    data: HashMap<String, SymbolEntry>,
}

#[derive(Debug, Deserialize)]
struct SymbolEntry {
    quote: Option<QuoteBlock>,
}

/// `/cryptocurrency/ohlcv/historical` response.
#[derive(Debug, Deserialize)]
struct HistoricalResponse {
    data: Option<HistoricalData>,
}

#[derive(Debug, Deserialize)]
struct HistoricalData {
    #[serde(default)]
    quotes: Vec<HistoricalEntry>,
}

#[derive(Debug, Deserialize)]
struct HistoricalEntry {
    quote: Option<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(rename = "USD")]
    usd: Option<UsdQuote>,
}

/// USD quote block with every numeric field optional.
#[derive(Debug, Default, Deserialize)]
struct UsdQuote {
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
    volume_24h: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
}

impl UsdQuote {
    /// Resolve optional fields into a quote with the zero-default policy.
    fn into_quote(self, symbol: &str) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            open: self.open.unwrap_or_default(),
            high: self.high.unwrap_or_default(),
            low: self.low.unwrap_or_default(),
            close: self.close.unwrap_or_default(),
            volume: self.volume.or(self.volume_24h).unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

impl CmcQuoteSource {
    pub fn new(config: ProviderConfig) -> Result<Self, DataError> {
        let mut headers = header::HeaderMap::new();
        let mut key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|e| DataError::ApiError(format!("invalid API key: {e}")))?;
        key.set_sensitive(true);
        headers.insert("X-CMC_PRO_API_KEY", key);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T, DataError> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(%url, "provider request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::ApiError(format!("{status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl QuoteSource for CmcQuoteSource {
    async fn fetch_latest(&self, symbol: &str) -> Result<Quote, DataError> {
        let mut response: LatestResponse = self
            .get_json(&format!("/cryptocurrency/quotes/latest?symbol={symbol}"))
            .await?;

        let usd = response
            .data
            .remove(symbol)
            .and_then(|entry| entry.quote)
            .and_then(|block| block.usd)
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))?;

        Ok(usd.into_quote(symbol))
    }

    async fn fetch_history(&self, symbol: &str, days: u32) -> Result<Vec<Quote>, DataError> {
        let response: HistoricalResponse = self
            .get_json(&format!(
                "/cryptocurrency/ohlcv/historical?symbol={symbol}&count={days}&interval=daily"
            ))
            .await?;

        let Some(data) = response.data else {
            warn!(symbol, "historical response carried no data");
            return Ok(vec![]);
        };

        // Entries with no USD block are dropped; missing numeric fields
        // inside a block zero-default instead.
        let quotes: Vec<Quote> = data
            .quotes
            .into_iter()
            .filter_map(|entry| entry.quote.and_then(|block| block.usd))
            .map(|usd| usd.into_quote(symbol))
            .collect();

        debug!(symbol, days, quotes = quotes.len(), "fetched history");
        Ok(quotes)
    }

    fn name(&self) -> &str {
        "coinmarketcap"
    }
}
