//! Quote source trait definition.

use async_trait::async_trait;

use crate::error::DataError;
use crate::types::Quote;

/// A market-data provider returning structured OHLCV values or failing.
///
/// Failure is uniform at this boundary: the caller does not distinguish
/// network, auth, or parse failures. Request timeouts are the source's
/// responsibility.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the latest quote snapshot for a symbol.
    async fn fetch_latest(&self, symbol: &str) -> Result<Quote, DataError>;

    /// Fetch daily historical quotes for a symbol, oldest first.
    async fn fetch_history(&self, symbol: &str, days: u32) -> Result<Vec<Quote>, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
