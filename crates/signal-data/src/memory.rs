//! In-memory store implementations.

use async_trait::async_trait;
use signal_core::{DataError, Holding, HoldingsStore};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// In-memory holdings store keyed by (user, symbol).
#[derive(Debug, Default)]
pub struct MemoryHoldings {
    holdings: Mutex<Vec<Holding>>,
}

impl MemoryHoldings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with holdings.
    pub fn with_holdings(holdings: Vec<Holding>) -> Self {
        Self {
            holdings: Mutex::new(holdings),
        }
    }
}

#[async_trait]
impl HoldingsStore for MemoryHoldings {
    async fn held_symbols(&self) -> Result<BTreeSet<String>, DataError> {
        let holdings = self.holdings.lock().unwrap();
        Ok(holdings.iter().map(|h| h.symbol.clone()).collect())
    }

    async fn holdings_for_user(&self, user_id: &str) -> Result<Vec<Holding>, DataError> {
        let holdings = self.holdings.lock().unwrap();
        Ok(holdings
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, holding: Holding) -> Result<(), DataError> {
        let mut holdings = self.holdings.lock().unwrap();
        match holdings
            .iter_mut()
            .find(|h| h.user_id == holding.user_id && h.symbol == holding.symbol)
        {
            Some(existing) => existing.amount = holding.amount,
            None => holdings.push(holding),
        }
        Ok(())
    }

    async fn remove(&self, user_id: &str, symbol: &str) -> Result<(), DataError> {
        let mut holdings = self.holdings.lock().unwrap();
        holdings.retain(|h| !(h.user_id == user_id && h.symbol == symbol));
        Ok(())
    }
}
