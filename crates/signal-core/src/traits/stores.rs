//! Store trait definitions.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::error::DataError;
use crate::types::{HistoricalRecord, Holding};

/// Per-user holdings store.
///
/// The monitoring loop only calls [`held_symbols`](HoldingsStore::held_symbols);
/// the CRUD operations back the outward-facing API. Handles are scoped and
/// short-lived per operation; a data race against concurrent updates is
/// acceptable, the next cycle picks up changes.
#[async_trait]
pub trait HoldingsStore: Send + Sync {
    /// Snapshot the distinct set of currently held symbols.
    ///
    /// The ordered set fixes the per-cycle iteration order.
    async fn held_symbols(&self) -> Result<BTreeSet<String>, DataError>;

    /// List the holdings of one user.
    async fn holdings_for_user(&self, user_id: &str) -> Result<Vec<Holding>, DataError>;

    /// Insert or update a holding.
    async fn upsert(&self, holding: Holding) -> Result<(), DataError>;

    /// Remove a holding, if present.
    async fn remove(&self, user_id: &str, symbol: &str) -> Result<(), DataError>;
}

/// Append-only sink for labeled history records.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist a batch of records. Fire-and-forget: the core never reads
    /// them back.
    async fn append(&self, records: &[HistoricalRecord]) -> Result<(), DataError>;
}
