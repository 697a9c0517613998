//! Labeled history record.

use serde::{Deserialize, Serialize};

use super::{FeatureVector, Signal};

/// One training/backfill row: a feature vector plus its assigned label.
///
/// Emitted by the History Builder, persisted by the external history store,
/// never read back by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub symbol: String,
    pub features: FeatureVector,
    pub label: Signal,
}
