//! User holding.

use serde::{Deserialize, Serialize};

/// A tracked asset position for one user.
///
/// The monitoring core only reads the symbol set; amount semantics belong to
/// the outward-facing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub user_id: String,
    pub symbol: String,
    /// Position size in USD.
    pub amount: f64,
}
