//! Quote provider client and store implementations.
//!
//! - [`CmcQuoteSource`]: CoinMarketCap-style HTTP quote provider
//! - [`FileHistoryStore`]: durable JSON-lines history sink
//! - [`MemoryHoldings`]: in-memory holdings store
//! - [`LogNotifier`]: tracing-backed notification sink

mod history;
mod memory;
mod notifier;
mod provider;

pub use history::FileHistoryStore;
pub use memory::MemoryHoldings;
pub use notifier::LogNotifier;
pub use provider::{CmcQuoteSource, ProviderConfig};
