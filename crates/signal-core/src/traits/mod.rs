//! Trait seams between the core and its external collaborators.

mod classifier;
mod notifier;
mod quote_source;
mod stores;

pub use classifier::Classifier;
pub use notifier::NotificationSink;
pub use quote_source::QuoteSource;
pub use stores::{HistoryStore, HoldingsStore};
