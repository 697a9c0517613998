//! Domain types.

mod feature;
mod holding;
mod quote;
mod record;
mod signal;

pub use feature::{FeatureVector, FEATURE_DIM};
pub use holding::Holding;
pub use quote::Quote;
pub use record::HistoricalRecord;
pub use signal::Signal;
