//! Core types and traits for the signal system.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Quote, FeatureVector)
//! - Trading signals and labeled history records
//! - Trait seams for quote sources, stores, notification sinks,
//!   and signal classifiers

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, ModelError, SignalError, SignalResult};
pub use traits::*;
pub use types::*;
