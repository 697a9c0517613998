//! Technical indicators and feature assembly.
//!
//! This crate provides the indicator engine:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, raw momentum)
//! - Volatility (population standard deviation)
//! - Trend strength
//! - Assembly of the eleven-column feature vector
//!
//! All functions are pure, deterministic, and safe to call concurrently on
//! read-only series. Index 0 of a series is the oldest value. An
//! insufficient-history input yields the 0.0 sentinel rather than an error;
//! callers must treat 0.0 as "unavailable", not a true reading.

pub mod features;
pub mod momentum;
pub mod moving_average;
pub mod trend;
pub mod volatility;

pub use momentum::{macd, momentum, rsi};
pub use moving_average::{ema, sma};
pub use trend::trend_strength;
pub use volatility::volatility;
