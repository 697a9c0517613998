//! Signal classifiers.
//!
//! Two interchangeable [`Classifier`](signal_core::Classifier)
//! implementations:
//! - [`RuleClassifier`]: fixed three-way RSI thresholds
//! - [`ModelHandle`]: a trained softmax-regression model behind an
//!   atomic-swap handle, with a durable JSON artifact
//!
//! [`RuleClassifier`]: rule::RuleClassifier
//! [`ModelHandle`]: handle::ModelHandle

pub mod handle;
pub mod model;
pub mod rule;
pub mod store;

pub use handle::ModelHandle;
pub use model::{train, TrainConfig, TrainedModel};
pub use rule::RuleClassifier;
pub use store::FileModelStore;
