//! Notification sink trait definition.

use async_trait::async_trait;

use crate::error::DataError;

/// Fire-and-forget notification transport.
///
/// No delivery guarantee is required from the core's perspective; dispatch
/// failures are logged by the caller and never abort a cycle.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Send a notification message.
    async fn notify(&self, message: &str) -> Result<(), DataError>;
}
