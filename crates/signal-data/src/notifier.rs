//! Tracing-backed notification sink.

use async_trait::async_trait;
use signal_core::{DataError, NotificationSink};
use tracing::info;

/// Notification sink that emits each message as a structured log event.
///
/// Stands in for a real push transport; delivery is fire-and-forget either
/// way.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, message: &str) -> Result<(), DataError> {
        info!(message, "notification dispatched");
        Ok(())
    }
}
