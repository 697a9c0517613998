//! Monitoring scheduler.

use std::sync::Arc;
use std::time::Duration;

use signal_core::{Classifier, DataError, HoldingsStore, NotificationSink, QuoteSource, Signal};
use signal_indicators::features;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Outcome counts for one scan cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleStats {
    /// Symbols that received a classification attempt.
    pub scanned: usize,
    /// Symbols skipped because the quote fetch failed.
    pub skipped: usize,
    /// Actionable signals dispatched to the notification sink.
    pub notified: usize,
}

/// Recurring per-holding market scan.
///
/// Alternates between two states: scanning the current holding snapshot and
/// idling for a fixed delay. A failed fetch skips that symbol only; nothing
/// in a cycle is fatal. The loop runs until the cancellation token fires,
/// which is observed promptly during the idle delay (an in-flight fetch is
/// allowed to complete naturally).
#[derive(Clone)]
pub struct Monitor {
    quotes: Arc<dyn QuoteSource>,
    holdings: Arc<dyn HoldingsStore>,
    classifier: Arc<dyn Classifier>,
    notifier: Arc<dyn NotificationSink>,
    interval: Duration,
}

impl Monitor {
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        holdings: Arc<dyn HoldingsStore>,
        classifier: Arc<dyn Classifier>,
        notifier: Arc<dyn NotificationSink>,
        interval: Duration,
    ) -> Self {
        Self {
            quotes,
            holdings,
            classifier,
            notifier,
            interval,
        }
    }

    /// Run the scan loop until cancelled. The first scan starts immediately.
    pub async fn run(&self, shutdown: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            source = self.quotes.name(),
            classifier = self.classifier.name(),
            "monitor started"
        );

        loop {
            let stats = self.scan().await;
            info!(
                scanned = stats.scanned,
                skipped = stats.skipped,
                notified = stats.notified,
                "scan cycle complete"
            );

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("monitor shutting down");
                    break;
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }

    /// Scan one snapshot of the holding set.
    ///
    /// Symbols are processed sequentially in the snapshot's (sorted)
    /// iteration order; per-symbol failures are logged and skipped.
    pub async fn scan(&self) -> CycleStats {
        let symbols = match self.holdings.held_symbols().await {
            Ok(symbols) => symbols,
            Err(e) => {
                warn!(error = %e, "failed to snapshot holdings, skipping cycle");
                return CycleStats::default();
            }
        };

        let mut stats = CycleStats::default();
        for symbol in symbols {
            match self.check_symbol(&symbol).await {
                Ok(notified) => {
                    stats.scanned += 1;
                    if notified {
                        stats.notified += 1;
                    }
                }
                Err(e) => {
                    warn!(%symbol, error = %e, "quote fetch failed, skipping symbol");
                    stats.skipped += 1;
                }
            }
        }
        stats
    }

    /// Fetch, classify, and notify for one symbol. Returns whether a
    /// notification was dispatched.
    async fn check_symbol(&self, symbol: &str) -> Result<bool, DataError> {
        let quote = self.quotes.fetch_latest(symbol).await?;
        let features = features::intraday(&quote);

        let signal = match self.classifier.classify(&features) {
            Some(signal) => signal,
            None => {
                debug!(symbol, "no prediction available");
                return Ok(false);
            }
        };
        debug!(symbol, %signal, close = quote.close, "classified");

        let message = match signal {
            Signal::Buy => format!("Buy signal: {symbol}"),
            Signal::Sell => format!("Sell signal: {symbol}"),
            Signal::Hold => return Ok(false),
        };

        // Dispatch failures are logged, never escalated.
        if let Err(e) = self.notifier.notify(&message).await {
            warn!(symbol, error = %e, "notification dispatch failed");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use signal_core::{FeatureVector, Holding, Quote};
    use signal_data::MemoryHoldings;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FakeSource {
        failing: Option<String>,
        fetches: AtomicUsize,
    }

    impl FakeSource {
        fn new(failing: Option<&str>) -> Self {
            Self {
                failing: failing.map(str::to_string),
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for FakeSource {
        async fn fetch_latest(&self, symbol: &str) -> Result<Quote, DataError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.failing.as_deref() == Some(symbol) {
                return Err(DataError::ConnectionError("socket closed".into()));
            }
            Ok(Quote::new(symbol, 100.0, 110.0, 95.0, 105.0, 1000.0))
        }

        async fn fetch_history(&self, _symbol: &str, _days: u32) -> Result<Vec<Quote>, DataError> {
            Ok(vec![])
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    struct ConstClassifier(Option<Signal>);

    impl Classifier for ConstClassifier {
        fn classify(&self, _features: &FeatureVector) -> Option<Signal> {
            self.0
        }

        fn name(&self) -> &str {
            "const"
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingNotifier {
        async fn notify(&self, message: &str) -> Result<(), DataError> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    fn holdings(symbols: &[&str]) -> Arc<MemoryHoldings> {
        Arc::new(MemoryHoldings::with_holdings(
            symbols
                .iter()
                .map(|s| Holding {
                    user_id: "alice".to_string(),
                    symbol: s.to_string(),
                    amount: 100.0,
                })
                .collect(),
        ))
    }

    fn monitor(
        source: Arc<FakeSource>,
        holdings: Arc<MemoryHoldings>,
        classifier: Arc<dyn Classifier>,
        notifier: Arc<RecordingNotifier>,
    ) -> Monitor {
        Monitor::new(
            source,
            holdings,
            classifier,
            notifier,
            Duration::from_secs(600),
        )
    }

    #[tokio::test]
    async fn test_one_failing_symbol_does_not_abort_cycle() {
        let source = Arc::new(FakeSource::new(Some("ETH")));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            Arc::clone(&source),
            holdings(&["BTC", "ETH", "SOL"]),
            Arc::new(ConstClassifier(Some(Signal::Buy))),
            Arc::clone(&notifier),
        );

        let stats = monitor.scan().await;

        assert_eq!(stats.scanned, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.notified, 2);
        // All three were attempted, in snapshot order.
        assert_eq!(source.fetches.load(Ordering::SeqCst), 3);
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec!["Buy signal: BTC".to_string(), "Buy signal: SOL".to_string()]
        );
    }

    #[tokio::test]
    async fn test_hold_produces_no_notification() {
        let source = Arc::new(FakeSource::new(None));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            source,
            holdings(&["BTC"]),
            Arc::new(ConstClassifier(Some(Signal::Hold))),
            Arc::clone(&notifier),
        );

        let stats = monitor.scan().await;
        assert_eq!(stats.scanned, 1);
        assert_eq!(stats.notified, 0);
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sell_message_template() {
        let source = Arc::new(FakeSource::new(None));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            source,
            holdings(&["BTC"]),
            Arc::new(ConstClassifier(Some(Signal::Sell))),
            Arc::clone(&notifier),
        );

        monitor.scan().await;
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec!["Sell signal: BTC".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_prediction_is_silent() {
        let source = Arc::new(FakeSource::new(None));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            source,
            holdings(&["BTC"]),
            Arc::new(ConstClassifier(None)),
            Arc::clone(&notifier),
        );

        let stats = monitor.scan().await;
        assert_eq!(stats.scanned, 1);
        assert_eq!(stats.notified, 0);
        assert!(notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scans_immediately_then_on_interval() {
        let source = Arc::new(FakeSource::new(None));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            Arc::clone(&source),
            holdings(&["BTC"]),
            Arc::new(ConstClassifier(Some(Signal::Hold))),
            notifier,
        );

        let shutdown = CancellationToken::new();
        let task = {
            let monitor = monitor.clone();
            let shutdown = shutdown.clone();
            tokio::spawn(async move { monitor.run(shutdown).await })
        };

        // First scan runs without waiting for the interval.
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        // Second scan after the 10-minute delay.
        tokio::time::sleep(Duration::from_secs(601)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);

        shutdown.cancel();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_interrupts_idle_delay() {
        let source = Arc::new(FakeSource::new(None));
        let notifier = Arc::new(RecordingNotifier::default());
        let monitor = monitor(
            Arc::clone(&source),
            holdings(&["BTC"]),
            Arc::new(ConstClassifier(Some(Signal::Hold))),
            notifier,
        );

        let shutdown = CancellationToken::new();
        let started = tokio::time::Instant::now();
        let task = {
            let monitor = monitor.clone();
            let shutdown = shutdown.clone();
            tokio::spawn(async move { monitor.run(shutdown).await })
        };

        // Cancel in the middle of the idle delay; the loop must exit well
        // before the 10-minute sleep elapses.
        tokio::time::sleep(Duration::from_secs(30)).await;
        shutdown.cancel();
        task.await.unwrap();

        assert!(started.elapsed() < Duration::from_secs(600));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }
}
