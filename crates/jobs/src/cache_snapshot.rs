use dnsrelay_application::ports::CacheSnapshotPort;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_SNAPSHOT_INTERVAL_SECS: u64 = 300;

/// Periodically writes the record cache to its snapshot file.
pub struct CacheSnapshotJob {
    snapshot: Arc<dyn CacheSnapshotPort>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheSnapshotJob {
    pub fn new(snapshot: Arc<dyn CacheSnapshotPort>) -> Self {
        Self {
            snapshot,
            interval: Duration::from_secs(DEFAULT_SNAPSHOT_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// The first save happens one interval after start.
    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Starting cache snapshot job"
        );

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheSnapshotJob: shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    match self.snapshot.save_snapshot().await {
                        Ok(outcome) => {
                            info!(
                                domains = outcome.domains,
                                entries = outcome.entries,
                                bytes = outcome.bytes_written,
                                "Cache snapshot saved"
                            );
                        }
                        Err(e) => {
                            error!(error = %e, "Cache snapshot failed");
                        }
                    }
                }
            }
        }
    }
}
