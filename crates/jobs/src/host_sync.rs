use host_monitor_application::use_cases::SyncArpTableUseCase;
use host_monitor_domain::config::monitor::MAX_POLL_INTERVAL_SECS;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Polls the ARP table on a fixed interval and feeds it to the tracker.
///
/// The first poll happens one interval after start; the initial load is the
/// caller's job.
pub struct HostSyncJob {
    sync: Arc<SyncArpTableUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HostSyncJob {
    pub fn new(sync: Arc<SyncArpTableUseCase>) -> Self {
        Self {
            sync,
            interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    /// Clamped to `1..=MAX_POLL_INTERVAL_SECS`.
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval_secs = secs.clamp(1, MAX_POLL_INTERVAL_SECS);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Runs until the cancellation token fires.
    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting host sync job");

        let period = Duration::from_secs(self.interval_secs);
        let first_tick = Instant::now().checked_add(period).unwrap_or_else(Instant::now);
        let mut interval = interval_at(first_tick, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("HostSyncJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.sync.execute().await {
                        error!(error = %e, "Host sync failed");
                    }
                }
            }
        }
    }
}
