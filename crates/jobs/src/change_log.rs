use host_monitor_application::Notifications;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Consumes tracker notifications and writes each change to the log.
pub struct ChangeLogJob {
    notifications: Notifications,
    shutdown: CancellationToken,
}

impl ChangeLogJob {
    pub fn new(notifications: Notifications) -> Self {
        Self {
            notifications,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs until cancelled or until the tracker is dropped and the queue is
    /// drained. Returns the number of changes logged.
    pub async fn start(self: Arc<Self>) -> u64 {
        info!("Starting change log job");
        let mut logged = 0u64;

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(logged, "ChangeLogJob: shutting down");
                    break;
                }
                change = self.notifications.recv() => {
                    let Some(change) = change else {
                        info!(logged, "ChangeLogJob: tracker gone, stopping");
                        break;
                    };
                    logged += 1;
                    info!(
                        kind = %change.kind(),
                        mac = %change.address().mac,
                        ip = %change.address().ip,
                        "{}",
                        change
                    );
                }
            }
        }

        logged
    }
}
