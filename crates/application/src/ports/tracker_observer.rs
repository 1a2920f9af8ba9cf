use host_monitor_domain::Change;
use tracing::warn;

/// Receives non-fatal diagnostics from the host tracker.
pub trait TrackerObserver: Send + Sync {
    /// Called when the notification queue was full and `change` was discarded.
    fn change_dropped(&self, change: &Change);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TrackerObserver for TracingObserver {
    fn change_dropped(&self, change: &Change) {
        warn!(change = %change, "Dropping change, notification queue full");
    }
}
