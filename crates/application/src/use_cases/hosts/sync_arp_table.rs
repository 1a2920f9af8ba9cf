use crate::ports::ArpReader;
use crate::tracker::HostTracker;
use host_monitor_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: Feed the current ARP table into the host tracker
/// Should be run periodically (e.g., every 15 seconds)
pub struct SyncArpTableUseCase {
    arp_reader: Arc<dyn ArpReader>,
    tracker: Arc<HostTracker>,
}

impl SyncArpTableUseCase {
    pub fn new(arp_reader: Arc<dyn ArpReader>, tracker: Arc<HostTracker>) -> Self {
        Self {
            arp_reader,
            tracker,
        }
    }

    /// Returns whether the tracker changed. A failed read leaves the tracker
    /// untouched, including its aging sweep.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<bool, DomainError> {
        let arp_table = self.arp_reader.read_arp_table().await?;
        let changed = self.tracker.ingest(&arp_table);

        debug!(
            entries = arp_table.len(),
            hosts = self.tracker.len(),
            changed,
            "ARP table synchronized"
        );
        Ok(changed)
    }
}
