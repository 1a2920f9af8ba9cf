use crate::ports::ArpReader;
use crate::tracker::HostTracker;
use host_monitor_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case: Replace the tracked hosts with the current ARP table without
/// announcing them as new
pub struct LoadArpTableUseCase {
    arp_reader: Arc<dyn ArpReader>,
    tracker: Arc<HostTracker>,
}

impl LoadArpTableUseCase {
    pub fn new(arp_reader: Arc<dyn ArpReader>, tracker: Arc<HostTracker>) -> Self {
        Self {
            arp_reader,
            tracker,
        }
    }

    /// Returns the number of hosts tracked after the load.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let arp_table = self.arp_reader.read_arp_table().await?;
        self.tracker.reset_and_load(&arp_table);

        let hosts = self.tracker.len();
        info!(entries = arp_table.len(), hosts, "Host table seeded from ARP table");
        Ok(hosts)
    }
}
