use crate::ports::VendorLookup;
use crate::tracker::HostTracker;
use host_monitor_domain::{Address, HostSnapshot, MacAddress, Member};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

const UNKNOWN_VENDOR: &str = "unknown";
const RANDOMIZED_VENDOR: &str = "Private Device (Randomized MAC)";

/// A tracked host with its manufacturer resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct HostView {
    pub mac: MacAddress,
    pub address: Option<Address>,
    pub vendor: Arc<str>,
    pub members: Vec<Member>,
}

pub struct GetHostsUseCase {
    tracker: Arc<HostTracker>,
    vendors: Arc<dyn VendorLookup>,
}

impl GetHostsUseCase {
    pub fn new(tracker: Arc<HostTracker>, vendors: Arc<dyn VendorLookup>) -> Self {
        Self { tracker, vendors }
    }

    pub fn execute(&self) -> Vec<HostView> {
        self.tracker
            .snapshot()
            .into_iter()
            .map(|host| self.to_view(host))
            .collect()
    }

    /// Writes the current host table to the log, one line per host.
    pub fn log_table(&self) {
        let hosts = self.execute();
        info!(hosts = hosts.len(), "Current host table");

        for host in hosts {
            let members = host
                .members
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            info!(
                mac = %host.mac,
                manufacturer = %host.vendor,
                members = %members,
                "Host"
            );
        }
    }

    fn to_view(&self, host: HostSnapshot) -> HostView {
        let vendor = self.vendor_name(&host.mac);
        HostView {
            mac: host.mac,
            address: host.address().copied(),
            vendor,
            members: host.members,
        }
    }

    fn vendor_name(&self, mac: &MacAddress) -> Arc<str> {
        if mac.is_locally_administered() {
            return Arc::from(RANDOMIZED_VENDOR);
        }
        self.vendors
            .lookup(mac)
            .unwrap_or_else(|| Arc::from(UNKNOWN_VENDOR))
    }
}
