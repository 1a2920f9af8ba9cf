use host_monitor_application::ports::{NoVendorLookup, VendorLookup};
use host_monitor_application::use_cases::{
    GetHostsUseCase, LoadArpTableUseCase, SyncArpTableUseCase,
};
use host_monitor_application::HostTracker;
use host_monitor_domain::Config;
use host_monitor_infrastructure::system::LinuxArpReader;
use host_monitor_infrastructure::vendor::OuiTable;
use std::sync::Arc;
use tracing::warn;

pub struct Services {
    pub tracker: Arc<HostTracker>,
    pub sync_arp: Arc<SyncArpTableUseCase>,
    pub load_arp: Arc<LoadArpTableUseCase>,
    pub get_hosts: Arc<GetHostsUseCase>,
}

impl Services {
    pub async fn new(config: &Config) -> Self {
        let tracker = Arc::new(HostTracker::from_config(&config.tracker));
        let arp_reader = Arc::new(
            LinuxArpReader::with_path(config.monitor.arp_path.clone())
                .with_interface(config.monitor.interface.clone()),
        );
        let vendors = load_vendors(config.monitor.vendor_db_path.as_deref()).await;

        Self {
            sync_arp: Arc::new(SyncArpTableUseCase::new(arp_reader.clone(), tracker.clone())),
            load_arp: Arc::new(LoadArpTableUseCase::new(arp_reader, tracker.clone())),
            get_hosts: Arc::new(GetHostsUseCase::new(tracker.clone(), vendors)),
            tracker,
        }
    }
}

// A broken vendor database only costs manufacturer names.
async fn load_vendors(path: Option<&str>) -> Arc<dyn VendorLookup> {
    let Some(path) = path else {
        return Arc::new(NoVendorLookup);
    };

    match OuiTable::load(path).await {
        Ok(table) => Arc::new(table),
        Err(e) => {
            warn!(error = %e, "Vendor database unavailable, manufacturers will show as unknown");
            Arc::new(NoVendorLookup)
        }
    }
}
