use host_monitor_domain::MacAddress;
use std::sync::Arc;

/// Maps the OUI of a hardware address to a manufacturer name.
pub trait VendorLookup: Send + Sync {
    fn lookup(&self, mac: &MacAddress) -> Option<Arc<str>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoVendorLookup;

impl VendorLookup for NoVendorLookup {
    fn lookup(&self, _mac: &MacAddress) -> Option<Arc<str>> {
        None
    }
}
