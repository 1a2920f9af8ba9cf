mod arp_reader;
mod clock;
mod tracker_observer;
mod vendor_lookup;

pub use arp_reader::{ArpReader, ArpTable};
pub use clock::{Clock, SystemClock};
pub use tracker_observer::{TracingObserver, TrackerObserver};
pub use vendor_lookup::{NoVendorLookup, VendorLookup};
