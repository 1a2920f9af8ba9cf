pub mod get_hosts;
pub mod load_arp_table;
pub mod sync_arp_table;

pub use get_hosts::{GetHostsUseCase, HostView};
pub use load_arp_table::LoadArpTableUseCase;
pub use sync_arp_table::SyncArpTableUseCase;
