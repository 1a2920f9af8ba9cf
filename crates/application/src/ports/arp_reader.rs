use async_trait::async_trait;
use host_monitor_domain::{Address, DomainError};

/// Complete ARP entries in the order the source lists them.
pub type ArpTable = Vec<Address>;

#[async_trait]
pub trait ArpReader: Send + Sync {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError>;
}
