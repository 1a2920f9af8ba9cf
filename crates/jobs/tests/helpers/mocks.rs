use async_trait::async_trait;
use host_monitor_application::ports::{ArpReader, ArpTable};
use host_monitor_domain::{Address, DomainError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub fn addr(mac: &str, ip: &str) -> Address {
    Address::parse(mac, ip).unwrap()
}

pub struct MockArpReader {
    table: Arc<RwLock<ArpTable>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockArpReader {
    pub fn new() -> Self {
        Self::with_entries(vec![])
    }

    pub fn with_entries(entries: Vec<(&str, &str)>) -> Self {
        Self {
            table: Arc::new(RwLock::new(
                entries.into_iter().map(|(mac, ip)| addr(mac, ip)).collect(),
            )),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl ArpReader for MockArpReader {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::IoError("ARP read failed".to_string()));
        }
        Ok(self.table.read().await.clone())
    }
}
