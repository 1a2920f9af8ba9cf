use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use host_monitor_application::ports::{ArpReader, ArpTable, Clock, TrackerObserver, VendorLookup};
use host_monitor_domain::{Address, Change, DomainError, MacAddress};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub fn addr(mac: &str, ip: &str) -> Address {
    Address::parse(mac, ip).unwrap()
}

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc::now()),
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        *self.now.lock().unwrap() += by;
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance(TimeDelta::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    dropped: Mutex<Vec<Change>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropped(&self) -> Vec<Change> {
        self.dropped.lock().unwrap().clone()
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.lock().unwrap().len()
    }
}

impl TrackerObserver for RecordingObserver {
    fn change_dropped(&self, change: &Change) {
        self.dropped.lock().unwrap().push(change.clone());
    }
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
        let table = entries
            .into_iter()
            .map(|(mac, ip)| addr(mac, ip))
            .collect();
        Self {
            table: Arc::new(RwLock::new(table)),
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

    pub async fn set_entries(&self, entries: Vec<(&str, &str)>) {
        *self.table.write().await = entries
            .into_iter()
            .map(|(mac, ip)| addr(mac, ip))
            .collect();
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

pub struct MockVendorLookup {
    vendors: HashMap<[u8; 3], Arc<str>>,
}

impl MockVendorLookup {
    pub fn with_vendors(entries: Vec<([u8; 3], &str)>) -> Self {
        Self {
            vendors: entries
                .into_iter()
                .map(|(oui, name)| (oui, Arc::from(name)))
                .collect(),
        }
    }
}

impl VendorLookup for MockVendorLookup {
    fn lookup(&self, mac: &MacAddress) -> Option<Arc<str>> {
        self.vendors.get(&mac.oui()).cloned()
    }
}
