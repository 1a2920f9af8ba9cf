use async_trait::async_trait;
use host_monitor_application::ports::{ArpReader, ArpTable};
use host_monitor_domain::{Address, DomainError, MacAddress};
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

const DEFAULT_ARP_PATH: &str = "/proc/net/arp";

/// ATF_COM: the kernel has resolved the hardware address.
const ATF_COMPLETE: u32 = 0x2;

/// Linux ARP cache reader (reads /proc/net/arp)
pub struct LinuxArpReader {
    arp_path: String,
    interface: Option<String>,
}

impl LinuxArpReader {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_ARP_PATH.to_string())
    }

    pub fn with_path(path: String) -> Self {
        Self {
            arp_path: path,
            interface: None,
        }
    }

    /// Restricts the table to entries learned on `interface`.
    pub fn with_interface(mut self, interface: Option<String>) -> Self {
        self.interface = interface;
        self
    }
}

impl Default for LinuxArpReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArpReader for LinuxArpReader {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError> {
        let content = fs::read_to_string(&self.arp_path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read ARP cache {}: {}", self.arp_path, e))
        })?;

        let arp_table = parse_arp_table(&content, self.interface.as_deref());
        debug!(entries = arp_table.len(), path = %self.arp_path, "ARP table parsed");
        Ok(arp_table)
    }
}

// Format of /proc/net/arp:
// IP address       HW type     Flags       HW address            Mask     Device
// 192.168.1.1      0x1         0x2         aa:bb:cc:dd:ee:ff     *        eth0
fn parse_arp_table(content: &str, interface: Option<&str>) -> ArpTable {
    let mut arp_table = ArpTable::new();

    for line in content.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            continue;
        }

        let ip_str = fields[0];
        let flags = fields[2];
        let mac_str = fields[3];

        if let Some(wanted) = interface {
            if fields.get(5) != Some(&wanted) {
                continue;
            }
        }

        if !is_complete(flags) {
            continue;
        }

        let mac = match mac_str.parse::<MacAddress>() {
            Ok(mac) if !mac.is_zero() => mac,
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, mac = mac_str, "Invalid MAC in ARP table");
                continue;
            }
        };

        match ip_str.parse::<IpAddr>() {
            Ok(ip) => arp_table.push(Address::new(mac, ip)),
            Err(e) => {
                warn!(error = %e, ip = ip_str, "Invalid IP in ARP table");
            }
        }
    }

    arp_table
}

fn is_complete(flags: &str) -> bool {
    let digits = flags.trim_start_matches("0x");
    u32::from_str_radix(digits, 16)
        .map(|f| f & ATF_COMPLETE != 0)
        .unwrap_or(false)
}
