use serde::{Deserialize, Serialize};

/// Longest accepted gap between ARP polls (one day).
pub const MAX_POLL_INTERVAL_SECS: u64 = 86_400;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Only ARP entries on this interface are ingested; all interfaces when unset
    #[serde(default)]
    pub interface: Option<String>,

    #[serde(default = "default_arp_path")]
    pub arp_path: String,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// nmap-mac-prefixes style file used to name vendors in the host table
    #[serde(default)]
    pub vendor_db_path: Option<String>,

    #[serde(default = "default_true")]
    pub print_table: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interface: None,
            arp_path: default_arp_path(),
            poll_interval_secs: default_poll_interval_secs(),
            vendor_db_path: None,
            print_table: true,
        }
    }
}

fn default_arp_path() -> String {
    "/proc/net/arp".to_string()
}

fn default_poll_interval_secs() -> u64 {
    15
}

fn default_true() -> bool {
    true
}
