use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_OFFLINE_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_QUEUE_CAPACITY: usize = 128;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Seconds without an observation before an address is reported offline
    #[serde(default = "default_offline_timeout_secs")]
    pub offline_timeout_secs: u64,

    /// Notifications buffered for consumers before new ones are dropped
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl TrackerConfig {
    pub fn offline_timeout(&self) -> Duration {
        Duration::from_secs(self.offline_timeout_secs)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            offline_timeout_secs: default_offline_timeout_secs(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_offline_timeout_secs() -> u64 {
    DEFAULT_OFFLINE_TIMEOUT_SECS
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}
