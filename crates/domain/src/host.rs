use crate::address::{Address, MacAddress};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// One network address a device has been observed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub address: Address,
    pub active: bool,
    pub last_seen: DateTime<Utc>,
}

impl Member {
    pub fn new(address: Address, last_seen: DateTime<Utc>) -> Self {
        Self {
            address,
            active: true,
            last_seen,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} active=({}) lastSeen=({})",
            self.address,
            self.active,
            self.last_seen.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

/// Point-in-time copy of one tracked device.
///
/// `members` keeps the order in which addresses were first observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostSnapshot {
    pub mac: MacAddress,
    pub members: Vec<Member>,
}

impl HostSnapshot {
    pub fn active_member(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.active)
    }

    /// The address the device is believed to use right now, falling back to
    /// the most recently seen member when none is active.
    pub fn address(&self) -> Option<&Address> {
        self.active_member()
            .or_else(|| self.members.iter().max_by_key(|m| m.last_seen))
            .map(|m| &m.address)
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        self.members.iter().map(|m| m.last_seen).max()
    }
}
