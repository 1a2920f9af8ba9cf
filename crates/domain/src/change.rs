use crate::address::Address;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Online,
    IpChange,
    Offline,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Online => "online",
            ChangeKind::IpChange => "ip change",
            ChangeKind::Offline => "offline",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A device state transition emitted by the host tracker.
///
/// Only [`Change::IpChange`] carries a previous address: the member that was
/// active immediately before the new one. It is `None` only when the device
/// had no active member at the time, which the tracker tolerates but should
/// not normally produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    Online {
        address: Address,
        last_seen: DateTime<Utc>,
    },
    IpChange {
        address: Address,
        previous: Option<Address>,
        last_seen: DateTime<Utc>,
    },
    Offline {
        address: Address,
        last_seen: DateTime<Utc>,
    },
}

impl Change {
    pub fn kind(&self) -> ChangeKind {
        match self {
            Change::Online { .. } => ChangeKind::Online,
            Change::IpChange { .. } => ChangeKind::IpChange,
            Change::Offline { .. } => ChangeKind::Offline,
        }
    }

    pub fn address(&self) -> &Address {
        match self {
            Change::Online { address, .. }
            | Change::IpChange { address, .. }
            | Change::Offline { address, .. } => address,
        }
    }

    pub fn previous_address(&self) -> Option<&Address> {
        match self {
            Change::IpChange { previous, .. } => previous.as_ref(),
            _ => None,
        }
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        match self {
            Change::Online { last_seen, .. }
            | Change::IpChange { last_seen, .. }
            | Change::Offline { last_seen, .. } => *last_seen,
        }
    }

    /// Online and IP changes both leave the device reachable.
    pub fn is_online(&self) -> bool {
        !matches!(self, Change::Offline { .. })
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "change=({}) online=({}) addr=({}) previousAddr=(",
            self.kind(),
            self.is_online(),
            self.address()
        )?;
        match self.previous_address() {
            Some(previous) => write!(f, "{}", previous)?,
            None => f.write_str("nil")?,
        }
        write!(
            f,
            ") lastSeen=({})",
            self.last_seen().to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}
