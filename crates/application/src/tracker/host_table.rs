use chrono::{DateTime, TimeDelta, Utc};
use host_monitor_domain::{Address, Change, HostSnapshot, MacAddress, Member};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Device state keyed by hardware address.
///
/// Each device keeps its members in first-observed order. Two invariants hold
/// after every call: member IPs are unique within a device, and at most one
/// member is active.
#[derive(Debug, Default)]
pub(crate) struct HostTable {
    hosts: FxHashMap<MacAddress, Vec<Member>>,
}

impl HostTable {
    pub(crate) fn len(&self) -> usize {
        self.hosts.len()
    }

    pub(crate) fn clear(&mut self) {
        self.hosts.clear();
    }

    /// Applies one observation and returns the transition it caused, if any.
    ///
    /// `None` means the observation was dropped (zero MAC) or only refreshed
    /// the already-active member.
    pub(crate) fn observe(&mut self, address: Address, now: DateTime<Utc>) -> Option<Change> {
        if address.mac.is_zero() {
            return None;
        }

        let members = match self.hosts.entry(address.mac) {
            Entry::Vacant(slot) => {
                slot.insert(vec![Member::new(address, now)]);
                return Some(Change::Online {
                    address,
                    last_seen: now,
                });
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        let mut found = false;
        let mut previous = None;
        for member in members.iter_mut() {
            if member.address.ip == address.ip {
                member.last_seen = now;
                member.active = true;
                found = true;
            } else {
                if member.active {
                    previous = Some(member.address);
                }
                member.active = false;
            }
        }

        if found && previous.is_none() {
            return None;
        }

        if !found {
            members.push(Member::new(address, now));
        }

        // Switching back to a known but inactive address is still a move.
        Some(Change::IpChange {
            address,
            previous,
            last_seen: now,
        })
    }

    /// Evicts members unseen for longer than `timeout`, dropping devices left
    /// without members. Returns one offline change per evicted member.
    pub(crate) fn reap(&mut self, now: DateTime<Utc>, timeout: TimeDelta) -> Vec<Change> {
        let mut offline = Vec::new();

        self.hosts.retain(|_, members| {
            members.retain(|member| {
                if now - member.last_seen <= timeout {
                    return true;
                }
                offline.push(Change::Offline {
                    address: member.address,
                    last_seen: member.last_seen,
                });
                false
            });
            !members.is_empty()
        });

        offline
    }

    /// Copies every device, ordered by hardware address.
    pub(crate) fn snapshot(&self) -> Vec<HostSnapshot> {
        let mut hosts: Vec<HostSnapshot> = self
            .hosts
            .iter()
            .map(|(mac, members)| HostSnapshot {
                mac: *mac,
                members: members.clone(),
            })
            .collect();
        hosts.sort_by_key(|h| h.mac);
        hosts
    }
}
