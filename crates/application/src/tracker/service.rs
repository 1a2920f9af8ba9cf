use super::host_table::HostTable;
use super::queue::{ChangeQueue, Notifications};
use crate::ports::{Clock, SystemClock, TracingObserver, TrackerObserver};
use chrono::TimeDelta;
use host_monitor_domain::config::tracker::{DEFAULT_OFFLINE_TIMEOUT_SECS, DEFAULT_QUEUE_CAPACITY};
use host_monitor_domain::{Address, Change, HostSnapshot, TrackerConfig};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

/// In-memory presence tracker for hosts identified by hardware address.
///
/// Every read and write of the host table goes through one mutex, held for
/// the whole of [`ingest`](Self::ingest), [`reset_and_load`](Self::reset_and_load)
/// and [`snapshot`](Self::snapshot). Changes are pushed onto a bounded queue
/// with `try_send`, so a consumer that stops draining never blocks a
/// producer; overflow is reported to the [`TrackerObserver`] once the lock has
/// been released.
///
/// The tracker owns no task or thread. Callers drive it by calling `ingest`
/// and consume [`notifications`](Self::notifications) on their own schedule.
pub struct HostTracker {
    hosts: Mutex<HostTable>,
    queue: ChangeQueue,
    offline_timeout: TimeDelta,
    observer: Arc<dyn TrackerObserver>,
    clock: Arc<dyn Clock>,
}

impl HostTracker {
    pub fn new() -> Self {
        Self {
            hosts: Mutex::new(HostTable::default()),
            queue: ChangeQueue::new(DEFAULT_QUEUE_CAPACITY),
            offline_timeout: TimeDelta::seconds(DEFAULT_OFFLINE_TIMEOUT_SECS as i64),
            observer: Arc::new(TracingObserver),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new()
            .with_offline_timeout(config.offline_timeout())
            .with_queue_capacity(config.queue_capacity)
    }

    /// Time that must elapse without an observation before an address is
    /// reported offline and forgotten.
    pub fn with_offline_timeout(mut self, timeout: Duration) -> Self {
        self.offline_timeout = TimeDelta::from_std(timeout).unwrap_or(TimeDelta::MAX);
        self
    }

    /// Replaces the notification queue, so call before handing out
    /// [`Notifications`]; handles taken earlier would never see a change.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        debug_assert!(
            !self.queue.has_subscribers(),
            "queue capacity changed after notifications were handed out"
        );
        self.queue = ChangeQueue::new(capacity);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn TrackerObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Applies a batch of observations in order, then ages out stale members.
    ///
    /// Returns `true` when any observation changed a host or the sweep evicted
    /// something. Observations with a zero hardware address are skipped.
    pub fn ingest(&self, observations: &[Address]) -> bool {
        let mut dropped = Vec::new();
        let changed = {
            let mut hosts = self.lock_hosts();
            let now = self.clock.now();
            let mut changed = false;

            for address in observations {
                if let Some(change) = hosts.observe(*address, now) {
                    changed = true;
                    self.publish(change, &mut dropped);
                }
            }

            let offline = hosts.reap(now, self.offline_timeout);
            if !offline.is_empty() {
                debug!(evicted = offline.len(), hosts = hosts.len(), "Aged out stale hosts");
                changed = true;
            }
            for change in offline {
                self.publish(change, &mut dropped);
            }

            changed
        };

        self.report_dropped(&dropped);
        changed
    }

    /// Clears every host, then loads `observations` without emitting changes.
    ///
    /// Meant for seeding from a full external snapshot where the hosts were
    /// already present before the tracker started watching.
    pub fn reset_and_load(&self, observations: &[Address]) {
        let mut hosts = self.lock_hosts();
        let now = self.clock.now();

        hosts.clear();
        for address in observations {
            hosts.observe(*address, now);
        }

        debug!(hosts = hosts.len(), "Host table reloaded");
    }

    /// Forgets every tracked host without emitting changes.
    pub fn reset(&self) {
        self.lock_hosts().clear();
    }

    /// Ordered view of emitted changes. Handles may be cloned freely; each
    /// change is delivered to exactly one receiver.
    pub fn notifications(&self) -> Notifications {
        self.queue.subscribe()
    }

    /// Copy of every tracked host, ordered by hardware address.
    pub fn snapshot(&self) -> Vec<HostSnapshot> {
        self.lock_hosts().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock_hosts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn offline_timeout(&self) -> Duration {
        self.offline_timeout.to_std().unwrap_or(Duration::MAX)
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue.capacity()
    }

    fn publish(&self, change: Change, dropped: &mut Vec<Change>) {
        if let Err(change) = self.queue.push(change) {
            dropped.push(change);
        }
    }

    fn report_dropped(&self, dropped: &[Change]) {
        for change in dropped {
            self.observer.change_dropped(change);
        }
    }

    fn lock_hosts(&self) -> MutexGuard<'_, HostTable> {
        self.hosts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for HostTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HostTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostTracker")
            .field("hosts", &self.len())
            .field("pending", &self.queue.pending())
            .field("queue_capacity", &self.queue.capacity())
            .field("offline_timeout", &self.offline_timeout)
            .finish()
    }
}
