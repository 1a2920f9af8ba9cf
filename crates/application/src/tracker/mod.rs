mod host_table;
mod queue;
mod service;

pub use queue::{ChangeQueue, Notifications};
pub use service::HostTracker;
