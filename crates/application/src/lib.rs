//! Host Monitor Application Layer
pub mod ports;
pub mod tracker;
pub mod use_cases;

pub use tracker::{ChangeQueue, HostTracker, Notifications};
