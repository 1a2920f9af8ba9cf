//! Host Monitor Domain Layer
pub mod address;
pub mod change;
pub mod config;
pub mod errors;
pub mod host;

pub use address::{Address, MacAddress};
pub use change::{Change, ChangeKind};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, MonitorConfig, TrackerConfig};
pub use errors::DomainError;
pub use host::{HostSnapshot, Member};
