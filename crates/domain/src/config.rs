pub mod errors;
pub mod logging;
pub mod monitor;
pub mod root;
pub mod tracker;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use monitor::MonitorConfig;
pub use root::{CliOverrides, Config};
pub use tracker::TrackerConfig;
