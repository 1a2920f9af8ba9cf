pub mod change_log;
pub mod host_sync;
pub mod runner;

pub use change_log::ChangeLogJob;
pub use host_sync::HostSyncJob;
pub use runner::JobRunner;
