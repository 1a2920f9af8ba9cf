pub mod hosts;

// Re-export use cases
pub use hosts::{GetHostsUseCase, HostView, LoadArpTableUseCase, SyncArpTableUseCase};
