//! Host Monitor Infrastructure Layer
pub mod system;
pub mod vendor;
