use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Vendor database error: {0}")]
    VendorDatabase(String),
}
