use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalletError {
    #[error("Invalid pallet identifier: {0}")]
    InvalidFormat(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PalletError>;
