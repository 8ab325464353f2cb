use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in bankdash
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    /// Whether the failure came from the local store rather than the caller's input.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::QuotaExceeded { .. } | Self::Io(_))
    }
}

pub type Result<T> = StdResult<T, CoreError>;
