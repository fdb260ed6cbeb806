/// Core error types for UserHub
use thiserror::Error;

/// Result type alias using `UserHubError`
pub type Result<T> = std::result::Result<T, UserHubError>;

/// Core error type for UserHub
#[derive(Error, Debug)]
pub enum UserHubError {
    /// The backing store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl UserHubError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
