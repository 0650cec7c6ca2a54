//! Repository error types.

use thiserror::Error;

/// Errors that can occur during user repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No user record exists for the given username.
    #[error("user not found: {0}")]
    NotFound(String),

    /// The storage backend failed.
    #[error("user lookup failed: {0}")]
    Backend(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(username: impl Into<String>) -> Self {
        Self::NotFound(username.into())
    }

    /// Creates a backend error.
    #[must_use]
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Checks if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
