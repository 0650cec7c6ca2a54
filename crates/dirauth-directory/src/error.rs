//! Directory error types.
//!
//! ## Security Note
//!
//! Error messages must not leak secrets or internal directory
//! structure. A clean credential rejection is `Ok(false)` from the bind
//! call, never an error; these variants cover transport and protocol
//! faults only.

use thiserror::Error;

/// Errors that can occur while talking to the directory server.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Connection to the directory failed.
    #[error("directory connection failed: {0}")]
    Connection(String),

    /// The bind operation itself failed (not a credential rejection).
    #[error("directory bind failed: {0}")]
    Bind(String),

    /// Protocol error from the directory server.
    #[error("directory protocol error: {0}")]
    Protocol(String),

    /// The operation timed out.
    #[error("directory operation timed out")]
    Timeout,
}

impl DirectoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a bind error.
    #[must_use]
    pub fn bind(msg: impl Into<String>) -> Self {
        Self::Bind(msg.into())
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Checks if this is a connection-related error.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout)
    }
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
