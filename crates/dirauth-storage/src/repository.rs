//! User repository trait.

use async_trait::async_trait;
use dirauth_model::DirectoryUser;

use crate::error::RepositoryResult;

/// Provider for local user records.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Loads a user record by username.
    ///
    /// ## Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record exists for the
    /// username.
    async fn load_by_username(&self, username: &str) -> RepositoryResult<DirectoryUser>;

    /// Reloads a full user record for an identity that is already
    /// trusted (typically a placeholder after a successful bind).
    ///
    /// ## Errors
    ///
    /// Returns `RepositoryError::NotFound` if the backend no longer has
    /// a record for the identity's username.
    async fn refresh(&self, user: &DirectoryUser) -> RepositoryResult<DirectoryUser>;
}
