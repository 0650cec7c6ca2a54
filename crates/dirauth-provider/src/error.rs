//! Authentication error taxonomy.
//!
//! ## Security Note
//!
//! `BadCredentials` carries a fixed message so that, under the default
//! hiding policy, an unknown username is indistinguishable from a wrong
//! password. Collaborator transport failures are propagated as-is; they
//! are operational faults, not authentication outcomes.

use dirauth_directory::DirectoryError;
use dirauth_storage::RepositoryError;
use thiserror::Error;

/// Errors returned by the authentication provider.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    /// The credential was routed to the wrong provider (unrecognized
    /// variant or mismatched provider key). A programming-contract
    /// violation; never hidden.
    #[error("unsupported credential token")]
    UnsupportedToken,

    /// Generic rejection, deliberately indistinguishable across
    /// failure causes.
    #[error("bad credentials")]
    BadCredentials,

    /// No user record exists. Only surfaced when hiding is disabled.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// The directory bind was rejected. Only surfaced when hiding is
    /// disabled.
    #[error("the LDAP authentication failed")]
    AuthenticationFailed,

    /// A pre-bind hook vetoed the attempt. Only surfaced when hiding
    /// is disabled.
    #[error("pre-bind hook rejected authentication: {0}")]
    Vetoed(String),

    /// Invalid provider configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Directory transport or protocol failure, propagated untouched.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Repository backend failure, propagated untouched.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl AuthenticationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Checks if this is the generic rejection.
    #[must_use]
    pub const fn is_bad_credentials(&self) -> bool {
        matches!(self, Self::BadCredentials)
    }

    /// Checks if this is the contract-violation error.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedToken)
    }

    /// Checks if this is a user-not-found error.
    #[must_use]
    pub const fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthenticationError>;
