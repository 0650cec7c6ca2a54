//! LDAP bind authentication provider.
//!
//! ## Security
//!
//! - With `hide_not_found_errors` (the default), unknown-user,
//!   wrong-password, hook-veto, and post-bind reload misses all
//!   collapse into the same `BadCredentials` error.
//! - The presented secret is handed to the directory bind and nowhere
//!   else; it is never logged and never echoed into the issued token.
//! - Bind results are not cached: every call re-binds against the
//!   directory. Message normalization does not equalize response
//!   timing across failure paths; integrators whose threat model
//!   includes timing probes must add their own pacing.

use std::sync::Arc;

use dirauth_directory::{BindRequest, DirectoryManager};
use dirauth_model::DirectoryUser;
use dirauth_storage::{RepositoryError, UserRepository};

use crate::config::ProviderConfig;
use crate::error::{AuthResult, AuthenticationError};
use crate::event::{HookBroadcaster, PreBindEvent};
use crate::token::{AuthenticatedToken, CredentialKind, CredentialToken};

/// Authenticates credentials by binding against a directory server.
///
/// Stateless per attempt: the only state is the immutable configuration
/// and handles to the collaborators, so concurrent `authenticate` calls
/// need no coordination.
pub struct LdapAuthenticationProvider {
    repository: Arc<dyn UserRepository>,
    directory: Arc<dyn DirectoryManager>,
    broadcaster: Option<Arc<dyn HookBroadcaster>>,
    config: ProviderConfig,
}

impl LdapAuthenticationProvider {
    /// Creates a provider without a hook broadcaster.
    #[must_use]
    pub fn new(
        repository: Arc<dyn UserRepository>,
        directory: Arc<dyn DirectoryManager>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            repository,
            directory,
            broadcaster: None,
            config,
        }
    }

    /// Attaches a pre-bind hook broadcaster.
    #[must_use]
    pub fn with_broadcaster(mut self, broadcaster: Arc<dyn HookBroadcaster>) -> Self {
        self.broadcaster = Some(broadcaster);
        self
    }

    /// The provider configuration.
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Checks whether this provider handles the given credential.
    ///
    /// Pure: true iff the credential is a recognized variant and its
    /// provider key equals the configured key.
    #[must_use]
    pub fn supports(&self, token: &CredentialToken) -> bool {
        match token.kind() {
            CredentialKind::Password | CredentialKind::PreAuthenticated => {
                token.provider_key() == self.config.provider_key()
            }
        }
    }

    /// Authenticates a credential against the directory.
    ///
    /// Resolves an identity (before or after the bind, per
    /// configuration), broadcasts the pre-bind hook, performs the bind,
    /// and on success issues an [`AuthenticatedToken`] carrying the
    /// identity's roles and the credential's attributes.
    ///
    /// ## Errors
    ///
    /// See [`AuthenticationError`]; which variant surfaces for a given
    /// failure depends on `hide_not_found_errors`.
    pub async fn authenticate(&self, token: &CredentialToken) -> AuthResult<AuthenticatedToken> {
        if !self.supports(token) {
            return Err(AuthenticationError::UnsupportedToken);
        }

        let user = self.resolve_user(token).await?;
        self.broadcast_pre_bind(&user).await?;

        if !self.bind(&user, token).await? {
            tracing::debug!(username = %user.username, "directory bind rejected");
            return Err(self.bind_failure());
        }

        let user = if self.config.bind_username_before() {
            self.reload_user(user).await?
        } else {
            user
        };

        tracing::debug!(username = %user.username, "directory bind succeeded");
        Ok(AuthenticatedToken::new(
            user,
            self.config.provider_key(),
            token.attributes().clone(),
        ))
    }

    /// Resolves the candidate identity, or constructs the placeholder
    /// when the bind-first strategy defers resolution.
    async fn resolve_user(&self, token: &CredentialToken) -> AuthResult<DirectoryUser> {
        if self.config.bind_username_before() {
            return Ok(DirectoryUser::new(token.username()));
        }

        match self.repository.load_by_username(token.username()).await {
            Ok(user) => Ok(user),
            Err(err) if err.is_not_found() => Err(self.not_found_failure(err)),
            Err(err) => Err(AuthenticationError::Repository(err)),
        }
    }

    /// Broadcasts the pre-bind event; any subscriber error vetoes the
    /// attempt before the directory round-trip.
    async fn broadcast_pre_bind(&self, user: &DirectoryUser) -> AuthResult<()> {
        let Some(broadcaster) = &self.broadcaster else {
            return Ok(());
        };

        match broadcaster.publish(&PreBindEvent::new(user.clone())).await {
            Ok(()) => Ok(()),
            Err(veto) => {
                tracing::debug!(
                    username = %user.username,
                    reason = %veto,
                    "pre-bind hook vetoed authentication"
                );
                Err(if self.config.hide_not_found_errors() {
                    AuthenticationError::BadCredentials
                } else {
                    AuthenticationError::Vetoed(veto.reason().to_string())
                })
            }
        }
    }

    /// Performs the directory bind with the variant matching the
    /// configured resolution strategy.
    async fn bind(&self, user: &DirectoryUser, token: &CredentialToken) -> AuthResult<bool> {
        let request = BindRequest::new(&user.username, token.secret().clone());

        let bound = if self.config.bind_username_before() {
            self.directory.bind_direct(&request).await?
        } else {
            self.directory.bind(&request).await?
        };

        Ok(bound)
    }

    /// Reloads the full identity for a placeholder whose username the
    /// bind has just vouched for.
    async fn reload_user(&self, user: DirectoryUser) -> AuthResult<DirectoryUser> {
        match self.repository.refresh(&user).await {
            Ok(user) => Ok(user),
            Err(err) if err.is_not_found() => Err(self.not_found_failure(err)),
            Err(err) => Err(AuthenticationError::Repository(err)),
        }
    }

    fn not_found_failure(&self, err: RepositoryError) -> AuthenticationError {
        if self.config.hide_not_found_errors() {
            AuthenticationError::BadCredentials
        } else {
            match err {
                RepositoryError::NotFound(username) => {
                    AuthenticationError::UserNotFound(username)
                }
                other => AuthenticationError::Repository(other),
            }
        }
    }

    const fn bind_failure(&self) -> AuthenticationError {
        if self.config.hide_not_found_errors() {
            AuthenticationError::BadCredentials
        } else {
            AuthenticationError::AuthenticationFailed
        }
    }
}
