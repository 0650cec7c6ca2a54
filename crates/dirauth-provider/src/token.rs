//! Credential and authenticated token types.
//!
//! A [`CredentialToken`] is the unauthenticated capability request a
//! caller presents; an [`AuthenticatedToken`] exists only as the result
//! of a successful directory bind. The credential's secret is never
//! copied into the authenticated token.

use std::collections::HashMap;

use dirauth_model::{DirectoryUser, Secret};
use serde_json::Value;

/// The recognized credential variants.
///
/// This is a closed set: a provider accepts exactly these kinds, and
/// `supports` matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// A plain username/password credential.
    Password,
    /// A credential re-presented from an earlier authentication flow.
    PreAuthenticated,
}

/// An unauthenticated credential presented for authentication.
///
/// Immutable once presented; the provider reads it but never mutates it.
#[derive(Debug, Clone)]
pub struct CredentialToken {
    kind: CredentialKind,
    username: String,
    secret: Secret,
    provider_key: String,
    attributes: HashMap<String, Value>,
}

impl CredentialToken {
    fn new(
        kind: CredentialKind,
        username: impl Into<String>,
        secret: impl Into<Secret>,
        provider_key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            username: username.into(),
            secret: secret.into(),
            provider_key: provider_key.into(),
            attributes: HashMap::new(),
        }
    }

    /// Creates a username/password credential.
    #[must_use]
    pub fn password(
        username: impl Into<String>,
        secret: impl Into<Secret>,
        provider_key: impl Into<String>,
    ) -> Self {
        Self::new(CredentialKind::Password, username, secret, provider_key)
    }

    /// Creates a pre-authenticated credential.
    #[must_use]
    pub fn pre_authenticated(
        username: impl Into<String>,
        secret: impl Into<Secret>,
        provider_key: impl Into<String>,
    ) -> Self {
        Self::new(
            CredentialKind::PreAuthenticated,
            username,
            secret,
            provider_key,
        )
    }

    /// Attaches a metadata attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// The credential variant.
    #[must_use]
    pub const fn kind(&self) -> CredentialKind {
        self.kind
    }

    /// The presented username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The presented secret.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The key of the provider this credential is addressed to.
    #[must_use]
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// The caller-supplied metadata attributes.
    #[must_use]
    pub const fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }
}

/// A token proving a successful directory bind.
///
/// Only the provider constructs these, and only after the bind strictly
/// succeeded. The secret slot is always empty.
#[derive(Debug, Clone)]
pub struct AuthenticatedToken {
    user: DirectoryUser,
    secret: Secret,
    provider_key: String,
    roles: Vec<String>,
    authenticated: bool,
    attributes: HashMap<String, Value>,
}

impl AuthenticatedToken {
    /// Builds an authenticated token around the final identity.
    ///
    /// Roles are captured from the identity; attributes are copied
    /// verbatim from the presented credential; the secret is empty.
    #[must_use]
    pub fn new(
        user: DirectoryUser,
        provider_key: impl Into<String>,
        attributes: HashMap<String, Value>,
    ) -> Self {
        let roles = user.roles.clone();
        Self {
            user,
            secret: Secret::empty(),
            provider_key: provider_key.into(),
            roles,
            authenticated: true,
            attributes,
        }
    }

    /// The authenticated identity.
    #[must_use]
    pub const fn user(&self) -> &DirectoryUser {
        &self.user
    }

    /// Consumes the token, yielding the identity.
    #[must_use]
    pub fn into_user(self) -> DirectoryUser {
        self.user
    }

    /// The (always empty) secret slot.
    #[must_use]
    pub const fn secret(&self) -> &Secret {
        &self.secret
    }

    /// The key of the provider that issued this token.
    #[must_use]
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// The roles granted to the identity.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Whether this token is authenticated. Always true.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The attributes copied from the presented credential.
    #[must_use]
    pub const fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }
}
