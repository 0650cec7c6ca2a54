//! Directory user identity.
//!
//! A [`DirectoryUser`] is either a fully resolved record returned by a
//! user repository (roles, distinguished name, profile attributes) or a
//! minimal placeholder holding only a username, constructed when
//! identity resolution is deferred until after a successful bind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user identity backed by a directory server.
///
/// `DirectoryUser::new` builds the minimal placeholder; the `with_*`
/// builder methods fill in the fields a repository resolves from its
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Unique identifier.
    pub id: Uuid,
    /// Username the directory knows this user by.
    pub username: String,
    /// Distinguished name, once resolved.
    pub dn: Option<String>,
    /// Email address, once resolved.
    pub email: Option<String>,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Whether the account is enabled.
    pub enabled: bool,
    /// Granted role names.
    pub roles: Vec<String>,
    /// Backend-specific attributes (multi-valued).
    pub attributes: HashMap<String, Vec<String>>,
}

impl DirectoryUser {
    /// Creates a minimal identity holding only the username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            dn: None,
            email: None,
            display_name: None,
            enabled: true,
            roles: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Sets the distinguished name.
    #[must_use]
    pub fn with_dn(mut self, dn: impl Into<String>) -> Self {
        self.dn = Some(dn.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets whether the account is enabled.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Grants a role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Replaces the granted roles.
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Sets a backend attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.attributes.insert(name.into(), values);
        self
    }

    /// Checks whether the user has a specific role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Gets an attribute's values.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&Vec<String>> {
        self.attributes.get(name)
    }

    /// Gets the first value of an attribute.
    #[must_use]
    pub fn get_first_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }
}

/// Common role name constants.
pub mod roles {
    /// Baseline role granted to every authenticated user.
    pub const ROLE_USER: &str = "ROLE_USER";
    /// Administrative role.
    pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
}
