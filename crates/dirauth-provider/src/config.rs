//! Provider configuration.
//!
//! Please note that `hide_not_found_errors` is true by default in order
//! to prevent a possible brute-force attack.

use crate::error::{AuthResult, AuthenticationError};

/// Immutable configuration of an authentication provider instance.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    provider_key: String,
    hide_not_found_errors: bool,
    bind_username_before: bool,
}

impl ProviderConfig {
    /// Creates a configuration builder for the given provider key.
    #[must_use]
    pub fn builder(provider_key: impl Into<String>) -> ProviderConfigBuilder {
        ProviderConfigBuilder::new(provider_key)
    }

    /// The key identifying which credentials this provider handles.
    #[must_use]
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// Whether lookup misses and hook vetoes are normalized to the
    /// generic "bad credentials" error.
    #[must_use]
    pub const fn hide_not_found_errors(&self) -> bool {
        self.hide_not_found_errors
    }

    /// Whether the directory bind happens before identity resolution.
    #[must_use]
    pub const fn bind_username_before(&self) -> bool {
        self.bind_username_before
    }
}

/// Builder for [`ProviderConfig`].
#[derive(Debug)]
pub struct ProviderConfigBuilder {
    provider_key: String,
    hide_not_found_errors: bool,
    bind_username_before: bool,
}

impl ProviderConfigBuilder {
    /// Creates a builder with the default policy switches.
    #[must_use]
    pub fn new(provider_key: impl Into<String>) -> Self {
        Self {
            provider_key: provider_key.into(),
            hide_not_found_errors: true,
            bind_username_before: false,
        }
    }

    /// Sets whether failure causes are hidden behind "bad credentials".
    #[must_use]
    pub const fn hide_not_found_errors(mut self, hide: bool) -> Self {
        self.hide_not_found_errors = hide;
        self
    }

    /// Selects the bind-first strategy: bind as the candidate user
    /// first, resolve the identity from the repository afterwards.
    #[must_use]
    pub const fn bind_username_before(mut self, bind_first: bool) -> Self {
        self.bind_username_before = bind_first;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// ## Errors
    ///
    /// Returns a configuration error if the provider key is empty.
    pub fn build(self) -> AuthResult<ProviderConfig> {
        if self.provider_key.is_empty() {
            return Err(AuthenticationError::config("provider_key cannot be empty"));
        }

        Ok(ProviderConfig {
            provider_key: self.provider_key,
            hide_not_found_errors: self.hide_not_found_errors,
            bind_username_before: self.bind_username_before,
        })
    }
}
