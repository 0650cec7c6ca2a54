//! # dirauth-provider
//!
//! LDAP bind authentication provider.
//!
//! Validates a username/password credential against a directory server
//! and produces an authenticated token carrying the user's roles. The
//! provider orchestrates three pluggable collaborators: a
//! [`UserRepository`](dirauth_storage::UserRepository) for local
//! identity records, a
//! [`DirectoryManager`](dirauth_directory::DirectoryManager) for the
//! bind itself, and an optional [`HookBroadcaster`] whose subscribers
//! may veto an attempt before the directory round-trip.
//!
//! ## Security
//!
//! By default all failure causes (unknown user, wrong password, hook
//! veto) collapse into one indistinguishable "bad credentials" error to
//! resist user enumeration. Secrets are never echoed back in the
//! authenticated token and never reach logs.
//!
//! ## Example
//!
//! ```ignore
//! use dirauth_provider::{CredentialToken, LdapAuthenticationProvider, ProviderConfig};
//!
//! let config = ProviderConfig::builder("main").build()?;
//! let provider = LdapAuthenticationProvider::new(repository, directory, config);
//!
//! let token = CredentialToken::password("alice", "correct", "main");
//! let authenticated = provider.authenticate(&token).await?;
//! assert!(authenticated.is_authenticated());
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod event;
pub mod provider;
pub mod token;

pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use error::{AuthResult, AuthenticationError};
pub use event::{HookBroadcaster, HookError, HookResult, PreBindEvent, PRE_BIND};
pub use provider::LdapAuthenticationProvider;
pub use token::{AuthenticatedToken, CredentialKind, CredentialToken};
