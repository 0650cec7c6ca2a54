//! Opaque credential secret.
//!
//! ## Security Note
//!
//! The secret bytes must never reach logs, error messages, or serialized
//! output. `Secret` has no `Serialize` impl and its `Debug` output is a
//! fixed redaction marker, so accidental exposure fails to compile or
//! prints nothing useful.

use std::fmt;

/// An opaque secret (typically a password) presented for authentication.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    /// Wraps raw secret bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The empty secret carried by authenticated tokens.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Checks whether the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exposes the secret bytes for a bind operation.
    ///
    /// Callers must not log or persist the returned slice.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Vec<u8>> for Secret {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}
