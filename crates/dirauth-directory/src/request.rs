//! Bind request value object.

use dirauth_model::Secret;

/// An immutable bind request: the candidate username and the presented
/// secret.
///
/// A fresh request is built per authentication attempt, so a directory
/// manager holds no per-attempt mutable state and can serve concurrent
/// binds without coordination.
#[derive(Debug, Clone)]
pub struct BindRequest {
    username: String,
    secret: Secret,
}

impl BindRequest {
    /// Creates a bind request.
    #[must_use]
    pub fn new(username: impl Into<String>, secret: impl Into<Secret>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// The candidate username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The presented secret.
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }
}
