//! Pre-bind hook event and broadcaster contract.
//!
//! The hook is an extension point allowing external policy (account
//! lockout, rate limiting, maintenance windows) to veto an attempt
//! before the directory round-trip. A subscriber vetoes by returning an
//! error from `publish`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dirauth_model::DirectoryUser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the event broadcast before the directory bind.
pub const PRE_BIND: &str = "pre_bind";

/// Event published for a candidate identity before the bind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreBindEvent {
    user: DirectoryUser,
    timestamp: DateTime<Utc>,
}

impl PreBindEvent {
    /// Creates an event for the candidate identity.
    #[must_use]
    pub fn new(user: DirectoryUser) -> Self {
        Self {
            user,
            timestamp: Utc::now(),
        }
    }

    /// The event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        PRE_BIND
    }

    /// The candidate identity about to be bound.
    #[must_use]
    pub const fn user(&self) -> &DirectoryUser {
        &self.user
    }

    /// When the event was created.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A subscriber's rejection of an authentication attempt.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct HookError {
    reason: String,
}

impl HookError {
    /// Creates a veto with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The subscriber's reason for the veto.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type for hook publication.
pub type HookResult<T> = Result<T, HookError>;

/// Publishes pre-bind events to interested subscribers.
///
/// Any `Err` from `publish` is treated as a veto of the whole
/// authentication attempt.
#[async_trait]
pub trait HookBroadcaster: Send + Sync {
    /// Publishes the event. Returning an error vetoes the attempt.
    async fn publish(&self, event: &PreBindEvent) -> HookResult<()>;
}
