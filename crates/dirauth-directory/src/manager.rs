//! Directory manager trait.

use async_trait::async_trait;

use crate::error::DirectoryResult;
use crate::request::BindRequest;

/// Performs directory binds on behalf of the authentication core.
///
/// Both methods return `Ok(true)` only for a strictly successful bind.
/// A clean credential rejection is `Ok(false)`; transport and protocol
/// faults are errors.
#[async_trait]
pub trait DirectoryManager: Send + Sync {
    /// Standard bind: the implementation locates the candidate's
    /// distinguished name (typically via an anonymous search) and then
    /// binds with the presented secret.
    async fn bind(&self, request: &BindRequest) -> DirectoryResult<bool>;

    /// Binds directly as the candidate user, without any anonymous
    /// search step. Used when no search is trusted or available to
    /// resolve the distinguished name beforehand.
    async fn bind_direct(&self, request: &BindRequest) -> DirectoryResult<bool>;
}
