//! In-memory user repository.
//!
//! Backed by a concurrent map; suitable for tests and for embedders
//! whose user base is provisioned up front.

use async_trait::async_trait;
use dashmap::DashMap;
use dirauth_model::DirectoryUser;

use crate::error::{RepositoryError, RepositoryResult};
use crate::repository::UserRepository;

/// A thread-safe, map-backed [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, DirectoryUser>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a user record, keyed by username.
    pub fn insert(&self, user: DirectoryUser) {
        self.users.insert(user.username.clone(), user);
    }

    /// Removes a user record by username.
    pub fn remove(&self, username: &str) -> Option<DirectoryUser> {
        self.users.remove(username).map(|(_, user)| user)
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Checks whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn load_by_username(&self, username: &str) -> RepositoryResult<DirectoryUser> {
        self.users
            .get(username)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepositoryError::not_found(username))
    }

    async fn refresh(&self, user: &DirectoryUser) -> RepositoryResult<DirectoryUser> {
        self.load_by_username(&user.username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirauth_model::roles;

    #[tokio::test]
    async fn load_returns_stored_record() {
        let repo = InMemoryUserRepository::new();
        repo.insert(DirectoryUser::new("jdoe").with_role(roles::ROLE_USER));

        let user = repo.load_by_username("jdoe").await.unwrap();
        assert_eq!(user.username, "jdoe");
        assert!(user.has_role(roles::ROLE_USER));
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let repo = InMemoryUserRepository::new();

        let err = repo.load_by_username("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn refresh_resolves_placeholder() {
        let repo = InMemoryUserRepository::new();
        repo.insert(
            DirectoryUser::new("jdoe")
                .with_dn("uid=jdoe,ou=users,dc=example,dc=com")
                .with_role(roles::ROLE_USER),
        );

        let placeholder = DirectoryUser::new("jdoe");
        let resolved = repo.refresh(&placeholder).await.unwrap();

        assert!(resolved.dn.is_some());
        assert!(resolved.has_role(roles::ROLE_USER));
    }

    #[tokio::test]
    async fn remove_empties_repository() {
        let repo = InMemoryUserRepository::new();
        repo.insert(DirectoryUser::new("jdoe"));
        assert_eq!(repo.len(), 1);

        assert!(repo.remove("jdoe").is_some());
        assert!(repo.is_empty());
    }
}
