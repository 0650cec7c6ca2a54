//! # dirauth-storage
//!
//! User repository contract for the dirauth LDAP authentication
//! provider, plus an in-memory implementation for tests and embedders.
//!
//! The authentication core only needs two operations from its storage
//! backend: look a user up by username before a bind, and refresh a
//! placeholder identity after one. Lookup misses are a distinct error
//! variant because the core's error-hiding policy treats them
//! differently from backend failures.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod repository;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryUserRepository;
pub use repository::UserRepository;
