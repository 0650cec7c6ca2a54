//! # dirauth-directory
//!
//! Directory manager contract for the dirauth LDAP authentication
//! provider.
//!
//! The authentication core treats the directory server as a boolean
//! oracle: given a username and secret, a bind either strictly succeeds
//! (`Ok(true)`), is cleanly rejected (`Ok(false)`), or fails for
//! transport/protocol reasons (`Err`). Connection management, pooling,
//! TLS, and the search-then-bind mechanics all live behind this
//! boundary, in the implementation.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod manager;
pub mod request;

pub use error::{DirectoryError, DirectoryResult};
pub use manager::DirectoryManager;
pub use request::BindRequest;
