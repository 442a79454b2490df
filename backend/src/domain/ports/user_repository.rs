//! Port abstraction for user storage adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Storage errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already holds the name or e-mail.
        Conflict => "user name or email already in use",
        /// No user is stored under the identifier.
        NotFound { id: u64 } => "user {id} does not exist",
        /// The backing store could not be accessed.
        Storage { message: String } => "user store failure: {message}",
    }
}

/// Driven port for user storage.
///
/// Implementations must make the uniqueness check and the write of
/// [`UserRepository::insert`] and [`UserRepository::update`] atomic with
/// respect to each other.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in creation order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Store a new user, allocating its identifier.
    ///
    /// Fails with [`UserRepositoryError::Conflict`] when any stored user
    /// shares the name or the e-mail.
    async fn insert(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Replace a user's name and e-mail.
    ///
    /// The user's own current values never count as a conflict.
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Remove a user, returning the removed record if it existed.
    async fn remove(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;
}
