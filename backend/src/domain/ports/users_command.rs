//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserInput};

/// Domain use-case port for creating, replacing and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate and store a new user.
    async fn create_user(&self, input: UserInput) -> Result<User, Error>;

    /// Replace an existing user's name and e-mail.
    async fn update_user(&self, id: UserId, input: UserInput) -> Result<User, Error>;

    /// Delete a user, returning the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
