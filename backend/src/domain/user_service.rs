//! User domain service.
//!
//! Implements the user driving ports on top of a [`UserRepository`]. Checks
//! run in a fixed order: existence, then presence and shape, then uniqueness.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, ShapePolicy, User, UserDraft, UserId, UserInput};

/// Message returned when a user id does not resolve.
pub const USER_NOT_FOUND: &str = "User not found.";
/// Message returned when a name or e-mail is already taken.
pub const USER_CONFLICT: &str = "A user with this name or email already exists.";

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
    shapes: ShapePolicy,
}

impl<R> UserService<R> {
    /// Create a service with advisory shape checks.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            shapes: ShapePolicy::Advisory,
        }
    }

    /// Override how name and e-mail shapes are enforced.
    #[must_use]
    pub fn with_shape_policy(mut self, shapes: ShapePolicy) -> Self {
        self.shapes = shapes;
        self
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_repository_error(err: UserRepositoryError) -> Error {
        match err {
            UserRepositoryError::Conflict => Error::conflict(USER_CONFLICT),
            UserRepositoryError::NotFound { .. } => Error::not_found(USER_NOT_FOUND),
            UserRepositoryError::Storage { message } => {
                error!(%message, "user store failure");
                Error::internal(format!("user store failure: {message}"))
            }
        }
    }

    fn draft(&self, input: &UserInput) -> Result<UserDraft, Error> {
        UserDraft::try_from_input(input, self.shapes).map_err(|err| {
            debug!(reason = %err, "user payload rejected");
            Error::invalid_request(err.to_string())
        })
    }

    async fn require_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| {
                debug!(user_id = %id, "user not found");
                Error::not_found(USER_NOT_FOUND)
            })
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.require_user(id).await
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, input: UserInput) -> Result<User, Error> {
        let draft = self.draft(&input)?;
        let user = self
            .repository
            .insert(draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> Result<User, Error> {
        self.require_user(id).await?;
        let draft = self.draft(&input)?;
        let user = self
            .repository
            .update(id, draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(Self::map_repository_error)?;
        let Some(user) = removed else {
            debug!(user_id = %id, "user not found");
            return Err(Error::not_found(USER_NOT_FOUND));
        };
        info!(user_id = %id, "user deleted");
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
