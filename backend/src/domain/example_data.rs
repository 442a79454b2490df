//! Example data seeding orchestration.
//!
//! Turns deterministic example-data registry output into user create
//! requests and sends them through the normal [`UsersCommand`] path, so
//! presence and uniqueness rules apply to seeded users too.

use std::sync::Arc;

use example_data::{
    ExampleUserSeed, GenerationError, RegistryError, SeedRegistry, generate_example_users,
};
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::UsersCommand;
use crate::domain::{Error, ErrorCode, UserInput};

/// Result of applying example data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// Seed name the users were generated from.
    pub seed_key: String,
    /// Number of users generated.
    pub generated: usize,
    /// Number of users stored.
    pub created: usize,
    /// Number of generated users skipped because they collided with
    /// existing users.
    pub skipped: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// User generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// The user service rejected a generated user for a reason other than a
    /// collision.
    #[error("generated user rejected: {0}")]
    Rejected(#[source] Error),
}

/// Service that orchestrates example data seeding.
#[derive(Clone)]
pub struct ExampleDataSeeder<C: ?Sized> {
    users: Arc<C>,
}

impl<C: ?Sized> ExampleDataSeeder<C> {
    /// Create a new seeder over the user command port.
    pub fn new(users: Arc<C>) -> Self {
        Self { users }
    }
}

impl<C> ExampleDataSeeder<C>
where
    C: UsersCommand + ?Sized,
{
    /// Generate and store the users of a named seed within the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if registry lookup or generation
    /// fails, or if a generated user is rejected for a reason other than a
    /// conflict.
    pub async fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        seed_name: &str,
        user_count_override: Option<usize>,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let seed_def = registry.find_seed(seed_name)?;
        let seed_def = match user_count_override {
            Some(count) => seed_def.with_user_count(count),
            None => seed_def.clone(),
        };
        let example_users = generate_example_users(&seed_def)?;

        let mut outcome = ExampleDataSeedOutcome {
            seed_key: seed_def.name().to_owned(),
            generated: example_users.len(),
            created: 0,
            skipped: 0,
        };
        for seed_user in example_users {
            match self.users.create_user(to_input(seed_user)).await {
                Ok(_) => outcome.created += 1,
                Err(err) if err.code() == ErrorCode::Conflict => {
                    debug!(seed_key = %outcome.seed_key, "example user already present");
                    outcome.skipped += 1;
                }
                Err(err) => return Err(ExampleDataSeedingError::Rejected(err)),
            }
        }

        Ok(outcome)
    }
}

fn to_input(seed_user: ExampleUserSeed) -> UserInput {
    UserInput {
        name: Some(seed_user.name),
        email: Some(seed_user.email),
    }
}
