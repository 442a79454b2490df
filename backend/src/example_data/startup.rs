//! Startup seeding orchestration.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use example_data::{RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::UsersCommand;
use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Registry parsing failed.
    #[error("registry parse error: {0}")]
    Registry(#[from] RegistryError),
    /// Generation or user creation failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Create example users through `users` when seeding is enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the registry cannot be loaded, the
/// seed is unknown, or a generated user is rejected for a reason other than
/// a collision with an existing user.
///
/// # Examples
///
/// ```
/// use helpdesk::domain::ShapePolicy;
/// use helpdesk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use helpdesk::inbound::http::state::HttpState;
///
/// # futures::executor::block_on(async {
/// let state = HttpState::in_memory(ShapePolicy::Advisory);
/// let outcome = seed_example_data_on_startup(
///     &ExampleDataSettings::disabled(),
///     state.users_command.clone(),
/// )
/// .await
/// .expect("disabled seeding succeeds");
/// assert!(outcome.is_none());
/// # });
/// ```
pub async fn seed_example_data_on_startup(
    settings: &ExampleDataSettings,
    users: Arc<dyn UsersCommand>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry = load_registry(&settings.registry_path())?;
    let outcome = ExampleDataSeeder::new(users)
        .seed_from_registry(&registry, seed_name, settings.count)
        .await?;

    info!(
        seed_key = %outcome.seed_key,
        generated = outcome.generated,
        created = outcome.created,
        skipped = outcome.skipped,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

fn read_error(path: &Path, source: io::Error) -> StartupSeedingError {
    StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    }
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "registry path must be a file"),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|source| read_error(path, source))?;
    Ok(SeedRegistry::from_json(&contents)?)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ShapePolicy;
    use crate::example_data::config::{DEFAULT_SEED_NAME, default_registry_path};
    use crate::inbound::http::state::HttpState;

    fn enabled(seed_name: &str, count: Option<usize>, registry_path: Option<PathBuf>) -> ExampleDataSettings {
        ExampleDataSettings {
            enabled: true,
            seed_name: Some(seed_name.to_owned()),
            count,
            registry_path,
        }
    }

    #[rstest]
    fn bundled_registry_ships_the_default_seed() {
        let registry = load_registry(&default_registry_path()).expect("bundled registry loads");

        assert!(registry.find_seed(DEFAULT_SEED_NAME).is_ok());
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_users_visible_through_the_query_port() {
        let state = HttpState::in_memory(ShapePolicy::Strict);

        let outcome = seed_example_data_on_startup(
            &enabled("cedar-heron", Some(4), None),
            state.users_command.clone(),
        )
        .await
        .expect("seeding succeeds")
        .expect("seeding enabled");

        assert_eq!(outcome.generated, 4);
        assert_eq!(outcome.created, 4);
        assert_eq!(state.users.list_users().await.expect("list").len(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn reseeding_skips_existing_users() {
        let state = HttpState::in_memory(ShapePolicy::Advisory);
        let settings = enabled("cedar-heron", Some(3), None);

        seed_example_data_on_startup(&settings, state.users_command.clone())
            .await
            .expect("first run");
        let second = seed_example_data_on_startup(&settings, state.users_command.clone())
            .await
            .expect("second run")
            .expect("seeding enabled");

        assert_eq!(second.created, 0);
        assert_eq!(second.skipped, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn blank_seed_name_is_rejected() {
        let state = HttpState::in_memory(ShapePolicy::Advisory);

        let result =
            seed_example_data_on_startup(&enabled("   ", None, None), state.users_command).await;

        assert!(matches!(result, Err(StartupSeedingError::EmptySeedName)));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_registry_is_reported_with_its_path() {
        let state = HttpState::in_memory(ShapePolicy::Advisory);
        let path = std::env::temp_dir().join("helpdesk-missing-registry.json");

        let result = seed_example_data_on_startup(
            &enabled("cedar-heron", None, Some(path.clone())),
            state.users_command,
        )
        .await;

        match result {
            Err(StartupSeedingError::RegistryRead { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected RegistryRead, got {other:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_seed_surfaces_registry_error() {
        let state = HttpState::in_memory(ShapePolicy::Advisory);

        let result =
            seed_example_data_on_startup(&enabled("no-such-seed", None, None), state.users_command)
                .await;

        assert!(matches!(
            result,
            Err(StartupSeedingError::Seeding(ExampleDataSeedingError::Registry(_)))
        ));
    }
}
