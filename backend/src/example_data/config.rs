//! Example data settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Seed used when none is configured.
pub(crate) const DEFAULT_SEED_NAME: &str = "cedar-heron";

pub(crate) fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Controls whether and how example users are created at startup.
///
/// Values come from `EXAMPLE_DATA_*` environment variables, CLI flags or a
/// configuration file, in increasing order of precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed users on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Registry seed to generate users from.
    pub seed_name: Option<String>,
    /// Number of users to generate instead of the seed's own count.
    #[ortho_config(file_key = "user_count")]
    pub count: Option<usize>,
    /// Registry file location.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Settings that leave the user store empty.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            seed_name: None,
            count: None,
            registry_path: None,
        }
    }

    /// Configured seed name, trimmed, or the default seed.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        self.seed_name
            .as_deref()
            .map_or(DEFAULT_SEED_NAME, str::trim)
    }

    /// Configured registry path or the bundled fixture.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
