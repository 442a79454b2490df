//! Deterministic example user data generation for the helpdesk service.
//!
//! This crate produces believable, reproducible user records (a full name and
//! a matching e-mail address) from a JSON seed registry. It is independent of
//! backend domain types so the backend can depend on it without cycles.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON
//! - Deterministic user generation using named seeds
//! - Name and e-mail shape checks matching the service's client-side rules
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_users};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [{"name": "test-seed", "seed": 42, "userCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let users = generate_example_users(seed_def).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::{email_from_name, generate_example_users};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::ExampleUserSeed;
pub use validation::{is_email_shaped, is_human_name};
