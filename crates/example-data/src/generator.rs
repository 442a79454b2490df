//! Deterministic user generation from seed definitions.
//!
//! The same seed definition always produces identical output.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::PT_BR;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::SeedDefinition;
use crate::seed::ExampleUserSeed;
use crate::validation::{is_email_shaped, is_human_name};

/// Maximum number of attempts to generate each distinct user.
const MAX_USER_ATTEMPTS: usize = 100;

/// Domain appended to every derived e-mail address.
const EMAIL_DOMAIN: &str = "gmail.com";

/// Generates example users from a seed definition.
///
/// Every generated user has a unique name and a unique e-mail address within
/// the batch, and both pass [`is_human_name`] and [`is_email_shaped`].
///
/// # Errors
///
/// Returns [`GenerationError::UserGenerationFailed`] if a distinct,
/// well-formed user cannot be produced within the retry budget.
///
/// # Example
///
/// ```
/// use example_data::{SeedDefinition, generate_example_users};
///
/// let seed_def = SeedDefinition::new("test", 42, 3);
/// let users = generate_example_users(&seed_def).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// // Same seed produces identical users
/// let users2 = generate_example_users(&seed_def).expect("generated");
/// assert_eq!(users, users2);
/// ```
pub fn generate_example_users(
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut users = Vec::with_capacity(seed_def.user_count());
    let mut names = HashSet::with_capacity(seed_def.user_count());
    let mut emails = HashSet::with_capacity(seed_def.user_count());

    for _ in 0..seed_def.user_count() {
        let user = generate_distinct_user(&mut rng, &names, &emails)?;
        names.insert(user.name.clone());
        emails.insert(user.email.clone());
        users.push(user);
    }

    Ok(users)
}

fn generate_distinct_user(
    rng: &mut ChaCha8Rng,
    names: &HashSet<String>,
    emails: &HashSet<String>,
) -> Result<ExampleUserSeed, GenerationError> {
    for _ in 0..MAX_USER_ATTEMPTS {
        let first: String = FirstName(PT_BR).fake_with_rng(rng);
        let last: String = LastName(PT_BR).fake_with_rng(rng);
        let name = format!("{first} {last}");

        if !is_human_name(&name) || names.contains(&name) {
            continue;
        }
        let Some(email) = email_from_name(&name) else {
            continue;
        };
        if !is_email_shaped(&email) || emails.contains(&email) {
            continue;
        }
        return Ok(ExampleUserSeed { name, email });
    }

    Err(GenerationError::UserGenerationFailed {
        max_attempts: MAX_USER_ATTEMPTS,
    })
}

/// Derives an e-mail address from a full name.
///
/// The name is lower-cased and everything outside `[a-z0-9]` is dropped, so
/// whitespace and punctuation disappear and accented letters are removed.
/// Returns `None` when nothing usable remains.
///
/// # Examples
///
/// ```
/// use example_data::email_from_name;
///
/// assert_eq!(
///     email_from_name("Maria Silva").as_deref(),
///     Some("mariasilva@gmail.com")
/// );
/// assert_eq!(email_from_name("  "), None);
/// ```
#[must_use]
pub fn email_from_name(name: &str) -> Option<String> {
    let local: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    if local.is_empty() {
        return None;
    }
    Some(format!("{local}@{EMAIL_DOMAIN}"))
}
