//! Name and e-mail shape checks.
//!
//! These mirror the client-side checks the service's consumers apply to user
//! records, so generated users always look valid to them.
//!
//! # Validation Rules
//!
//! - Names: letters (including Latin-1 accented letters), whitespace,
//!   apostrophes and hyphens only.
//! - E-mail: `local@domain.tld` with no whitespace and a top-level label of at
//!   least two characters.

use std::sync::OnceLock;

use regex::Regex;

static HUMAN_NAME_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern).unwrap_or_else(|error| panic!("shape regex failed to compile: {error}"))
    })
}

/// Returns `true` when `name` has a human name shape.
///
/// # Examples
///
/// ```
/// use example_data::is_human_name;
///
/// assert!(is_human_name("João D'Ávila-Souza"));
/// assert!(!is_human_name("SELECT * FROM Users;"));
/// ```
#[must_use]
pub fn is_human_name(name: &str) -> bool {
    compiled(&HUMAN_NAME_RE, r"^[A-Za-zÀ-ÿ\s'-]+$").is_match(name)
}

/// Returns `true` when `email` has a basic `local@domain.tld` shape.
///
/// # Examples
///
/// ```
/// use example_data::is_email_shaped;
///
/// assert!(is_email_shaped("maria@x.com"));
/// assert!(!is_email_shaped("DROP TABLE users;"));
/// ```
#[must_use]
pub fn is_email_shaped(email: &str) -> bool {
    compiled(&EMAIL_RE, r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").is_match(email)
}
