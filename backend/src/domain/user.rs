//! User data model.

use std::fmt;

use example_data::{is_email_shaped, is_human_name};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{MissingFields, ShapePolicy, validate_presence};

/// Stable numeric user identifier.
///
/// # Examples
/// ```
/// use helpdesk::domain::UserId;
///
/// assert_eq!(UserId::parse("42"), Some(UserId::new(42)));
/// assert_eq!(UserId::parse("abc"), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parse an identifier from request text, returning `None` when the
    /// text is not a non-negative integer.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok().map(Self)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application user.
///
/// ## Invariants
/// - `name` and `email` are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    id: UserId,
    #[schema(example = "Maria Silva")]
    name: String,
    #[schema(example = "mariasilva@gmail.com")]
    email: String,
}

impl User {
    /// Build a user from an identifier and validated fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// E-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Return `true` if this user already holds `draft`'s name or e-mail.
    #[must_use]
    pub fn collides_with(&self, draft: &UserDraft) -> bool {
        self.name == draft.name || self.email == draft.email
    }

    /// Replace name and e-mail in place.
    pub fn apply(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
    }
}

/// Raw user fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserInput {
    /// Convenience constructor for present values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Validated name and e-mail ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Validate raw input under the given shape policy.
    ///
    /// # Errors
    /// Returns [`MissingFields`] for `name` and `email` when either is blank,
    /// or when shapes are strict and either value is malformed.
    ///
    /// # Examples
    /// ```
    /// use helpdesk::domain::{ShapePolicy, UserDraft, UserInput};
    ///
    /// let input = UserInput::new("  Maria Silva ", "maria@x.com");
    /// let draft = UserDraft::try_from_input(&input, ShapePolicy::Advisory).expect("valid");
    /// assert_eq!(draft.name(), "Maria Silva");
    /// ```
    pub fn try_from_input(input: &UserInput, shapes: ShapePolicy) -> Result<Self, MissingFields> {
        let [name, email] = validate_presence([
            ("name", input.name.as_deref()),
            ("email", input.email.as_deref()),
        ])?;

        if shapes.is_strict() && !(is_human_name(name) && is_email_shaped(email)) {
            return Err(MissingFields::new(["name", "email"]));
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    /// Validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validated e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
