//! Generated user seed types.
//!
//! These types are independent of backend domain types; the backend converts
//! them into create requests at the point of use.

use serde::{Deserialize, Serialize};

/// A generated example user record.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     name: "Maria Silva".to_owned(),
///     email: "mariasilva@gmail.com".to_owned(),
/// };
///
/// assert_eq!(user.name, "Maria Silva");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleUserSeed {
    /// Full name, first name followed by surname.
    pub name: String,
    /// E-mail address derived from the name.
    pub email: String,
}
