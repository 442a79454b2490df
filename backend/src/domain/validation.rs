//! Shared presence and shape checks applied before any store mutation.
//!
//! Presence is always enforced: a required field must be non-empty once
//! leading and trailing whitespace is removed. Shape checks (human name,
//! e-mail) are advisory unless the service runs with [`ShapePolicy::Strict`].

use std::fmt;

/// Whether non-empty values must also match their expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Only presence is enforced.
    #[default]
    Advisory,
    /// Values failing the shape check are rejected like missing ones.
    Strict,
}

impl ShapePolicy {
    /// Build a policy from a `strict_shapes` flag.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Advisory }
    }

    /// Return `true` when shape failures must reject the request.
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Aggregated presence failure naming every required field of an entity.
///
/// # Examples
/// ```
/// use helpdesk::domain::validate_presence;
///
/// let err = validate_presence([("name", Some("Maria")), ("email", Some("  "))])
///     .expect_err("email is blank");
/// assert_eq!(err.to_string(), "The fields name and email are required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields {
    fields: Vec<&'static str>,
}

impl MissingFields {
    /// Build the failure for the given required field names.
    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Names of the required fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = match self.fields.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_owned(),
            Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
        };
        write!(f, "The fields {joined} are required.")
    }
}

impl std::error::Error for MissingFields {}

/// Return the trimmed value when it is present and non-blank.
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

/// Check every required field for presence.
///
/// On success the trimmed values are returned in the order given. Any blank
/// or missing field fails the whole check with a single [`MissingFields`]
/// naming all required fields.
pub fn validate_presence<'a, const N: usize>(
    fields: [(&'static str, Option<&'a str>); N],
) -> Result<[&'a str; N], MissingFields> {
    let mut values = [""; N];
    let mut complete = true;
    for (slot, (_, value)) in values.iter_mut().zip(fields.iter()) {
        match present(*value) {
            Some(trimmed) => *slot = trimmed,
            None => complete = false,
        }
    }

    if complete {
        Ok(values)
    } else {
        Err(MissingFields::new(fields.map(|(name, _)| name)))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("   \t"), None)]
    #[case(Some("  Maria  "), Some("Maria"))]
    fn present_trims_and_rejects_blank(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(present(input), expected);
    }

    #[rstest]
    fn presence_returns_trimmed_values_in_order() {
        let values = validate_presence([("name", Some(" Ana ")), ("email", Some("a@b.com "))])
            .expect("both present");
        assert_eq!(values, ["Ana", "a@b.com"]);
    }

    #[rstest]
    #[case([("name", None), ("email", Some("a@b.com"))])]
    #[case([("name", Some("Ana")), ("email", Some(" "))])]
    #[case([("name", Some("")), ("email", None)])]
    fn any_missing_field_names_all_required_fields(#[case] fields: [(&'static str, Option<&str>); 2]) {
        let err = validate_presence(fields).expect_err("missing field");
        assert_eq!(err.fields(), ["name", "email"]);
        assert_eq!(err.to_string(), "The fields name and email are required.");
    }

    #[rstest]
    fn message_lists_three_fields() {
        let err = MissingFields::new(["a", "b", "c"]);
        assert_eq!(err.to_string(), "The fields a, b and c are required.");
    }

    #[rstest]
    fn strict_flag_maps_to_policy() {
        assert!(ShapePolicy::from_strict(true).is_strict());
        assert_eq!(ShapePolicy::from_strict(false), ShapePolicy::Advisory);
    }
}
