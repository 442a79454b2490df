//! Ticket data model and status values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// Stable numeric ticket identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = u64, example = 1)]
pub struct TicketId(u64);

impl TicketId {
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

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display state of a ticket.
///
/// Any status may replace any other; there is no enforced ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    /// Newly created.
    Open,
    /// Being worked on.
    #[serde(rename = "In Progress")]
    #[schema(rename = "In Progress")]
    InProgress,
    /// Resolved.
    Closed,
}

impl TicketStatus {
    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a ticket status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            "Closed" => Ok(Self::Closed),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// Support ticket raised on behalf of a user.
///
/// `user_id` is checked only when the ticket is created; later user
/// deletions leave the reference in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    user_id: UserId,
    #[schema(example = "printer broken")]
    description: String,
    status: TicketStatus,
    created_at: DateTime<Utc>,
}

impl Ticket {
    /// Open a ticket from a validated request.
    #[must_use]
    pub fn open(id: TicketId, draft: TicketDraft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            description: draft.description,
            status: TicketStatus::Open,
            created_at: draft.created_at,
        }
    }

    /// Stable ticket identifier.
    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    /// Referenced user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the current status.
    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }
}

/// Raw ticket fields as received from a client.
///
/// `user_id` carries the text form of whatever JSON value the client sent,
/// so presence and numeric parsing happen in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketInput {
    pub user_id: Option<String>,
    pub description: Option<String>,
}

impl TicketInput {
    /// Convenience constructor for present values.
    pub fn new(user_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            description: Some(description.into()),
        }
    }
}

/// Validated ticket content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDraft {
    user_id: UserId,
    description: String,
    created_at: DateTime<Utc>,
}

impl TicketDraft {
    /// Assemble a draft once the user reference has been resolved.
    pub fn new(user_id: UserId, description: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            description: description.into(),
            created_at,
        }
    }
}
