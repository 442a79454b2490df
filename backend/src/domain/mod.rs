//! Domain primitives, ports and services.
//!
//! Purpose: define the user and ticket model, the validation pipeline that
//! guards every mutation, and the services that enforce uniqueness and
//! referential rules. Nothing here depends on the HTTP framework.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failures.
//! - User, Ticket and their identifiers, inputs and drafts.
//! - UserService, TicketService — driving port implementations.
//! - ExampleDataSeeder — startup seeding through the user command port.

pub mod error;
pub mod example_data;
pub mod identity;
pub mod ports;
pub mod ticket;
pub mod ticket_service;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::example_data::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
pub use self::identity::IdSequence;
pub use self::ticket::{
    Ticket, TicketDraft, TicketId, TicketInput, TicketStatus, UnknownStatus,
};
pub use self::ticket_service::{TICKET_NOT_FOUND, TicketService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserInput};
pub use self::user_service::{USER_CONFLICT, USER_NOT_FOUND, UserService};
pub use self::validation::{MissingFields, ShapePolicy, present, validate_presence};
