//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod ticket_repository;
mod tickets_command;
mod tickets_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{TicketRepository, TicketRepositoryError};
#[cfg(test)]
pub use tickets_command::MockTicketsCommand;
pub use tickets_command::TicketsCommand;
#[cfg(test)]
pub use tickets_query::MockTicketsQuery;
pub use tickets_query::TicketsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
