//! Driving port for ticket mutations.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketId, TicketInput};

/// Domain use-case port for opening, updating and deleting tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsCommand: Send + Sync {
    /// Validate and open a ticket for an existing user.
    async fn create_ticket(&self, input: TicketInput) -> Result<Ticket, Error>;

    /// Set a ticket's status.
    ///
    /// An unrecognised or missing status is reported exactly like an unknown
    /// ticket.
    async fn update_ticket_status(
        &self,
        id: TicketId,
        status: Option<String>,
    ) -> Result<Ticket, Error>;

    /// Delete a ticket, returning the removed record.
    async fn delete_ticket(&self, id: TicketId) -> Result<Ticket, Error>;
}
