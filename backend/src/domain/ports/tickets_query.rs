//! Driving port for ticket reads.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketId};

/// Domain use-case port for reading tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsQuery: Send + Sync {
    /// Return all tickets in creation order.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, Error>;

    /// Return one ticket, or a not-found error.
    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, Error>;
}
