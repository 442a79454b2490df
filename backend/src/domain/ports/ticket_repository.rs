//! Port abstraction for ticket storage adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Ticket, TicketDraft, TicketId, TicketStatus};

use super::define_port_error;

define_port_error! {
    /// Storage errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// The backing store could not be accessed.
        Storage { message: String } => "ticket store failure: {message}",
    }
}

/// Driven port for ticket storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Return every stored ticket in creation order.
    async fn list(&self) -> Result<Vec<Ticket>, TicketRepositoryError>;

    /// Fetch a ticket by identifier.
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Store a new ticket with status `Open`, allocating its identifier.
    async fn insert(&self, draft: TicketDraft) -> Result<Ticket, TicketRepositoryError>;

    /// Set a ticket's status, returning the updated record if it exists.
    async fn update_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Remove a ticket, returning the removed record if it existed.
    async fn remove(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError>;
}
