//! Ticket domain service.
//!
//! Implements the ticket driving ports. Ticket creation validates presence,
//! then resolves the referenced user once; the reference is never checked
//! again afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info};

use crate::domain::ports::{
    TicketRepository, TicketRepositoryError, TicketsCommand, TicketsQuery, UserRepository,
};
use crate::domain::{
    Error, Ticket, TicketDraft, TicketId, TicketInput, TicketStatus, USER_NOT_FOUND, UserId,
    validate_presence,
};

/// Message returned when a ticket id does not resolve.
pub const TICKET_NOT_FOUND: &str = "Ticket not found.";

/// Ticket service implementing [`TicketsQuery`] and [`TicketsCommand`].
#[derive(Clone)]
pub struct TicketService<T, U> {
    tickets: Arc<T>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<T, U> TicketService<T, U> {
    /// Create a service over ticket and user stores.
    pub fn new(tickets: Arc<T>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tickets,
            users,
            clock,
        }
    }
}

impl<T, U> TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    fn map_repository_error(err: TicketRepositoryError) -> Error {
        match err {
            TicketRepositoryError::Storage { message } => {
                error!(%message, "ticket store failure");
                Error::internal(format!("ticket store failure: {message}"))
            }
        }
    }

    fn not_found(id: TicketId) -> Error {
        debug!(ticket_id = %id, "ticket not found");
        Error::not_found(TICKET_NOT_FOUND)
    }

    async fn resolve_user(&self, text: &str) -> Result<UserId, Error> {
        let Some(user_id) = UserId::parse(text) else {
            debug!(user_ref = text, "ticket references a non-numeric user id");
            return Err(Error::not_found(USER_NOT_FOUND));
        };
        let user = self.users.find_by_id(user_id).await.map_err(|err| {
            error!(error = %err, "user lookup failed during ticket creation");
            Error::internal(format!("user lookup failed: {err}"))
        })?;
        match user {
            Some(user) => Ok(user.id()),
            None => {
                debug!(user_id = %user_id, "ticket references an unknown user");
                Err(Error::not_found(USER_NOT_FOUND))
            }
        }
    }
}

#[async_trait]
impl<T, U> TicketsQuery for TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    async fn list_tickets(&self) -> Result<Vec<Ticket>, Error> {
        self.tickets
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_ticket(&self, id: TicketId) -> Result<Ticket, Error> {
        self.tickets
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id))
    }
}

#[async_trait]
impl<T, U> TicketsCommand for TicketService<T, U>
where
    T: TicketRepository,
    U: UserRepository,
{
    async fn create_ticket(&self, input: TicketInput) -> Result<Ticket, Error> {
        let [user_ref, description] = validate_presence([
            ("userId", input.user_id.as_deref()),
            ("description", input.description.as_deref()),
        ])
        .map_err(|err| {
            debug!(reason = %err, "ticket payload rejected");
            Error::invalid_request(err.to_string())
        })?;

        let user_id = self.resolve_user(user_ref).await?;
        let draft = TicketDraft::new(user_id, description, self.clock.utc());
        let ticket = self
            .tickets
            .insert(draft)
            .await
            .map_err(Self::map_repository_error)?;
        info!(ticket_id = %ticket.id(), user_id = %user_id, "ticket opened");
        Ok(ticket)
    }

    async fn update_ticket_status(
        &self,
        id: TicketId,
        status: Option<String>,
    ) -> Result<Ticket, Error> {
        let Some(status) = status.and_then(|text| text.parse::<TicketStatus>().ok()) else {
            debug!(ticket_id = %id, "ticket status value rejected");
            return Err(Error::not_found(TICKET_NOT_FOUND));
        };
        let ticket = self
            .tickets
            .update_status(id, status)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id))?;
        info!(ticket_id = %id, status = %status, "ticket status updated");
        Ok(ticket)
    }

    async fn delete_ticket(&self, id: TicketId) -> Result<Ticket, Error> {
        let ticket = self
            .tickets
            .remove(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::not_found(id))?;
        info!(ticket_id = %id, "ticket deleted");
        Ok(ticket)
    }
}

#[cfg(test)]
#[path = "ticket_service_tests.rs"]
mod tests;
