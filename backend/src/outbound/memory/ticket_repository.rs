//! In-memory adapter for the ticket repository port.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{IdSequence, Ticket, TicketDraft, TicketId, TicketStatus};

use super::lock;

#[derive(Debug, Default)]
struct TicketTable {
    rows: BTreeMap<TicketId, Ticket>,
    ids: IdSequence,
}

/// Process-local ticket store.
#[derive(Debug, Default)]
pub struct InMemoryTicketRepository {
    table: Mutex<TicketTable>,
}

impl InMemoryTicketRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn storage(message: String) -> TicketRepositoryError {
    TicketRepositoryError::storage(message)
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list(&self) -> Result<Vec<Ticket>, TicketRepositoryError> {
        let table = lock(&self.table, "ticket").map_err(storage)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        let table = lock(&self.table, "ticket").map_err(storage)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: TicketDraft) -> Result<Ticket, TicketRepositoryError> {
        let mut table = lock(&self.table, "ticket").map_err(storage)?;
        let id = TicketId::new(table.ids.next_id());
        let ticket = Ticket::open(id, draft);
        table.rows.insert(id, ticket.clone());
        Ok(ticket)
    }

    async fn update_status(
        &self,
        id: TicketId,
        status: TicketStatus,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut table = lock(&self.table, "ticket").map_err(storage)?;
        Ok(table.rows.get_mut(&id).map(|ticket| {
            ticket.set_status(status);
            ticket.clone()
        }))
    }

    async fn remove(&self, id: TicketId) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut table = lock(&self.table, "ticket").map_err(storage)?;
        Ok(table.rows.remove(&id))
    }
}
