//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::ports::{TicketsCommand, TicketsQuery, UsersCommand, UsersQuery};
use crate::domain::{ShapePolicy, TicketService, UserService};
use crate::outbound::memory::{InMemoryTicketRepository, InMemoryUserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub tickets: Arc<dyn TicketsQuery>,
    pub tickets_command: Arc<dyn TicketsCommand>,
}

impl HttpState {
    /// Build state backed by fresh in-memory stores.
    ///
    /// # Examples
    /// ```
    /// use helpdesk::domain::ShapePolicy;
    /// use helpdesk::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory(ShapePolicy::Advisory);
    /// ```
    #[must_use]
    pub fn in_memory(shapes: ShapePolicy) -> Self {
        let user_store = Arc::new(InMemoryUserRepository::new());
        let ticket_store = Arc::new(InMemoryTicketRepository::new());

        let users = Arc::new(UserService::new(Arc::clone(&user_store)).with_shape_policy(shapes));
        let tickets = Arc::new(TicketService::new(
            ticket_store,
            user_store,
            Arc::new(DefaultClock),
        ));

        Self {
            users: users.clone(),
            users_command: users,
            tickets: tickets.clone(),
            tickets_command: tickets,
        }
    }
}
