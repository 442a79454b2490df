//! In-memory stores backed by a mutex-guarded ordered map per entity kind.
//!
//! Records live for the lifetime of the process. Identifiers grow
//! monotonically, so iterating the map by key yields creation order.

mod ticket_repository;
mod user_repository;

pub use ticket_repository::InMemoryTicketRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

/// Lock a store, reporting poisoning as a message for the port error.
fn lock<'a, T>(store: &'a Mutex<T>, kind: &str) -> Result<MutexGuard<'a, T>, String> {
    store
        .lock()
        .map_err(|_| format!("{kind} store lock poisoned"))
}
