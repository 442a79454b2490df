//! Identity allocation for stored entities.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier sequence for one entity kind.
///
/// Identifiers start at 1 and are never handed out twice, even after the
/// entity owning them has been deleted.
///
/// # Examples
/// ```
/// use helpdesk::domain::IdSequence;
///
/// let ids = IdSequence::new();
/// assert_eq!(ids.next_id(), 1);
/// assert_eq!(ids.next_id(), 2);
/// ```
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next identifier.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
