//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user and ticket stores.
//!
//! Adapters translate between domain types and their storage representation.
//! Uniqueness checks live here only because they must be atomic with the
//! write they guard.

pub mod memory;
