//! Persistence layer abstractions and the slot-file implementation.
//!
//! # Responsibility
//! - Define the state snapshot contract the store persists through.
//! - Isolate slot-file encoding and replacement details from the store.
//!
//! # Invariants
//! - A load never fails: an absent or unreadable slot degrades to an empty
//!   collection for that slot only.
//! - A save replaces both slots in full; there are no partial writes.

pub mod state_repo;
