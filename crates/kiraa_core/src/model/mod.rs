//! Domain model for the reading tracker.
//!
//! # Responsibility
//! - Define the canonical Book/Benefit/Task records shared by every layer.
//! - Provide the pure progress/reminder transition logic on `Book`.
//!
//! # Invariants
//! - Every record is identified by a stable UUID minted at creation.
//! - Timestamps are Unix epoch milliseconds.
//! - Serialized field names match the persisted slot schema exactly.

pub mod book;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Clamps to 0 if the system clock reports a pre-epoch time.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
