//! Pure read-side computations over the store collections.
//!
//! # Responsibility
//! - Derive aggregate stats and feed projections from Books/Tasks.
//! - Stay pure: no store access, no caching, recomputed on every read.

pub mod insights;
pub mod stats;
