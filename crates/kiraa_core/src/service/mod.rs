//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory collections behind use-case APIs.
//! - Keep screen/router layers decoupled from persistence details.

pub mod tracker_service;
