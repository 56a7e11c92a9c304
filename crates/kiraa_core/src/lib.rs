//! Core domain logic for Kiraa, a personal reading tracker.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use app::App;
pub use app::router::{NavSection, Router, Screen};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Benefit, BenefitId, Book, BookId, BookStatus, DEFAULT_REMINDER_TIME};
pub use model::task::{PlanType, Task, TaskId};
pub use query::insights::{InsightEntry, insights_feed};
pub use query::stats::{dashboard_stats, DashboardStats, recent_books, RECENT_BOOKS_LIMIT};
pub use repo::state_repo::{
    JsonStateRepository, MemoryStateRepository, RepoError, RepoResult, StateRepository,
    StateSnapshot,
};
pub use service::tracker_service::TrackerService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
