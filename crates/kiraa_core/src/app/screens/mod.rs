//! Screen controllers.
//!
//! # Responsibility
//! - Hold each screen's transient input state (drafts, dialog flags, tabs).
//! - Translate interactions into store mutations; routing stays with the
//!   app shell.
//!
//! # Invariants
//! - Nothing here is persisted; screen state resets when the user navigates
//!   away, matching a fresh mount of the screen.
//! - Screens never touch the repository; persistence stays behind the store.

pub mod book_details;
pub mod dashboard;
pub mod insights;
pub mod library;
pub mod planning;

use crate::model::book::{Book, BookId, BookStatus};

/// Card projection of one book for list-style screens.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub benefit_count: usize,
    pub progress_ratio: f64,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            status: book.status,
            benefit_count: book.benefits.len(),
            progress_ratio: book.progress_ratio(),
        }
    }
}
