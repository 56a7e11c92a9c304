//! Dashboard aggregates.

use crate::model::book::{Book, BookStatus};
use crate::model::task::{PlanType, Task};

/// Number of books surfaced in the dashboard recent list.
pub const RECENT_BOOKS_LIMIT: usize = 3;

/// Aggregate counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Catalogue size.
    pub total_books: usize,
    /// Books marked completed.
    pub completed_books: usize,
    /// Benefits across every book.
    pub benefits: usize,
    /// Daily-bucket tasks.
    pub today_tasks: usize,
    /// Daily-bucket tasks already done.
    pub completed_tasks: usize,
}

impl DashboardStats {
    /// Daily tasks still open.
    pub fn remaining_today(&self) -> usize {
        self.today_tasks.saturating_sub(self.completed_tasks)
    }
}

/// Recomputes every dashboard counter from scratch.
pub fn dashboard_stats(books: &[Book], tasks: &[Task]) -> DashboardStats {
    DashboardStats {
        total_books: books.len(),
        completed_books: books
            .iter()
            .filter(|book| book.status == BookStatus::Completed)
            .count(),
        benefits: books.iter().map(|book| book.benefits.len()).sum(),
        today_tasks: tasks
            .iter()
            .filter(|task| task.plan == PlanType::Daily)
            .count(),
        completed_tasks: tasks
            .iter()
            .filter(|task| task.plan == PlanType::Daily && task.is_completed)
            .count(),
    }
}

/// Leading slice of the catalogue for the dashboard recent list.
///
/// The collection is newest-first (adds prepend), so the head is the most
/// recently catalogued books.
pub fn recent_books(books: &[Book]) -> &[Book] {
    &books[..books.len().min(RECENT_BOOKS_LIMIT)]
}
