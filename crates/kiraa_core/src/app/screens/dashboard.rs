//! Dashboard screen: aggregate counters and the recent-books list.

use super::BookCard;
use crate::model::book::Book;
use crate::model::task::Task;
use crate::query::stats::{dashboard_stats, DashboardStats, recent_books};

/// Read-only screen; owns no input state.
#[derive(Debug, Default)]
pub struct DashboardScreen;

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub stats: DashboardStats,
    /// Most recently catalogued books; tapping one opens its detail screen.
    pub recent: Vec<BookCard>,
}

impl DashboardScreen {
    /// Derives the dashboard from the current collections.
    pub fn view(&self, books: &[Book], tasks: &[Task]) -> DashboardViewModel {
        DashboardViewModel {
            stats: dashboard_stats(books, tasks),
            recent: recent_books(books).iter().map(BookCard::from).collect(),
        }
    }
}
