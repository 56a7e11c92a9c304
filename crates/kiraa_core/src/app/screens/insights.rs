//! Insights screen: the knowledge-bank feed.

use crate::model::book::Book;
use crate::query::insights::{InsightEntry, insights_feed};

/// Read-only screen; owns no input state.
#[derive(Debug, Default)]
pub struct InsightsScreen;

/// Everything the insights screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsViewModel {
    /// All benefits across the catalogue, newest first.
    pub entries: Vec<InsightEntry>,
}

impl InsightsScreen {
    /// Derives the feed from the current catalogue.
    pub fn view(&self, books: &[Book]) -> InsightsViewModel {
        InsightsViewModel {
            entries: insights_feed(books),
        }
    }
}
