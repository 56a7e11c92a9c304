//! Knowledge-bank feed: every benefit across the catalogue, newest first.

use crate::model::book::{BenefitId, Book};

/// One feed row pairing a benefit with its source book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightEntry {
    pub benefit_id: BenefitId,
    pub content: String,
    pub book_title: String,
    pub created_at: i64,
}

/// Flattens every book's benefits into one list sorted by `created_at`
/// descending.
///
/// The sort is stable: entries sharing a timestamp keep flattening order
/// (books in collection order, each book's benefits in stored order).
pub fn insights_feed(books: &[Book]) -> Vec<InsightEntry> {
    let mut feed: Vec<InsightEntry> = Vec::new();
    for book in books {
        for benefit in &book.benefits {
            feed.push(InsightEntry {
                benefit_id: benefit.id,
                content: benefit.content.clone(),
                book_title: book.title.clone(),
                created_at: benefit.created_at,
            });
        }
    }
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed
}
