//! Book and Benefit domain model.
//!
//! # Responsibility
//! - Define the catalogued Book record and its owned Benefit notes.
//! - Provide the pure progress/reminder transitions used by the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `status == Completed` iff `pages_read == total_pages`, for every book
//!   mutated through `with_progress`. Raw whole-record replacement can bypass
//!   this rule and is documented as such on the store.
//! - `completed_at` is set on the transition into `Completed`, kept as-is
//!   while the book stays completed, and cleared on the transition out.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_epoch_ms;

/// Stable identifier for a catalogued book.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// Stable identifier for a benefit note.
pub type BenefitId = Uuid;

/// Reminder time applied the first time a reminder is enabled.
pub const DEFAULT_REMINDER_TIME: &str = "18:00";

/// Reading lifecycle state of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// Progress is below the page total.
    Reading,
    /// Every page has been read.
    Completed,
    /// Parked by the reader; only reachable through raw replacement.
    OnHold,
}

/// A note or quote extracted from a book, optionally tagged with a page label.
///
/// Benefits are exclusively owned by one book and live inside its `benefits`
/// sequence; they have no identity outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub id: BenefitId,
    /// Free text, required.
    pub content: String,
    /// Free-text page label, not necessarily numeric. Absent when the input
    /// was left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,
    /// Unix epoch milliseconds, set at creation.
    pub created_at: i64,
}

impl Benefit {
    /// Creates a benefit with a generated ID and the current timestamp.
    pub fn new(content: impl Into<String>, page_number: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            page_number,
            created_at: now_epoch_ms(),
        }
    }
}

/// Canonical record for one catalogued book.
///
/// Serialized field names mirror the persisted slot schema, so a slot written
/// by an earlier build of the app parses unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Fixed at creation; no operation changes it afterwards. The add-book
    /// boundary coerces unparsable input to 0, so 0 is representable.
    pub total_pages: u32,
    /// Held inside `[0, total_pages]` by `with_progress`.
    pub pages_read: u32,
    /// Newest-first; reorderable as a whole list.
    pub benefits: Vec<Benefit>,
    pub status: BookStatus,
    /// Unix epoch milliseconds of the first transition into `Completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    /// Absent counts as disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_enabled: Option<bool>,
    /// `"HH:mm"`; populated the first time a reminder is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl Book {
    /// Creates a new book with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as `Reading` regardless of `total_pages`.
    /// - `pages_read` starts at 0 with an empty benefit list.
    pub fn new(title: impl Into<String>, author: impl Into<String>, total_pages: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            total_pages,
            pages_read: 0,
            benefits: Vec::new(),
            status: BookStatus::Reading,
            completed_at: None,
            reminder_enabled: None,
            reminder_time: None,
        }
    }

    /// Returns a copy with `pages_read` set to `pages`, clamped into
    /// `[0, total_pages]`.
    ///
    /// Status follows the clamped value: `Completed` iff it equals
    /// `total_pages`, `Reading` otherwise. `completed_at` is stamped with
    /// `now_ms` on the transition into `Completed` only when not already set,
    /// and cleared on the transition out.
    pub fn with_progress(&self, pages: u32, now_ms: i64) -> Self {
        let pages_read = pages.min(self.total_pages);
        let completed = pages_read == self.total_pages;
        Self {
            pages_read,
            status: if completed {
                BookStatus::Completed
            } else {
                BookStatus::Reading
            },
            completed_at: if completed {
                self.completed_at.or(Some(now_ms))
            } else {
                None
            },
            ..self.clone()
        }
    }

    /// Returns a copy with the reminder flag flipped.
    ///
    /// Enabling a reminder on a book that never had a time configured
    /// defaults `reminder_time` to [`DEFAULT_REMINDER_TIME`]. Disabling
    /// leaves any configured time in place.
    pub fn with_reminder_toggled(&self) -> Self {
        let enabled = !self.reminder_enabled.unwrap_or(false);
        let reminder_time = if enabled {
            self.reminder_time
                .clone()
                .or_else(|| Some(DEFAULT_REMINDER_TIME.to_string()))
        } else {
            self.reminder_time.clone()
        };
        Self {
            reminder_enabled: Some(enabled),
            reminder_time,
            ..self.clone()
        }
    }

    /// Returns a copy with `reminder_time` overwritten.
    ///
    /// Format checking happens at the screen boundary, not here.
    pub fn with_reminder_time(&self, time: impl Into<String>) -> Self {
        Self {
            reminder_time: Some(time.into()),
            ..self.clone()
        }
    }

    /// Fraction of the book read, in `[0.0, 1.0]` for in-range progress.
    ///
    /// Defined as 0.0 when `total_pages == 0` so display math never divides
    /// by zero.
    pub fn progress_ratio(&self) -> f64 {
        if self.total_pages == 0 {
            0.0
        } else {
            f64::from(self.pages_read) / f64::from(self.total_pages)
        }
    }

    /// Returns whether the book is marked completed.
    pub fn is_completed(&self) -> bool {
        self.status == BookStatus::Completed
    }
}
