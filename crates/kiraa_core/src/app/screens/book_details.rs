//! Book detail screen: progress slider, reminder settings, benefit list.
//!
//! # Invariants
//! - The displayed book is re-resolved by id on every read; a missing book
//!   yields no view-model instead of a dangling reference.
//! - Deleting the book is a two-step interaction: arm, then confirm.

use crate::model::book::{Book, BookId};
use crate::repo::state_repo::StateRepository;
use crate::service::tracker_service::TrackerService;
use once_cell::sync::Lazy;
use regex::Regex;

static REMINDER_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid reminder time regex")
});

/// Detail screen controller.
#[derive(Debug, Default)]
pub struct BookDetailsScreen {
    is_adding_benefit: bool,
    /// Draft text of the next benefit.
    pub benefit_content: String,
    /// Draft page label of the next benefit.
    pub page_label: String,
    delete_armed: bool,
}

/// Everything the detail screen shows for an existing book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetailsViewModel {
    pub book: Book,
    pub progress_ratio: f64,
    pub is_adding_benefit: bool,
    pub benefit_content: String,
    pub page_label: String,
    pub delete_armed: bool,
}

impl BookDetailsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the add-benefit form.
    pub fn open_add_benefit(&mut self) {
        self.is_adding_benefit = true;
    }

    /// Closes the add-benefit form without submitting. Drafts are kept.
    pub fn cancel_add_benefit(&mut self) {
        self.is_adding_benefit = false;
    }

    pub fn is_adding_benefit(&self) -> bool {
        self.is_adding_benefit
    }

    /// Submits the benefit drafts against the displayed book.
    ///
    /// Content is stored as typed; an empty page label is normalized to
    /// absent. Drafts clear and the form closes. A missing book makes the
    /// store call a no-op, drafts clear regardless.
    pub fn submit_benefit<R: StateRepository>(
        &mut self,
        store: &mut TrackerService<R>,
        book_id: BookId,
    ) {
        let page_label = if self.page_label.is_empty() {
            None
        } else {
            Some(self.page_label.clone())
        };
        store.add_benefit(book_id, self.benefit_content.clone(), page_label);
        self.benefit_content.clear();
        self.page_label.clear();
        self.is_adding_benefit = false;
    }

    /// Removes the benefit at `index` through a whole-list replace.
    ///
    /// Out-of-range indices and missing books are no-ops.
    pub fn delete_benefit_at<R: StateRepository>(
        &self,
        store: &mut TrackerService<R>,
        book_id: BookId,
        index: usize,
    ) {
        let Some(book) = store.book(book_id) else {
            return;
        };
        if index >= book.benefits.len() {
            return;
        }
        let mut benefits = book.benefits.clone();
        benefits.remove(index);
        store.reorder_benefits(book_id, benefits);
    }

    /// Moves the progress slider.
    pub fn set_progress<R: StateRepository>(
        &self,
        store: &mut TrackerService<R>,
        book_id: BookId,
        pages: u32,
    ) {
        store.update_progress(book_id, pages);
    }

    /// Flips the reading reminder.
    pub fn toggle_reminder<R: StateRepository>(
        &self,
        store: &mut TrackerService<R>,
        book_id: BookId,
    ) {
        store.toggle_reminder(book_id);
    }

    /// Applies an edited reminder time if it has the `HH:mm` shape.
    ///
    /// Returns whether the value was accepted. The store itself does not
    /// validate; this boundary is the only format gate.
    pub fn set_reminder_time<R: StateRepository>(
        &self,
        store: &mut TrackerService<R>,
        book_id: BookId,
        time: &str,
    ) -> bool {
        if !is_reminder_time(time) {
            return false;
        }
        store.set_reminder_time(book_id, time);
        true
    }

    /// First step of the delete interaction.
    pub fn arm_delete(&mut self) {
        self.delete_armed = true;
    }

    /// Backs out of an armed delete.
    pub fn cancel_delete(&mut self) {
        self.delete_armed = false;
    }

    pub fn delete_armed(&self) -> bool {
        self.delete_armed
    }

    /// Derives the detail view for the selected book, or `None` when the
    /// selection is empty or points at a deleted book.
    pub fn view(&self, books: &[Book], selected: Option<BookId>) -> Option<BookDetailsViewModel> {
        let book = selected.and_then(|id| books.iter().find(|book| book.id == id))?;
        Some(BookDetailsViewModel {
            book: book.clone(),
            progress_ratio: book.progress_ratio(),
            is_adding_benefit: self.is_adding_benefit,
            benefit_content: self.benefit_content.clone(),
            page_label: self.page_label.clone(),
            delete_armed: self.delete_armed,
        })
    }

    /// Drops all transient state, as if the screen were freshly entered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Checks the `HH:mm` shape of a reminder time (24-hour clock).
fn is_reminder_time(value: &str) -> bool {
    REMINDER_TIME_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_reminder_time;

    #[test]
    fn accepts_full_day_range() {
        assert!(is_reminder_time("00:00"));
        assert!(is_reminder_time("07:30"));
        assert!(is_reminder_time("18:00"));
        assert!(is_reminder_time("23:59"));
    }

    #[test]
    fn rejects_out_of_range_and_malformed_values() {
        assert!(!is_reminder_time("24:00"));
        assert!(!is_reminder_time("12:60"));
        assert!(!is_reminder_time("9:15"));
        assert!(!is_reminder_time("18.00"));
        assert!(!is_reminder_time(""));
        assert!(!is_reminder_time("18:00 "));
    }
}
