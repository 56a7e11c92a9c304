//! Tracker store: the authoritative Book/Task collections.
//!
//! # Responsibility
//! - Own the two in-memory collections and every mutation on them.
//! - Re-persist both collections through the state repository after each
//!   mutation.
//!
//! # Invariants
//! - Mutations referencing an unknown id are silent no-ops, never errors;
//!   stale UI calls racing a delete must stay harmless.
//! - Every public mutation ends with a full save of both collections.
//! - A failed save is logged and swallowed; the in-memory state remains
//!   authoritative for the rest of the session.

use crate::model::book::{Benefit, Book, BookId};
use crate::model::now_epoch_ms;
use crate::model::task::{PlanType, Task, TaskId};
use crate::repo::state_repo::StateRepository;
use log::{error, info};

/// Store facade over a state repository implementation.
pub struct TrackerService<R: StateRepository> {
    repo: R,
    books: Vec<Book>,
    tasks: Vec<Task>,
}

impl<R: StateRepository> TrackerService<R> {
    /// Opens the store over `repo`, loading whatever state it holds.
    ///
    /// A first run or a degraded slot yields empty collections; opening
    /// never fails.
    pub fn open(repo: R) -> Self {
        let snapshot = repo.load();
        info!(
            "event=store_open module=service status=ok books={} tasks={}",
            snapshot.books.len(),
            snapshot.tasks.len()
        );
        Self {
            repo,
            books: snapshot.books,
            tasks: snapshot.tasks,
        }
    }

    /// All books, newest first.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All tasks, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Resolves one book by id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Catalogues a new book and returns it.
    ///
    /// The record starts as `Reading` with zero progress and no benefits,
    /// and is prepended so the collection stays newest-first.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        total_pages: u32,
    ) -> Book {
        let book = Book::new(title, author, total_pages);
        self.books.insert(0, book.clone());
        self.persist();
        book
    }

    /// Replaces the stored book carrying `book.id` by full overwrite,
    /// keeping its position in the collection.
    ///
    /// No field-level checks happen here; a caller replacing the whole
    /// record is responsible for the status/progress relationship. Screens
    /// use the narrower operations below instead.
    pub fn update_book(&mut self, book: Book) {
        if let Some(stored) = self.books.iter_mut().find(|stored| stored.id == book.id) {
            *stored = book;
        }
        self.persist();
    }

    /// Removes the book with `id`.
    ///
    /// Router fallout (leaving a detail view of the deleted book) is handled
    /// by the app shell, not here.
    pub fn delete_book(&mut self, id: BookId) {
        self.books.retain(|book| book.id != id);
        self.persist();
    }

    /// Applies the pure progress transition to the book with `id`.
    pub fn update_progress(&mut self, id: BookId, pages: u32) {
        if let Some(stored) = self.books.iter_mut().find(|stored| stored.id == id) {
            let updated = stored.with_progress(pages, now_epoch_ms());
            *stored = updated;
        }
        self.persist();
    }

    /// Flips the reminder flag on the book with `id`.
    pub fn toggle_reminder(&mut self, id: BookId) {
        if let Some(stored) = self.books.iter_mut().find(|stored| stored.id == id) {
            let updated = stored.with_reminder_toggled();
            *stored = updated;
        }
        self.persist();
    }

    /// Overwrites the reminder time on the book with `id`.
    pub fn set_reminder_time(&mut self, id: BookId, time: impl Into<String>) {
        if let Some(stored) = self.books.iter_mut().find(|stored| stored.id == id) {
            let updated = stored.with_reminder_time(time);
            *stored = updated;
        }
        self.persist();
    }

    /// Adds an open task to the given recurrence bucket and returns it.
    pub fn add_task(&mut self, title: impl Into<String>, plan: PlanType) -> Task {
        let task = Task::new(title, plan);
        self.tasks.insert(0, task.clone());
        self.persist();
        task
    }

    /// Flips completion on the task with `id`.
    pub fn toggle_task(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.toggle_completed();
        }
        self.persist();
    }

    /// Removes the task with `id`.
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        self.persist();
    }

    /// Prepends a benefit to the named book's list.
    pub fn add_benefit(
        &mut self,
        book_id: BookId,
        content: impl Into<String>,
        page_number: Option<String>,
    ) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == book_id) {
            book.benefits.insert(0, Benefit::new(content, page_number));
        }
        self.persist();
    }

    /// Replaces the named book's entire benefit sequence.
    ///
    /// Covers both drag-reorder and delete-by-splice; any semantics beyond
    /// "replace the whole list" live with the caller.
    pub fn reorder_benefits(&mut self, book_id: BookId, benefits: Vec<Benefit>) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == book_id) {
            book.benefits = benefits;
        }
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.repo.save(&self.books, &self.tasks) {
            error!(
                "event=state_save module=service status=error error_code=save_failed error={err}"
            );
        }
    }
}
