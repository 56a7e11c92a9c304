//! Library screen: the full catalogue plus the add-book dialog.

use super::BookCard;
use crate::model::book::{Book, BookId};
use crate::repo::state_repo::StateRepository;
use crate::service::tracker_service::TrackerService;

/// Draft fields of the add-book dialog. `pages` stays raw text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub pages: String,
}

/// Library screen controller.
#[derive(Debug, Default)]
pub struct LibraryScreen {
    is_adding: bool,
    pub form: BookForm,
}

/// Everything the library screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryViewModel {
    pub is_adding: bool,
    pub form: BookForm,
    pub cards: Vec<BookCard>,
}

impl LibraryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the add-book dialog.
    pub fn open_add_dialog(&mut self) {
        self.is_adding = true;
    }

    /// Closes the dialog without submitting. The draft is kept.
    pub fn cancel_add(&mut self) {
        self.is_adding = false;
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    /// Submits the draft form as a new book and returns its id.
    ///
    /// No field validation happens here: title and author are stored as
    /// typed, and a pages value that does not parse as a non-negative
    /// integer is coerced to 0 (yielding a zero-page book with ratio 0).
    /// On submit the dialog closes and the draft clears.
    pub fn submit<R: StateRepository>(&mut self, store: &mut TrackerService<R>) -> BookId {
        let total_pages = self.form.pages.trim().parse::<u32>().unwrap_or(0);
        let book = store.add_book(self.form.title.clone(), self.form.author.clone(), total_pages);
        self.is_adding = false;
        self.form = BookForm::default();
        book.id
    }

    /// Derives the catalogue cards.
    pub fn view(&self, books: &[Book]) -> LibraryViewModel {
        LibraryViewModel {
            is_adding: self.is_adding,
            form: self.form.clone(),
            cards: books.iter().map(BookCard::from).collect(),
        }
    }

    /// Drops all transient state, as if the screen were freshly entered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
