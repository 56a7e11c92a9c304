//! View router: current screen plus the selected-book side channel.
//!
//! # Invariants
//! - The selected book id is a key, never a reference; consumers re-resolve
//!   it against the store on every read and tolerate a missing book.
//! - Plain screen selection keeps the selected id; only the detail screen
//!   reads it.

use crate::model::book::BookId;

/// The five screens of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Planning,
    Library,
    BookDetails,
    Insights,
}

/// Nav-bar section owning each screen.
///
/// The detail screen has no nav item of its own; it highlights Library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Planning,
    Library,
    Insights,
}

/// Long-lived screen state machine. Starts on the dashboard; has no terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Router {
    screen: Screen,
    selected_book_id: Option<BookId>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            selected_book_id: None,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Key of the book the detail screen displays, if any.
    ///
    /// May point at a book that no longer exists; resolve against the store.
    pub fn selected_book_id(&self) -> Option<BookId> {
        self.selected_book_id
    }

    /// Nav-bar selection. Keeps the selected book id.
    pub fn select(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Opens the detail screen for `id`.
    pub fn open_book(&mut self, id: BookId) {
        self.selected_book_id = Some(id);
        self.screen = Screen::BookDetails;
    }

    /// Reacts to a book deletion: a detail view of the deleted book falls
    /// back to the library. The stale id stays; lookups resolve it to
    /// nothing.
    pub fn handle_book_deleted(&mut self, id: BookId) {
        if self.screen == Screen::BookDetails && self.selected_book_id == Some(id) {
            self.screen = Screen::Library;
        }
    }

    /// Section the nav bar should highlight for the current screen.
    pub fn active_section(&self) -> NavSection {
        match self.screen {
            Screen::Dashboard => NavSection::Dashboard,
            Screen::Planning => NavSection::Planning,
            Screen::Library | Screen::BookDetails => NavSection::Library,
            Screen::Insights => NavSection::Insights,
        }
    }
}
