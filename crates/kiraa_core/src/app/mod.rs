//! Application shell: one store, one router, five screens.
//!
//! # Responsibility
//! - Wire screen interactions to store mutations and router transitions.
//! - Enforce the cross-cutting rules no single screen can own: screen state
//!   resets on navigation, and deleting the viewed book falls back to the
//!   library.
//!
//! # Invariants
//! - All mutations run synchronously on the caller's thread; there is
//!   exactly one logical actor.
//! - Interactions reach the store only through these methods.

pub mod router;
pub mod screens;

use crate::model::book::{Book, BookId};
use crate::model::task::{Task, TaskId};
use crate::repo::state_repo::StateRepository;
use crate::service::tracker_service::TrackerService;
use log::debug;
use router::{Router, Screen};
use screens::book_details::{BookDetailsScreen, BookDetailsViewModel};
use screens::dashboard::{DashboardScreen, DashboardViewModel};
use screens::insights::{InsightsScreen, InsightsViewModel};
use screens::library::{LibraryScreen, LibraryViewModel};
use screens::planning::{PlanningScreen, PlanningViewModel};

/// Long-lived application state for one tracker session.
pub struct App<R: StateRepository> {
    store: TrackerService<R>,
    router: Router,
    pub dashboard: DashboardScreen,
    pub planning: PlanningScreen,
    pub library: LibraryScreen,
    pub book_details: BookDetailsScreen,
    pub insights: InsightsScreen,
}

impl<R: StateRepository> App<R> {
    /// Boots a session over `repo`, starting on the dashboard.
    pub fn open(repo: R) -> Self {
        Self {
            store: TrackerService::open(repo),
            router: Router::new(),
            dashboard: DashboardScreen,
            planning: PlanningScreen::new(),
            library: LibraryScreen::new(),
            book_details: BookDetailsScreen::new(),
            insights: InsightsScreen,
        }
    }

    pub fn router(&self) -> Router {
        self.router
    }

    /// All books, newest first.
    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    /// All tasks, newest first.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Resolves one book by id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.store.book(id)
    }

    /// Nav-bar selection.
    pub fn select_screen(&mut self, screen: Screen) {
        self.leave_screen(screen);
        debug!("event=navigate module=app to={screen:?}");
        self.router.select(screen);
    }

    /// Opens the detail screen for `id`.
    pub fn open_book(&mut self, id: BookId) {
        self.leave_screen(Screen::BookDetails);
        debug!("event=navigate module=app to=BookDetails book_id={id}");
        self.router.open_book(id);
    }

    /// Detail-screen back action.
    pub fn back_to_library(&mut self) {
        self.select_screen(Screen::Library);
    }

    /// Confirms an armed delete of the currently viewed book.
    ///
    /// Without a selection or a prior [`BookDetailsScreen::arm_delete`] this
    /// is a no-op. On success the book is removed and the router falls back
    /// to the library.
    pub fn delete_selected_book(&mut self) {
        let Some(id) = self.router.selected_book_id() else {
            return;
        };
        if !self.book_details.delete_armed() {
            return;
        }
        self.store.delete_book(id);
        self.router.handle_book_deleted(id);
        self.book_details.reset();
    }

    /// Planning submit: draft title into the active tab.
    pub fn submit_new_task(&mut self) -> Option<TaskId> {
        self.planning.submit(&mut self.store)
    }

    /// Flips completion on a task.
    pub fn toggle_task(&mut self, id: TaskId) {
        self.store.toggle_task(id);
    }

    /// Removes a task.
    pub fn delete_task(&mut self, id: TaskId) {
        self.store.delete_task(id);
    }

    /// Library submit: draft form into a new book.
    pub fn submit_new_book(&mut self) -> BookId {
        self.library.submit(&mut self.store)
    }

    /// Detail-screen submit: benefit drafts onto the viewed book.
    pub fn submit_benefit(&mut self) {
        let Some(id) = self.router.selected_book_id() else {
            return;
        };
        self.book_details.submit_benefit(&mut self.store, id);
    }

    /// Removes the viewed book's benefit at `index`.
    pub fn delete_benefit_at(&mut self, index: usize) {
        let Some(id) = self.router.selected_book_id() else {
            return;
        };
        self.book_details
            .delete_benefit_at(&mut self.store, id, index);
    }

    /// Moves the viewed book's progress slider.
    pub fn set_progress(&mut self, pages: u32) {
        let Some(id) = self.router.selected_book_id() else {
            return;
        };
        self.book_details.set_progress(&mut self.store, id, pages);
    }

    /// Flips the viewed book's reminder.
    pub fn toggle_reminder(&mut self) {
        let Some(id) = self.router.selected_book_id() else {
            return;
        };
        self.book_details.toggle_reminder(&mut self.store, id);
    }

    /// Edits the viewed book's reminder time. Returns whether the value
    /// passed the `HH:mm` boundary check.
    pub fn set_reminder_time(&mut self, time: &str) -> bool {
        let Some(id) = self.router.selected_book_id() else {
            return false;
        };
        self.book_details
            .set_reminder_time(&mut self.store, id, time)
    }

    pub fn dashboard_view(&self) -> DashboardViewModel {
        self.dashboard.view(self.store.books(), self.store.tasks())
    }

    pub fn planning_view(&self) -> PlanningViewModel {
        self.planning.view(self.store.tasks())
    }

    pub fn library_view(&self) -> LibraryViewModel {
        self.library.view(self.store.books())
    }

    /// `None` when nothing is selected or the book is gone.
    pub fn book_details_view(&self) -> Option<BookDetailsViewModel> {
        self.book_details
            .view(self.store.books(), self.router.selected_book_id())
    }

    pub fn insights_view(&self) -> InsightsViewModel {
        self.insights.view(self.store.books())
    }

    /// Resets the screen being left; entering the same screen keeps state.
    fn leave_screen(&mut self, next: Screen) {
        if self.router.screen() == next {
            return;
        }
        match self.router.screen() {
            Screen::Planning => self.planning.reset(),
            Screen::Library => self.library.reset(),
            Screen::BookDetails => self.book_details.reset(),
            Screen::Dashboard | Screen::Insights => {}
        }
    }
}
