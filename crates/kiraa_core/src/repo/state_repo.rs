//! State snapshot persistence contracts and the JSON slot implementation.
//!
//! # Responsibility
//! - Provide the load/save port the tracker store persists through.
//! - Keep slot-file naming, encoding and atomic-replace details here.
//!
//! # Invariants
//! - Slot names are fixed: `ka_books` and `ka_tasks`, one JSON document each.
//! - `load` is total: per-slot fallback to empty on absent/corrupt data.
//! - `save` writes to a temp file first and renames over the slot, so a
//!   crashed write never leaves a truncated document behind.

use crate::model::book::Book;
use crate::model::task::Task;
use log::{debug, error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Slot holding the ordered Book records.
pub const BOOKS_SLOT: &str = "ka_books";
/// Slot holding the ordered Task records.
pub const TASKS_SLOT: &str = "ka_tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for slot construction and writes.
#[derive(Debug)]
pub enum RepoError {
    /// The configured state directory is unusable.
    InvalidStateDir(String),
    /// Filesystem failure while writing a slot.
    Io(std::io::Error),
    /// A collection could not be encoded to JSON.
    Encode(serde_json::Error),
    /// Simulated failure from the in-memory test double.
    Unavailable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStateDir(message) => write!(f, "invalid state directory: {message}"),
            Self::Io(err) => write!(f, "slot io failure: {err}"),
            Self::Encode(err) => write!(f, "slot encode failure: {err}"),
            Self::Unavailable(details) => write!(f, "state repository unavailable: {details}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// In-memory image of both persisted collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    pub books: Vec<Book>,
    pub tasks: Vec<Task>,
}

/// Port the tracker store persists through.
///
/// Implementations must keep `load` total: missing or unreadable state
/// degrades to empty collections, never to an error, so a first run and a
/// corrupted slot behave the same way from the store's point of view.
pub trait StateRepository {
    /// Reads both slots into a snapshot.
    fn load(&self) -> StateSnapshot;
    /// Overwrites both slots with the full current collections.
    fn save(&self, books: &[Book], tasks: &[Task]) -> RepoResult<()>;
}

impl<R: StateRepository + ?Sized> StateRepository for &R {
    fn load(&self) -> StateSnapshot {
        (**self).load()
    }

    fn save(&self, books: &[Book], tasks: &[Task]) -> RepoResult<()> {
        (**self).save(books, tasks)
    }
}

/// Slot-file repository storing each collection as one JSON document.
#[derive(Debug)]
pub struct JsonStateRepository {
    state_dir: PathBuf,
}

impl JsonStateRepository {
    /// Creates a repository rooted at `state_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    /// - Returns an error when `state_dir` is empty or not absolute.
    /// - Returns an error when the directory cannot be created.
    pub fn try_new(state_dir: impl AsRef<Path>) -> RepoResult<Self> {
        let state_dir = resolve_state_dir(state_dir.as_ref())?;
        std::fs::create_dir_all(&state_dir)?;
        info!(
            "event=state_dir_init module=repo status=ok dir={}",
            state_dir.display()
        );
        Ok(Self { state_dir })
    }

    /// Absolute path of one slot document.
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.state_dir.join(format!("{slot}.json"))
    }

    fn load_slot<T: DeserializeOwned + Default>(&self, slot: &str) -> T {
        let started_at = Instant::now();
        let path = self.slot_path(slot);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("event=slot_load module=repo status=empty slot={slot} reason=absent");
                return T::default();
            }
            Err(err) => {
                error!(
                    "event=slot_load module=repo status=fallback slot={slot} error_code=slot_unreadable error={err}"
                );
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(
                    "event=slot_load module=repo status=ok slot={slot} bytes={} duration_ms={}",
                    raw.len(),
                    started_at.elapsed().as_millis()
                );
                value
            }
            Err(err) => {
                error!(
                    "event=slot_load module=repo status=fallback slot={slot} error_code=slot_malformed error={err}"
                );
                T::default()
            }
        }
    }

    fn save_slot<T: Serialize>(&self, slot: &str, value: &T) -> RepoResult<()> {
        let started_at = Instant::now();
        let encoded = serde_json::to_string_pretty(value)?;
        let path = self.slot_path(slot);
        let staging = self.state_dir.join(format!("{slot}.json.tmp"));

        std::fs::write(&staging, &encoded)?;
        std::fs::rename(&staging, &path)?;

        debug!(
            "event=slot_save module=repo status=ok slot={slot} bytes={} duration_ms={}",
            encoded.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

impl StateRepository for JsonStateRepository {
    fn load(&self) -> StateSnapshot {
        StateSnapshot {
            books: self.load_slot::<Vec<Book>>(BOOKS_SLOT),
            tasks: self.load_slot::<Vec<Task>>(TASKS_SLOT),
        }
    }

    fn save(&self, books: &[Book], tasks: &[Task]) -> RepoResult<()> {
        self.save_slot(BOOKS_SLOT, &books)?;
        self.save_slot(TASKS_SLOT, &tasks)?;
        Ok(())
    }
}

/// In-memory repository for tests and ephemeral sessions.
///
/// Tracks save calls so callers can assert the persist-on-every-mutation
/// contract, and can be switched into a failing mode to exercise the store's
/// fire-and-forget error handling.
#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    state: RefCell<StateSnapshot>,
    save_count: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStateRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with a snapshot.
    pub fn with_snapshot(snapshot: StateSnapshot) -> Self {
        Self {
            state: RefCell::new(snapshot),
            save_count: Cell::new(0),
            fail_saves: Cell::new(false),
        }
    }

    /// Copy of the last saved snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.borrow().clone()
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Makes subsequent `save` calls fail when set.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl StateRepository for MemoryStateRepository {
    fn load(&self) -> StateSnapshot {
        self.state.borrow().clone()
    }

    fn save(&self, books: &[Book], tasks: &[Task]) -> RepoResult<()> {
        if self.fail_saves.get() {
            return Err(RepoError::Unavailable("failing mode enabled"));
        }
        *self.state.borrow_mut() = StateSnapshot {
            books: books.to_vec(),
            tasks: tasks.to_vec(),
        };
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}

fn resolve_state_dir(state_dir: &Path) -> RepoResult<PathBuf> {
    if state_dir.as_os_str().is_empty() {
        return Err(RepoError::InvalidStateDir(
            "state_dir cannot be empty".to_string(),
        ));
    }
    if !state_dir.is_absolute() {
        return Err(RepoError::InvalidStateDir(format!(
            "state_dir must be an absolute path, got `{}`",
            state_dir.display()
        )));
    }
    Ok(state_dir.to_path_buf())
}
