use kiraa_core::{
    Book, BookStatus, DEFAULT_REMINDER_TIME, MemoryStateRepository, PlanType, StateSnapshot,
    TrackerService,
};

#[test]
fn open_loads_the_seeded_snapshot() {
    let repo = MemoryStateRepository::with_snapshot(StateSnapshot {
        books: vec![Book::new("Deep Work", "Cal Newport", 304)],
        tasks: Vec::new(),
    });
    let store = TrackerService::open(&repo);

    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].title, "Deep Work");
    assert!(store.tasks().is_empty());
}

#[test]
fn add_book_prepends_and_persists() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    store.add_book("First", "A", 100);
    let second = store.add_book("Second", "B", 200);

    assert_eq!(store.books().len(), 2);
    assert_eq!(store.books()[0].id, second.id);
    assert_eq!(repo.save_count(), 2);
    assert_eq!(repo.snapshot().books, store.books().to_vec());
}

#[test]
fn added_book_is_resolvable_by_id() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    let book = store.add_book("Deep Work", "Cal Newport", 304);
    assert_eq!(store.book(book.id), Some(&book));
}

#[test]
fn update_book_replaces_in_place_keeping_position() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    store.add_book("Third", "C", 3);
    let middle = store.add_book("Second", "B", 2);
    store.add_book("First", "A", 1);

    let mut renamed = middle.clone();
    renamed.title = "Second, revised".to_string();
    store.update_book(renamed);

    assert_eq!(store.books()[1].id, middle.id);
    assert_eq!(store.books()[1].title, "Second, revised");
}

#[test]
fn update_book_with_unknown_id_is_a_silent_noop() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    store.add_book("Deep Work", "Cal Newport", 304);

    let before = store.books().to_vec();
    let saves_before = repo.save_count();
    store.update_book(Book::new("Ghost", "Nobody", 1));

    assert_eq!(store.books().to_vec(), before);
    assert_eq!(repo.save_count(), saves_before + 1);
}

#[test]
fn delete_book_removes_only_the_target() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    let keep = store.add_book("Keep", "A", 10);
    let gone = store.add_book("Drop", "B", 20);

    store.delete_book(gone.id);

    assert_eq!(store.books().len(), 1);
    assert_eq!(store.books()[0].id, keep.id);
    assert_eq!(store.book(gone.id), None);
}

#[test]
fn update_progress_applies_the_status_transition() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    let book = store.add_book("Deep Work", "Cal Newport", 300);

    store.update_progress(book.id, 120);
    let partial = store.book(book.id).unwrap();
    assert_eq!(partial.pages_read, 120);
    assert_eq!(partial.status, BookStatus::Reading);
    assert_eq!(partial.completed_at, None);

    store.update_progress(book.id, 300);
    let completed = store.book(book.id).unwrap();
    assert_eq!(completed.status, BookStatus::Completed);
    assert!(completed.completed_at.is_some());
}

#[test]
fn reminder_flow_defaults_then_preserves_the_time() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    let book = store.add_book("Deep Work", "Cal Newport", 300);

    store.toggle_reminder(book.id);
    let enabled = store.book(book.id).unwrap();
    assert_eq!(enabled.reminder_enabled, Some(true));
    assert_eq!(enabled.reminder_time.as_deref(), Some(DEFAULT_REMINDER_TIME));

    store.set_reminder_time(book.id, "07:15");
    store.toggle_reminder(book.id);
    let disabled = store.book(book.id).unwrap();
    assert_eq!(disabled.reminder_enabled, Some(false));
    assert_eq!(disabled.reminder_time.as_deref(), Some("07:15"));
}

#[test]
fn add_task_prepends_newest_first() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    store.add_task("older", PlanType::Daily);
    let newer = store.add_task("newer", PlanType::Weekly);

    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.tasks()[0].id, newer.id);
}

#[test]
fn toggling_a_task_twice_restores_its_original_state() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    store.add_task("first", PlanType::Daily);
    let task = store.add_task("second", PlanType::Daily);

    store.toggle_task(task.id);
    assert!(store.tasks()[0].is_completed);
    assert_eq!(store.tasks()[0].id, task.id);

    store.toggle_task(task.id);
    assert!(!store.tasks()[0].is_completed);
    assert_eq!(store.tasks().to_vec(), vec![task, store.tasks()[1].clone()]);
}

#[test]
fn delete_task_removes_only_the_target() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);

    let keep = store.add_task("keep", PlanType::Daily);
    let gone = store.add_task("drop", PlanType::Daily);

    store.delete_task(gone.id);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, keep.id);
}

#[test]
fn add_benefit_prepends_to_the_owning_book() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    let book = store.add_book("Deep Work", "Cal Newport", 300);

    store.add_benefit(book.id, "older note", None);
    store.add_benefit(book.id, "newer note", Some("12".to_string()));

    let benefits = &store.book(book.id).unwrap().benefits;
    assert_eq!(benefits.len(), 2);
    assert_eq!(benefits[0].content, "newer note");
    assert_eq!(benefits[0].page_number.as_deref(), Some("12"));
    assert_eq!(benefits[1].content, "older note");
}

#[test]
fn reorder_benefits_replaces_the_whole_list() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    let book = store.add_book("Deep Work", "Cal Newport", 300);

    store.add_benefit(book.id, "a", None);
    store.add_benefit(book.id, "b", None);

    let mut reversed = store.book(book.id).unwrap().benefits.clone();
    reversed.reverse();
    store.reorder_benefits(book.id, reversed.clone());

    assert_eq!(store.book(book.id).unwrap().benefits, reversed);
}

#[test]
fn every_mutation_persists_even_when_it_changes_nothing() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    let ghost = Book::new("Ghost", "Nobody", 1);

    let baseline = repo.save_count();
    store.delete_book(ghost.id);
    store.update_progress(ghost.id, 10);
    store.toggle_reminder(ghost.id);
    store.set_reminder_time(ghost.id, "09:00");
    store.toggle_task(ghost.id);
    store.delete_task(ghost.id);
    store.add_benefit(ghost.id, "nowhere", None);
    store.reorder_benefits(ghost.id, Vec::new());

    assert_eq!(repo.save_count(), baseline + 8);
}

#[test]
fn failed_saves_are_swallowed_and_caught_up_by_the_next_save() {
    let repo = MemoryStateRepository::new();
    let mut store = TrackerService::open(&repo);
    store.add_book("Persisted", "A", 100);

    repo.set_fail_saves(true);
    let unsaved = store.add_book("Unsaved", "B", 200);

    assert_eq!(store.books().len(), 2);
    assert_eq!(repo.save_count(), 1);
    assert_eq!(repo.snapshot().books.len(), 1);

    repo.set_fail_saves(false);
    store.add_task("recovery", PlanType::Daily);

    let snapshot = repo.snapshot();
    assert_eq!(snapshot.books.len(), 2);
    assert!(snapshot.books.iter().any(|book| book.id == unsaved.id));
    assert_eq!(snapshot.tasks.len(), 1);
}
