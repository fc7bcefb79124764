use std::cell::Cell;
use taskdeck_core::{
    MemoryStorageAdapter, Priority, ServiceError, StorageAdapter, StoreResult, Task, TaskService,
    TaskValidationError,
};

/// Adapter wrapper counting writes, to verify no-op operations skip
/// persistence.
struct CountingAdapter {
    inner: MemoryStorageAdapter,
    saves: Cell<usize>,
}

impl CountingAdapter {
    fn new() -> Self {
        Self {
            inner: MemoryStorageAdapter::new(),
            saves: Cell::new(0),
        }
    }
}

impl StorageAdapter for CountingAdapter {
    fn load(&self) -> StoreResult<Vec<Task>> {
        self.inner.load()
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(tasks)
    }
}

#[test]
fn open_seeds_empty_storage_and_persists_the_seed() {
    let adapter = MemoryStorageAdapter::new();
    let service = TaskService::open(&adapter).unwrap();

    let view = service.view();
    assert_eq!(view.total, 4);
    assert_eq!(view.pending, 3);
    assert_eq!(view.completed, 1);

    // The seed must already be stored, not just in memory.
    let stored = adapter.load().unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[0].text, "Complete Web Development Assignment");
}

#[test]
fn open_does_not_reseed_existing_data() {
    let adapter = MemoryStorageAdapter::new();
    let only = Task::new(7, "already here", Priority::Low).unwrap();
    adapter.save(&[only.clone()]).unwrap();

    let service = TaskService::open(&adapter).unwrap();

    let view = service.view();
    assert_eq!(view.total, 1);
    assert_eq!(view.visible_tasks[0], only);
}

#[test]
fn reopening_a_session_sees_identical_tasks() {
    let adapter = MemoryStorageAdapter::new();
    let first = TaskService::open(&adapter).unwrap();
    let before = first.view();
    drop(first);

    let second = TaskService::open(&adapter).unwrap();
    assert_eq!(second.view().visible_tasks, before.visible_tasks);
}

#[test]
fn corrupt_payload_loads_as_empty_and_reseeds() {
    let adapter = MemoryStorageAdapter::with_raw("{not valid json");
    let service = TaskService::open(&adapter).unwrap();

    assert_eq!(service.view().total, 4);
    // The corrupt payload was replaced by a valid one.
    assert_eq!(adapter.load().unwrap().len(), 4);
}

#[test]
fn add_persists_immediately_and_prepends() {
    let adapter = MemoryStorageAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();

    let added = service.add_task("newest", Priority::High).unwrap();

    let stored = adapter.load().unwrap();
    assert_eq!(stored.len(), 5);
    assert_eq!(stored[0].id, added.id);
}

#[test]
fn validation_error_leaves_storage_untouched() {
    let adapter = MemoryStorageAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();
    let before = adapter.raw();

    let err = service.add_task("   ", Priority::Low).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(TaskValidationError::EmptyText)
    ));
    assert_eq!(adapter.raw(), before);
    assert_eq!(service.view().total, 4);
}

#[test]
fn noop_operations_skip_the_write() {
    let adapter = CountingAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();
    let after_seed = adapter.saves.get();

    assert!(!service.delete_task(999_999).unwrap());
    assert!(!service.toggle_completion(999_999).unwrap());
    assert!(!service.edit_task(999_999, "text", "high").unwrap());
    assert_eq!(adapter.saves.get(), after_seed);

    let target = service.view().visible_tasks[0].id;
    assert!(service.toggle_completion(target).unwrap());
    assert_eq!(adapter.saves.get(), after_seed + 1);
}

#[test]
fn toggle_and_clear_flow_through_to_storage() {
    let adapter = MemoryStorageAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();

    let target = service.view().visible_tasks[0].id;
    service.toggle_completion(target).unwrap();

    // Seed had one completed task; the toggle makes two.
    let removed = service.clear_completed().unwrap();
    assert_eq!(removed, 2);

    let stored = adapter.load().unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|task| !task.completed));
}

#[test]
fn edit_through_service_persists_changed_fields() {
    let adapter = MemoryStorageAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();
    let target = service.view().visible_tasks[0].id;

    assert!(service.edit_task(target, "rewritten", "low").unwrap());

    let stored = adapter.load().unwrap();
    assert_eq!(stored[0].text, "rewritten");
    assert_eq!(stored[0].priority, Priority::Low);
}

#[test]
fn set_filter_str_accepts_known_names_and_rejects_others() {
    let adapter = MemoryStorageAdapter::new();
    let mut service = TaskService::open(&adapter).unwrap();

    service.set_filter_str("Completed").unwrap();
    assert_eq!(service.view().visible_tasks.len(), 1);

    let err = service.set_filter_str("archived").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(TaskValidationError::UnknownCategory(_))
    ));
    // Failed parse leaves the active filter unchanged.
    assert_eq!(service.view().visible_tasks.len(), 1);
}
