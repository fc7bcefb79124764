//! Task list session service.
//!
//! # Responsibility
//! - Load the collection at startup and seed first-run sample data.
//! - Apply store operations and mirror every change to storage.
//!
//! # Invariants
//! - Storage is written synchronously after each changing operation;
//!   no-op calls (unknown id, unchanged edit) skip the write.
//! - Log events carry metadata only, never user-entered task text.

use crate::model::task::{CategoryFilter, Priority, Task, TaskId, TaskValidationError};
use crate::persist::{StorageAdapter, StoreError};
use crate::store::task_store::{TaskStore, TaskView};
use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by service operations.
///
/// Validation is reported to the caller and never retried; storage errors
/// are propagated unchanged (the local store is expected to be available).
#[derive(Debug)]
pub enum ServiceError {
    Validation(TaskValidationError),
    Storage(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// First-run sample tasks shown to new users.
const SAMPLE_TASKS: &[(&str, Priority, bool)] = &[
    ("Complete Web Development Assignment", Priority::High, false),
    ("Study for Calculus Exam", Priority::High, false),
    ("Buy engineering drawing tools", Priority::Medium, true),
    ("Read Physics chapter 5", Priority::Low, false),
];

/// Session facade binding a [`TaskStore`] to a [`StorageAdapter`].
pub struct TaskService<S: StorageAdapter> {
    store: TaskStore,
    adapter: S,
}

impl<S: StorageAdapter> TaskService<S> {
    /// Loads the persisted collection and starts a session over it.
    ///
    /// An empty load (first run, or a wiped/corrupt payload) is seeded with
    /// the sample tasks and persisted immediately, so a returning session
    /// always finds a stored aggregate.
    pub fn open(adapter: S) -> ServiceResult<Self> {
        let loaded = adapter.load()?;

        let store = if loaded.is_empty() {
            let store = TaskStore::from_tasks(sample_tasks()?);
            adapter.save(&store.snapshot())?;
            info!(
                "event=store_seeded module=service status=ok count={}",
                SAMPLE_TASKS.len()
            );
            store
        } else {
            info!(
                "event=store_loaded module=service status=ok count={}",
                loaded.len()
            );
            TaskStore::from_tasks(loaded)
        };

        Ok(Self { store, adapter })
    }

    /// Creates a task and persists the collection.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for empty/whitespace-only text; the
    ///   collection and storage are left untouched.
    /// - `ServiceError::Storage` when the write fails.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> ServiceResult<Task> {
        let task = self.store.add_task(text, priority)?;
        self.persist()?;
        info!(
            "event=task_add module=service status=ok id={} priority={}",
            task.id,
            task.priority.as_str()
        );
        Ok(task)
    }

    /// Deletes a task by id. Unknown ids are a no-op and skip the write.
    ///
    /// Callers wanting a confirmation step perform it before calling; the
    /// service never blocks on user interaction.
    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<bool> {
        let changed = self.store.delete_task(id);
        if changed {
            self.persist()?;
            info!("event=task_delete module=service status=ok id={id}");
        }
        Ok(changed)
    }

    /// Flips completion on a task. Unknown ids are a no-op.
    pub fn toggle_completion(&mut self, id: TaskId) -> ServiceResult<bool> {
        let changed = self.store.toggle_completion(id);
        if changed {
            self.persist()?;
            info!("event=task_toggle module=service status=ok id={id}");
        }
        Ok(changed)
    }

    /// Edits text/priority on a task; persists only when a field changed.
    ///
    /// Empty text keeps the prior text, unrecognized priority keeps the
    /// prior priority; neither is an error here.
    pub fn edit_task(
        &mut self,
        id: TaskId,
        new_text: &str,
        new_priority: &str,
    ) -> ServiceResult<bool> {
        let changed = self.store.edit_task(id, new_text, new_priority);
        if changed {
            self.persist()?;
            info!("event=task_edit module=service status=ok id={id}");
        }
        Ok(changed)
    }

    /// Removes all completed tasks; persists when anything was removed.
    pub fn clear_completed(&mut self) -> ServiceResult<usize> {
        let removed = self.store.clear_completed();
        if removed > 0 {
            self.persist()?;
            info!("event=tasks_cleared module=service status=ok removed={removed}");
        }
        Ok(removed)
    }

    /// Switches the active view filter. Filter state is session-only and
    /// never persisted.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.store.set_filter(filter);
    }

    /// Parses and applies a filter name from raw UI input.
    ///
    /// # Errors
    /// `ServiceError::Validation` for names outside all|pending|completed.
    pub fn set_filter_str(&mut self, category: &str) -> ServiceResult<()> {
        let filter = CategoryFilter::parse(category)?;
        self.store.set_filter(filter);
        Ok(())
    }

    /// Current derived view: filtered tasks plus whole-collection counts.
    pub fn view(&self) -> TaskView {
        self.store.view()
    }

    fn persist(&self) -> ServiceResult<()> {
        self.adapter.save(&self.store.snapshot())?;
        Ok(())
    }
}

fn sample_tasks() -> Result<Vec<Task>, TaskValidationError> {
    // Current epoch millis plus the seed index keeps the set unique and
    // ordered.
    let base = Utc::now().timestamp_millis();

    SAMPLE_TASKS
        .iter()
        .enumerate()
        .map(|(offset, (text, priority, completed))| {
            let mut task = Task::new(base + offset as i64, *text, *priority)?;
            task.completed = *completed;
            Ok(task)
        })
        .collect()
}
