//! Task store: sole owner and mutator of the task collection.
//!
//! # Responsibility
//! - Apply create/edit/toggle/delete operations against the collection.
//! - Project the collection into a `TaskView` (filtered list + counts).
//!
//! # Invariants
//! - Task ids are unique and strictly increasing for the process lifetime.
//! - New tasks are prepended; the collection stays newest-first.
//! - Unknown ids are no-ops, not errors (idempotent-delete semantics).
//! - Every mutating operation reports whether anything changed, so the
//!   caller can decide when to persist.

use crate::model::task::{CategoryFilter, Priority, Task, TaskId, TaskValidationError};
use chrono::Utc;
use std::collections::VecDeque;

/// Read-only projection of the collection under the active filter.
///
/// Counts always cover the entire collection, regardless of filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Filter the view was computed under.
    pub filter: CategoryFilter,
    /// Tasks matching the filter, in collection order.
    pub visible_tasks: Vec<Task>,
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskView {
    /// Empty-state copy for the active filter, or `None` when there is
    /// something to show.
    pub fn empty_state_message(&self) -> Option<&'static str> {
        if !self.visible_tasks.is_empty() {
            return None;
        }
        Some(match self.filter {
            CategoryFilter::Completed => "Complete some tasks to see them here!",
            CategoryFilter::Pending => "All tasks are completed!",
            CategoryFilter::All => "Add your first task using the input above!",
        })
    }
}

/// Owner of the ordered task collection and the active filter.
///
/// The store is pure state: it never touches storage. Pair it with a
/// `StorageAdapter` through `TaskService` for persistence.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: VecDeque<Task>,
    filter: CategoryFilter,
    last_id: TaskId,
}

impl TaskStore {
    /// Creates an empty store with the default `All` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from previously persisted tasks, preserving order.
    ///
    /// The id generator resumes above the highest loaded id so restored
    /// collections never collide with new tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        Self {
            tasks: tasks.into(),
            filter: CategoryFilter::default(),
            last_id,
        }
    }

    /// Creates a task and prepends it to the collection.
    ///
    /// Returns a clone of the stored task.
    ///
    /// # Errors
    /// [`TaskValidationError::EmptyText`] when `text` trims to nothing; the
    /// collection is left unchanged.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
    ) -> Result<Task, TaskValidationError> {
        if text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }

        let task = Task::new(self.next_id(), text, priority)?;
        self.tasks.push_front(task.clone());
        Ok(task)
    }

    /// Removes the task with `id`. Returns whether a task was removed.
    ///
    /// Absent ids are a no-op, so repeated deletes are idempotent.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Flips the completion flag on the matching task.
    ///
    /// Returns whether a task was found and toggled.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Applies an edit of text and/or priority to the matching task.
    ///
    /// Field rules are independent:
    /// - `new_text` replaces the text only when it trims non-empty.
    /// - `new_priority` replaces the priority only when it parses
    ///   (case-insensitively) as one of low/medium/high; anything else is
    ///   ignored without error.
    ///
    /// Returns true only when a field actually changed value.
    pub fn edit_task(&mut self, id: TaskId, new_text: &str, new_priority: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };

        let mut changed = false;

        let trimmed = new_text.trim();
        if !trimmed.is_empty() && trimmed != task.text {
            task.text = trimmed.to_string();
            changed = true;
        }

        if let Some(priority) = Priority::parse(new_priority) {
            if priority != task.priority {
                task.priority = priority;
                changed = true;
            }
        }

        changed
    }

    /// Removes every completed task. Returns the number removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    /// Switches the active filter. Any filter is reachable from any other.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Computes the derived view: filtered tasks plus whole-collection
    /// counts. `total == pending + completed` in every reachable state.
    pub fn view(&self) -> TaskView {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        let total = self.tasks.len();

        let visible_tasks = self
            .tasks
            .iter()
            .filter(|task| match self.filter {
                CategoryFilter::All => true,
                CategoryFilter::Pending => !task.completed,
                CategoryFilter::Completed => task.completed,
            })
            .cloned()
            .collect();

        TaskView {
            filter: self.filter,
            visible_tasks,
            total,
            pending: total - completed,
            completed,
        }
    }

    /// Full collection snapshot in order, for persistence.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Issues the next task id: epoch milliseconds, bumped past the last
    /// issued (or loaded) id so rapid adds within one millisecond stay
    /// unique.
    fn next_id(&mut self) -> TaskId {
        let candidate = Utc::now().timestamp_millis();
        self.last_id = candidate.max(self.last_id + 1);
        self.last_id
    }
}
