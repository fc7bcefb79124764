//! In-memory storage adapter.
//!
//! Holds the serialized payload in a single slot, the same one-key shape
//! the durable adapters use. Mainly for tests and session-only callers; it
//! round-trips through JSON so behavior matches the SQLite adapter exactly.

use crate::model::task::Task;
use crate::persist::{decode_tasks, StorageAdapter, StoreResult};
use std::cell::RefCell;

/// Single-slot adapter keeping the serialized aggregate in memory.
#[derive(Debug, Default)]
pub struct MemoryStorageAdapter {
    slot: RefCell<Option<String>>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the slot with a raw payload, bypassing serialization.
    ///
    /// Lets tests exercise the corrupt-data path.
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(payload.into())),
        }
    }

    /// Raw stored payload, if any. Test hook.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StorageAdapter for MemoryStorageAdapter {
    fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(self
            .slot
            .borrow()
            .as_deref()
            .map(decode_tasks)
            .unwrap_or_default())
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload = serde_json::to_string(tasks)?;
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}
