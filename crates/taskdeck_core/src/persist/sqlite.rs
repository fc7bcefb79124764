//! SQLite-backed storage adapter.
//!
//! # Responsibility
//! - Persist the serialized task aggregate in the `kv_store` table.
//!
//! # Invariants
//! - Connections must be opened through `db::open_db` / `open_db_in_memory`
//!   so the schema exists before first use; `try_new` rejects anything else.

use crate::db::migrations::latest_version;
use crate::model::task::Task;
use crate::persist::{decode_tasks, StorageAdapter, StoreError, StoreResult, STORAGE_KEY};
use rusqlite::{params, Connection, OptionalExtension};

/// Storage adapter writing the aggregate to a SQLite key-value table.
pub struct SqliteStorageAdapter<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorageAdapter<'conn> {
    /// Wraps a migrated connection, verifying the schema is usable.
    ///
    /// # Errors
    /// - [`StoreError::UninitializedConnection`] when `PRAGMA user_version`
    ///   does not match this binary's schema.
    /// - [`StoreError::MissingRequiredTable`] when `kv_store` is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected = latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual != expected {
            return Err(StoreError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        let table_present: bool = conn.query_row(
            "SELECT EXISTS (
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if !table_present {
            return Err(StoreError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }
}

impl StorageAdapter for SqliteStorageAdapter<'_> {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw.as_deref().map(decode_tasks).unwrap_or_default())
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let payload = serde_json::to_string(tasks)?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORAGE_KEY, payload],
        )?;

        Ok(())
    }
}
