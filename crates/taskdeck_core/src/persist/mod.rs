//! Storage adapter contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the persisted task aggregate.
//! - Keep serialization and SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The whole collection is persisted as one JSON value under one fixed
//!   key; `save` overwrites, never merges.
//! - Corrupt stored payloads load as an empty collection (logged), never as
//!   a hard failure.

use crate::db::DbError;
use crate::model::task::Task;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

/// Fixed key the serialized task collection lives under.
pub const STORAGE_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures surfaced to the service layer.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Connection has no applied schema (fresh or foreign database file).
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Load/save contract for the persisted aggregate.
///
/// `load` returns an empty collection when nothing was stored yet, so
/// first-run and returning sessions share one code path.
pub trait StorageAdapter {
    fn load(&self) -> StoreResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

impl<A: StorageAdapter + ?Sized> StorageAdapter for &A {
    fn load(&self) -> StoreResult<Vec<Task>> {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        (**self).save(tasks)
    }
}

/// Decodes a stored payload, treating undecodable data as absent.
///
/// A payload that fails to parse is unrecoverable from the store's point of
/// view; starting over with an empty collection is the only safe recovery.
pub(crate) fn decode_tasks(raw: &str) -> Vec<Task> {
    match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=store_load module=persist status=corrupt error={err}");
            Vec::new()
        }
    }
}
