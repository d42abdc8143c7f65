//! Local persistence for the task list.
//!
//! # Responsibility
//! - Define the key-value contract the task list is persisted through.
//! - Read and write the whole task collection as one serialized record.
//!
//! # Invariants
//! - The collection lives under a single key, [`TODOS_KEY`].
//! - Every save rewrites the entire collection; there are no deltas.
//! - Absent, empty and undecodable records all load as "no tasks".

use crate::db::DbError;
use crate::model::task::Task;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Storage key holding the serialized task collection.
pub const TODOS_KEY: &str = "todos";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Backend refused the write (quota, unavailable, ...).
    Unavailable(String),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
            Self::Encode(err) => write!(f, "failed to encode tasks: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// String key-value store backing the task list.
///
/// `put` must replace the previous value atomically: readers observe either
/// the old value or the new one, never a partial write.
pub trait KvStore {
    /// Returns `Ok(None)` when the key does not exist.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Succeeds even if the key does not exist.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

impl<K: KvStore + ?Sized> KvStore for &K {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

/// Persistence adapter reading and writing the full task collection.
pub struct TaskStorage<K: KvStore> {
    kv: K,
}

impl<K: KvStore> TaskStorage<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Reads the stored collection in insertion order.
    ///
    /// Never fails: backend and decode errors are logged and degrade to an
    /// empty collection.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.kv.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=tasks_load module=storage status=ok count=0 record=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=tasks_load module=storage status=fallback error_code=read_failed error={err}");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            debug!("event=tasks_load module=storage status=ok count=0 record=empty");
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => {
                info!(
                    "event=tasks_load module=storage status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=storage status=fallback error_code=decode_failed bytes={} error={err}",
                    raw.len()
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the stored record with the whole collection.
    ///
    /// # Errors
    /// - Returns `StorageError::Encode` when serialization fails.
    /// - Returns backend errors from the underlying `put` unchanged.
    pub fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let raw = serde_json::to_string(tasks)?;
        if let Err(err) = self.kv.put(TODOS_KEY, &raw) {
            warn!(
                "event=tasks_save module=storage status=error count={} error={err}",
                tasks.len()
            );
            return Err(err);
        }
        debug!(
            "event=tasks_save module=storage status=ok count={} bytes={}",
            tasks.len(),
            raw.len()
        );
        Ok(())
    }

    /// Removes the stored record entirely.
    pub fn clear(&self) -> StorageResult<()> {
        self.kv.delete(TODOS_KEY)
    }

    /// Borrows the underlying key-value backend.
    pub fn backend(&self) -> &K {
        &self.kv
    }
}
