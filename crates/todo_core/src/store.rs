//! Live task list bound to its persisted record.
//!
//! # Responsibility
//! - Hold the in-memory task collection the UI renders from.
//! - Run every mutation through one apply-then-persist path.
//!
//! # Invariants
//! - The persisted record is read exactly once, in `TaskStore::open`.
//! - A mutation that changes the collection is written before the call
//!   returns; nothing is buffered.
//! - In-memory order is storage (insertion) order; `sorted` only projects.
//!
//! # Failure model
//! - A failed write is returned to the caller and the mutation is dropped:
//!   the in-memory collection keeps matching the last successful write, so
//!   retrying the same gesture performs the write again.

use crate::model::task::{SortMode, Task, TaskId};
use crate::ops;
use crate::storage::{KvStore, StorageResult, TaskStorage};
use log::{debug, info, warn};

/// Single-writer task store.
pub struct TaskStore<K: KvStore> {
    tasks: Vec<Task>,
    storage: TaskStorage<K>,
}

impl<K: KvStore> TaskStore<K> {
    /// Loads the persisted collection and binds it to `storage`.
    pub fn open(storage: TaskStorage<K>) -> Self {
        let tasks = storage.load();
        info!(
            "event=store_open module=store status=ok count={}",
            tasks.len()
        );
        Self { tasks, storage }
    }

    /// Tasks in storage order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks, completed ones included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Display projection; storage order is left untouched.
    pub fn sorted(&self, mode: SortMode) -> Vec<Task> {
        ops::sort_tasks(&self.tasks, mode)
    }

    /// Adds a task and returns its ID, or `None` when `text` is blank.
    pub fn add(&mut self, text: &str) -> StorageResult<Option<TaskId>> {
        let before = self.tasks.len();
        self.apply_and_persist("task_add", |tasks| ops::add_task(tasks, text))?;
        if self.tasks.len() > before {
            Ok(self.tasks.last().map(|task| task.id))
        } else {
            Ok(None)
        }
    }

    pub fn edit(&mut self, id: TaskId, new_text: &str) -> StorageResult<()> {
        self.apply_and_persist("task_edit", |tasks| ops::edit_task(tasks, id, new_text))
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> StorageResult<()> {
        self.apply_and_persist("task_toggle", |tasks| ops::toggle_completed(tasks, id))
    }

    pub fn toggle_all(&mut self, target: bool) -> StorageResult<()> {
        self.apply_and_persist("task_toggle_all", |tasks| ops::toggle_all(tasks, target))
    }

    pub fn clear_completed(&mut self) -> StorageResult<()> {
        self.apply_and_persist("task_clear_completed", ops::clear_completed)
    }

    /// Runs a pure operation, persists its result and then installs it.
    ///
    /// A result equal to the current collection is a no-op and skips the
    /// write. On a failed write the in-memory collection is left as it was,
    /// so memory never holds a change that storage has not accepted.
    pub fn apply_and_persist<F>(&mut self, event: &'static str, op: F) -> StorageResult<()>
    where
        F: FnOnce(&[Task]) -> Vec<Task>,
    {
        let next = op(&self.tasks);
        if next == self.tasks {
            debug!(
                "event={event} module=store status=noop count={}",
                self.tasks.len()
            );
            return Ok(());
        }

        if let Err(err) = self.storage.save(&next) {
            warn!(
                "event={event} module=store status=error error_code=persist_failed count={} error={err}",
                next.len()
            );
            return Err(err);
        }

        debug!("event={event} module=store status=ok count={}", next.len());
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::storage::{MemoryKvStore, TaskStorage};

    #[test]
    fn add_returns_created_id_and_none_for_blank() {
        let mut store = TaskStore::open(TaskStorage::new(MemoryKvStore::new()));
        let id = store.add("Buy milk").unwrap().expect("task should be created");
        assert_eq!(store.get(id).map(|task| task.text.as_str()), Some("Buy milk"));
        assert_eq!(store.add("   ").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn noop_mutation_does_not_write() {
        let kv = MemoryKvStore::new();
        let mut store = TaskStore::open(TaskStorage::new(&kv));
        kv.set_fail_writes(true);

        // Nothing changes, so the failing backend is never reached.
        store.add("").unwrap();
        store.clear_completed().unwrap();
        store.toggle_all(true).unwrap();
        assert!(store.is_empty());
    }
}
