//! Task screen session state.
//!
//! # Responsibility
//! - Keep the per-session UI choices of the task screen: sort mode, the
//!   check/uncheck-all switch and the pending input draft.
//! - Translate screen gestures into `TaskStore` mutations.
//!
//! # Invariants
//! - Session state is never persisted; only tasks are.
//! - The check/uncheck-all switch flips on every press, whatever the
//!   current completion state of the list.

use crate::model::task::{SortMode, Task, TaskId};
use crate::storage::{KvStore, StorageResult};
use crate::store::TaskStore;

/// One open task screen.
pub struct TaskScreen<K: KvStore> {
    store: TaskStore<K>,
    sort_mode: SortMode,
    all_checked: bool,
    draft: String,
}

impl<K: KvStore> TaskScreen<K> {
    pub fn new(store: TaskStore<K>) -> Self {
        Self {
            store,
            sort_mode: SortMode::default(),
            all_checked: false,
            draft: String::new(),
        }
    }

    pub fn store(&self) -> &TaskStore<K> {
        &self.store
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Tasks in display order for the current sort mode.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.store.sorted(self.sort_mode)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Adds the draft as a new task, then clears the draft.
    ///
    /// A blank draft adds nothing but is still cleared. On a write failure
    /// the draft is kept and no task is added, so submitting again retries.
    pub fn submit_draft(&mut self) -> StorageResult<Option<TaskId>> {
        let created = self.store.add(&self.draft)?;
        self.draft.clear();
        Ok(created)
    }

    /// State the next check/uncheck-all press will apply.
    pub fn all_checked(&self) -> bool {
        self.all_checked
    }

    /// Sets every task to the opposite of the last check-all state.
    pub fn check_uncheck_all(&mut self) -> StorageResult<()> {
        let target = !self.all_checked;
        self.store.toggle_all(target)?;
        self.all_checked = target;
        Ok(())
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> StorageResult<()> {
        self.store.toggle_completed(id)
    }

    pub fn edit(&mut self, id: TaskId, new_text: &str) -> StorageResult<()> {
        self.store.edit(id, new_text)
    }

    pub fn clear_completed(&mut self) -> StorageResult<()> {
        self.store.clear_completed()
    }
}
