use super::{KvStore, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory key-value backend.
///
/// Uses `RefCell` because the task store is single-threaded; this keeps the
/// `KvStore` methods on `&self` like the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `put`/`delete` fail, simulating a full or
    /// unavailable device store.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable(
                "simulated write failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
