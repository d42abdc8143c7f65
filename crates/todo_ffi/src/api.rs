//! FFI use-case API for the Flutter task screen.
//!
//! # Responsibility
//! - Expose task-list gestures (add, edit, toggle, toggle all, clear, list)
//!   to Dart via FRB.
//! - Flatten core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Calls are serialized: each one loads, mutates and persists the list
//!   before the next one starts.
//! - Every mutating call returns the list as persisted, in the requested
//!   display order.
//! - No screen session state lives here. The Dart screen owns the sort
//!   mode and the check/uncheck-all switch, and passes the switch's next
//!   target to `todo_toggle_all` on every press.

use log::error;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use todo_core::db::open_db;
use todo_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner,
    SortMode, SqliteKvStore, StorageResult, Task, TaskId, TaskStorage, TaskStore,
};

const DB_FILE_NAME: &str = "todo_store.sqlite3";
const DB_PATH_ENV: &str = "TODO_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Log level Dart should pass to `init_logging` when the user has not
/// chosen one (`debug` for debug builds, `info` for release builds).
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
/// Safe to call repeatedly with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task as rendered by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Stable task ID in string form.
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl From<Task> for TodoItem {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            text: task.text,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Response envelope shared by every task-list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    pub ok: bool,
    /// Task created by `todo_add`, when one was created.
    pub created_id: Option<String>,
    /// Tasks in the requested display order.
    pub items: Vec<TodoItem>,
    /// Effective sort mode name (`time|completion`).
    pub sort_mode: String,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Lists tasks in `sort_mode` order (`time` when unset or unknown).
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list(sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_list", |_| Ok(None))
}

/// Adds a task; blank text is ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String, sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_add", |store| store.add(&text))
}

/// Replaces a task's text; unknown IDs are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_edit(id: String, text: String, sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_edit", |store| {
        if let Some(id) = parse_id(&id) {
            store.edit(id, &text)?;
        }
        Ok(None)
    })
}

/// Flips one task's completion; unknown IDs are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: String, sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_toggle", |store| {
        if let Some(id) = parse_id(&id) {
            store.toggle_completed(id)?;
        }
        Ok(None)
    })
}

/// Sets every task's completion to `completed`.
///
/// `completed` is the target held by the caller's check/uncheck-all
/// switch, not a flip of the current state.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle_all(completed: bool, sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_toggle_all", |store| {
        store.toggle_all(completed)?;
        Ok(None)
    })
}

/// Removes every completed task.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_clear_completed(sort_mode: Option<String>) -> TodoListResponse {
    with_store(sort_mode, "todo_clear_completed", |store| {
        store.clear_completed()?;
        Ok(None)
    })
}

fn with_store(
    sort_mode: Option<String>,
    action: &'static str,
    f: impl FnOnce(&mut TaskStore<SqliteKvStore<'_>>) -> StorageResult<Option<TaskId>>,
) -> TodoListResponse {
    let mode = resolve_sort_mode(sort_mode.as_deref());
    let _guard = STORE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let conn = match open_db(resolve_db_path()) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event={action} module=ffi status=error error_code=db_open_failed error={err}");
            return failure(mode, format!("{action} failed: task DB open failed: {err}"));
        }
    };
    let mut store = TaskStore::open(TaskStorage::new(SqliteKvStore::new(&conn)));

    let outcome = f(&mut store);
    let items = store
        .sorted(mode)
        .into_iter()
        .map(TodoItem::from)
        .collect::<Vec<_>>();

    match outcome {
        Ok(created) => TodoListResponse {
            ok: true,
            created_id: created.map(|id| id.to_string()),
            message: format!("{} task(s).", items.len()),
            items,
            sort_mode: mode.as_str().to_string(),
        },
        Err(err) => TodoListResponse {
            ok: false,
            created_id: None,
            items,
            sort_mode: mode.as_str().to_string(),
            message: format!("{action} failed: {err}"),
        },
    }
}

fn failure(mode: SortMode, message: String) -> TodoListResponse {
    TodoListResponse {
        ok: false,
        created_id: None,
        items: Vec::new(),
        sort_mode: mode.as_str().to_string(),
        message,
    }
}

fn resolve_sort_mode(raw: Option<&str>) -> SortMode {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

fn parse_id(raw: &str) -> Option<TaskId> {
    TaskId::parse_str(raw.trim()).ok()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}
