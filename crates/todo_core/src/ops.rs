//! Pure task-list operations.
//!
//! # Responsibility
//! - Compute the next task collection from the current one for every user
//!   action on the task screen.
//! - Provide the display-order projection for each `SortMode`.
//!
//! # Invariants
//! - Inputs are never mutated; every function returns a new collection.
//! - Invalid input (blank text, unknown id) is a silent no-op.
//! - Storage order is insertion order; only `sort_tasks` reorders, and only
//!   in its returned projection.

use crate::model::task::{now_epoch_ms, SortMode, Task, TaskId};

/// Appends a new incomplete task stamped with the current time.
///
/// Blank or whitespace-only text returns the collection unchanged.
pub fn add_task(tasks: &[Task], text: &str) -> Vec<Task> {
    add_task_at(tasks, text, now_epoch_ms())
}

/// Same as [`add_task`] with an explicit creation timestamp.
pub fn add_task_at(tasks: &[Task], text: &str, created_at: i64) -> Vec<Task> {
    let trimmed = text.trim();
    let mut next = tasks.to_vec();
    if trimmed.is_empty() {
        return next;
    }

    let mut task = Task::new(trimmed);
    task.created_at = created_at;
    next.push(task);
    next
}

/// Replaces the text of the task with `id`.
pub fn edit_task(tasks: &[Task], id: TaskId, new_text: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    text: new_text.to_string(),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Flips `completed` on the task with `id`.
pub fn toggle_completed(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Sets `completed = target` on every task.
pub fn toggle_all(tasks: &[Task], target: bool) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| Task {
            completed: target,
            ..task.clone()
        })
        .collect()
}

/// Removes every completed task, keeping the rest in storage order.
pub fn clear_completed(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !task.completed)
        .cloned()
        .collect()
}

/// Returns the display ordering for `mode`.
///
/// Uses a stable sort, so tasks with equal keys keep their storage order.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match mode {
        SortMode::Time => sorted.sort_by_key(|task| task.created_at),
        SortMode::Completion => sorted.sort_by_key(|task| (task.completed, task.created_at)),
    }
    sorted
}
