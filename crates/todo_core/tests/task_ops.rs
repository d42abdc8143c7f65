use todo_core::ops::{
    add_task, add_task_at, clear_completed, edit_task, sort_tasks, toggle_all, toggle_completed,
};
use todo_core::{SortMode, Task};
use uuid::Uuid;

fn task_at(text: &str, created_at: i64, completed: bool) -> Task {
    let mut task = Task::with_id(Uuid::new_v4(), text, created_at);
    task.completed = completed;
    task
}

fn sample() -> Vec<Task> {
    vec![
        task_at("c", 30, true),
        task_at("a", 10, false),
        task_at("b", 20, true),
        task_at("d", 40, false),
    ]
}

#[test]
fn add_appends_incomplete_task_with_given_text() {
    let current = sample();
    let next = add_task(&current, "Buy milk");

    assert_eq!(next.len(), current.len() + 1);
    assert_eq!(&next[..current.len()], &current[..]);
    let added = next.last().unwrap();
    assert_eq!(added.text, "Buy milk");
    assert!(!added.completed);
    assert!(current.iter().all(|task| task.id != added.id));
}

#[test]
fn add_blank_text_is_noop() {
    let current = sample();
    assert_eq!(add_task(&current, ""), current);
    assert_eq!(add_task(&current, "   "), current);
    assert_eq!(add_task(&current, "\t\n"), current);
}

#[test]
fn unknown_id_is_noop_for_edit_and_toggle() {
    let current = sample();
    let missing = Uuid::new_v4();
    assert_eq!(edit_task(&current, missing, "changed"), current);
    assert_eq!(toggle_completed(&current, missing), current);
}

#[test]
fn edit_replaces_text_and_preserves_identity() {
    let current = sample();
    let target = current[1].clone();
    let next = edit_task(&current, target.id, "renamed");

    let edited = next.iter().find(|task| task.id == target.id).unwrap();
    assert_eq!(edited.text, "renamed");
    assert_eq!(edited.created_at, target.created_at);
    assert_eq!(edited.completed, target.completed);
    assert_eq!(next.len(), current.len());
    // input is left untouched
    assert_eq!(current[1].text, "a");
}

#[test]
fn double_toggle_is_identity() {
    let current = sample();
    for task in &current {
        let once = toggle_completed(&current, task.id);
        assert_ne!(
            once.iter().find(|t| t.id == task.id).unwrap().completed,
            task.completed
        );
        assert_eq!(toggle_completed(&once, task.id), current);
    }
}

#[test]
fn toggle_all_sets_every_task_and_is_idempotent() {
    let current = sample();
    let done = toggle_all(&current, true);
    assert!(done.iter().all(|task| task.completed));
    assert_eq!(toggle_all(&done, true), done);

    let undone = toggle_all(&done, false);
    assert!(undone.iter().all(|task| !task.completed));
    assert!(toggle_all(&[], true).is_empty());
}

#[test]
fn clear_completed_removes_completed_and_is_idempotent() {
    let current = sample();
    let cleared = clear_completed(&current);
    let texts: Vec<_> = cleared.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "d"]);
    assert_eq!(clear_completed(&cleared), cleared);

    let none_completed = toggle_all(&current, false);
    assert_eq!(clear_completed(&none_completed), none_completed);
}

#[test]
fn sort_by_time_orders_by_creation() {
    let current = sample();
    let sorted = sort_tasks(&current, SortMode::Time);
    let texts: Vec<_> = sorted.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[test]
fn sort_by_completion_groups_incomplete_first() {
    let current = sample();
    let sorted = sort_tasks(&current, SortMode::Completion);
    let texts: Vec<_> = sorted.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "d", "b", "c"]);
}

#[test]
fn sort_is_a_non_destructive_projection() {
    let current = sample();
    let snapshot = current.clone();
    let by_time = sort_tasks(&current, SortMode::Time);
    let by_completion = sort_tasks(&current, SortMode::Completion);

    assert_eq!(current, snapshot);
    assert_eq!(sort_tasks(&by_completion, SortMode::Time), by_time);
}

#[test]
fn time_sort_is_stable_for_equal_timestamps() {
    let current = vec![task_at("x", 5, false), task_at("y", 5, true), task_at("z", 1, false)];
    let sorted = sort_tasks(&current, SortMode::Time);
    let texts: Vec<_> = sorted.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["z", "x", "y"]);
}

#[test]
fn completion_sort_after_toggle_all_keeps_creation_order() {
    let a = task_at("A", 1, false);
    let b = task_at("B", 2, true);
    let current = vec![a.clone(), b.clone()];

    let ids = |tasks: Vec<Task>| tasks.into_iter().map(|task| task.id).collect::<Vec<_>>();
    assert_eq!(ids(sort_tasks(&current, SortMode::Completion)), vec![a.id, b.id]);

    let all_done = toggle_all(&current, true);
    assert_eq!(ids(sort_tasks(&all_done, SortMode::Completion)), vec![a.id, b.id]);
}

#[test]
fn add_toggle_clear_scenario() {
    let added = add_task_at(&[], "Buy milk", 1);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].text, "Buy milk");
    assert!(!added[0].completed);

    let id = added[0].id;
    let toggled = toggle_completed(&added, id);
    assert_eq!(toggled[0].id, id);
    assert!(toggled[0].completed);

    assert!(clear_completed(&toggled).is_empty());
}
