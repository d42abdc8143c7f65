use todo_core::db::open_db;
use todo_core::db::open_db_in_memory;
use todo_core::{KvStore, MemoryKvStore, SqliteKvStore, StorageError, Task, TaskStorage, TODOS_KEY};
use uuid::Uuid;

fn sample() -> Vec<Task> {
    let mut done = Task::with_id(Uuid::new_v4(), "done", 2);
    done.completed = true;
    vec![Task::with_id(Uuid::new_v4(), "open", 1), done]
}

#[test]
fn absent_record_loads_empty() {
    let storage = TaskStorage::new(MemoryKvStore::new());
    assert!(storage.load().is_empty());

    let conn = open_db_in_memory().unwrap();
    let storage = TaskStorage::new(SqliteKvStore::new(&conn));
    assert!(storage.load().is_empty());
}

#[test]
fn memory_roundtrip_preserves_order_and_fields() {
    let storage = TaskStorage::new(MemoryKvStore::new());
    let tasks = sample();
    storage.save(&tasks).unwrap();
    assert_eq!(storage.load(), tasks);

    storage.save(&[]).unwrap();
    assert!(storage.load().is_empty());
}

#[test]
fn sqlite_roundtrip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");
    let tasks = sample();

    {
        let conn = open_db(&path).unwrap();
        let storage = TaskStorage::new(SqliteKvStore::new(&conn));
        assert!(storage.load().is_empty());
        storage.save(&tasks).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = TaskStorage::new(SqliteKvStore::new(&conn));
    assert_eq!(storage.load(), tasks);
}

#[test]
fn save_overwrites_previous_record() {
    let conn = open_db_in_memory().unwrap();
    let storage = TaskStorage::new(SqliteKvStore::new(&conn));
    storage.save(&sample()).unwrap();

    let replacement = vec![Task::with_id(Uuid::new_v4(), "only", 9)];
    storage.save(&replacement).unwrap();
    assert_eq!(storage.load(), replacement);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn corrupt_record_fails_open() {
    let kv = MemoryKvStore::new();
    kv.put(TODOS_KEY, "{not json").unwrap();
    let storage = TaskStorage::new(kv);
    assert!(storage.load().is_empty());
}

#[test]
fn record_with_wrong_shape_fails_open() {
    let kv = MemoryKvStore::new();
    kv.put(TODOS_KEY, r#"[{"id":"not-a-uuid","text":"x","completed":false,"createdAt":1}]"#)
        .unwrap();
    let storage = TaskStorage::new(kv);
    assert!(storage.load().is_empty());
}

#[test]
fn reads_records_written_with_external_field_names() {
    let id = Uuid::new_v4();
    let kv = MemoryKvStore::new();
    kv.put(
        TODOS_KEY,
        &format!(r#"[{{"id":"{id}","text":"Buy milk","completed":true,"createdAt":1700000000000}}]"#),
    )
    .unwrap();

    let tasks = TaskStorage::new(kv).load();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(tasks[0].completed);
    assert_eq!(tasks[0].created_at, 1_700_000_000_000);
}

#[test]
fn failed_write_propagates_and_keeps_previous_record() {
    let kv = MemoryKvStore::new();
    let storage = TaskStorage::new(&kv);
    let tasks = sample();
    storage.save(&tasks).unwrap();

    kv.set_fail_writes(true);
    let err = storage.save(&[]).unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
    assert_eq!(storage.load(), tasks);
}
