// CRUD round trips against an in-memory SQLite database.

use rusqlite::Connection;
use taskdesk_store::{StoreError, Task, TaskStore};

fn store() -> TaskStore {
    TaskStore::new(Connection::open_in_memory().unwrap()).unwrap()
}

#[test]
fn add_then_get_round_trip() {
    let store = store();
    let id = store.add("20240115", "dentist", "bring insurance card", "").unwrap();

    let task = store.get(id).unwrap();
    assert_eq!(task.id, id);
    assert_eq!(task.date, "20240115");
    assert_eq!(task.title, "dentist");
    assert_eq!(task.comment, "bring insurance card");
    assert_eq!(task.repeat, "");
}

#[test]
fn ids_are_monotonic() {
    let store = store();
    let first = store.add("20240101", "a", "", "").unwrap();
    let second = store.add("20240102", "b", "", "").unwrap();
    assert!(second > first);
}

#[test]
fn list_orders_by_date() {
    let store = store();
    store.add("20240301", "march", "", "").unwrap();
    store.add("20240101", "january", "", "d 1").unwrap();
    store.add("20240201", "february", "", "").unwrap();

    let titles: Vec<String> = store
        .list(50)
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["january", "february", "march"]);
}

#[test]
fn list_honours_limit() {
    let store = store();
    for day in 1..=5 {
        store.add(&format!("2024010{day}"), "t", "", "").unwrap();
    }
    assert_eq!(store.list(3).unwrap().len(), 3);
}

#[test]
fn search_matches_title_and_comment() {
    let store = store();
    store.add("20240110", "water plants", "", "d 3").unwrap();
    store.add("20240111", "gym", "leg day", "").unwrap();
    store.add("20240112", "call mom", "", "w 1").unwrap();

    let by_title = store.search("plants", 50).unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "water plants");

    let by_comment = store.search("leg", 50).unwrap();
    assert_eq!(by_comment.len(), 1);
    assert_eq!(by_comment[0].title, "gym");

    assert!(store.search("nothing here", 50).unwrap().is_empty());
}

#[test]
fn update_replaces_all_fields() {
    let store = store();
    let id = store.add("20240115", "old", "old comment", "").unwrap();

    let updated = Task {
        id,
        date: "20240120".to_string(),
        title: "new".to_string(),
        comment: String::new(),
        repeat: "d 2".to_string(),
    };
    store.update(&updated).unwrap();
    assert_eq!(store.get(id).unwrap(), updated);
}

#[test]
fn update_date_only_touches_date() {
    let store = store();
    let id = store.add("20240115", "laundry", "whites", "w 7").unwrap();

    store.update_date(id, "20240122").unwrap();
    let task = store.get(id).unwrap();
    assert_eq!(task.date, "20240122");
    assert_eq!(task.title, "laundry");
    assert_eq!(task.repeat, "w 7");
}

#[test]
fn delete_removes_the_row() {
    let store = store();
    let id = store.add("20240115", "once", "", "").unwrap();
    store.delete(id).unwrap();
    assert!(matches!(
        store.get(id),
        Err(StoreError::TaskNotFound { .. })
    ));
}

#[test]
fn missing_ids_surface_not_found() {
    let store = store();
    assert!(matches!(store.get(42), Err(StoreError::TaskNotFound { id: 42 })));
    assert!(matches!(store.delete(42), Err(StoreError::TaskNotFound { id: 42 })));
    assert!(matches!(
        store.update_date(42, "20240101"),
        Err(StoreError::TaskNotFound { id: 42 })
    ));
}

#[test]
fn schema_init_is_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    taskdesk_store::db::init_db(&conn).unwrap();
    taskdesk_store::db::init_db(&conn).unwrap();
    let count: i64 = conn
        .query_row("SELECT count(*) FROM scheduler", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
