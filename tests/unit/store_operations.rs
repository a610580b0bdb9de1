/// Store behavior through the public trait interface
use chrono::NaiveDate;
use habitual::{HabitStore, Periodicity, SqliteStore, StorageError};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_ids_are_assigned_sequentially_by_the_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    let first = store
        .add_habit("Run", "Health", Periodicity::new(1).unwrap(), d("2023-01-01"))
        .unwrap();
    let second = store
        .add_habit("Swim", "Health", Periodicity::new(2).unwrap(), d("2023-01-01"))
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(store.habit_id_by_name("Swim").unwrap(), Some(second));
}

#[test]
fn test_habit_exists_scan() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(!store.habit_exists("Run").unwrap());

    store
        .add_habit("Run", "Health", Periodicity::new(1).unwrap(), d("2023-01-01"))
        .unwrap();
    assert!(store.habit_exists("Run").unwrap());
    // Exact match only
    assert!(!store.habit_exists("run").unwrap());
}

#[test]
fn test_events_for_unknown_habit_is_empty_not_error() {
    // A habit with no log is not an error condition; the engine maps an
    // empty list to zero metrics.
    let store = SqliteStore::open_in_memory().unwrap();
    let id = store
        .add_habit("Run", "Health", Periodicity::new(1).unwrap(), d("2023-01-01"))
        .unwrap();

    let events = store.events_for_habit(id).unwrap();
    assert!(events.is_empty());
}

#[test]
fn test_list_habits_returns_all_rows() {
    let store = SqliteStore::open_in_memory().unwrap();
    for (name, days) in [("Run", 1u32), ("Read", 1), ("Call family", 7)] {
        store
            .add_habit(name, "General", Periodicity::new(days).unwrap(), d("2023-01-01"))
            .unwrap();
    }

    let habits = store.list_habits().unwrap();
    assert_eq!(habits.len(), 3);
    let names: Vec<&str> = habits.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Run", "Read", "Call family"]);
}

#[test]
fn test_delete_unknown_habit_reports_not_found() {
    let store = SqliteStore::open_in_memory().unwrap();
    let result = store.delete_habit(habitual::HabitId(99));
    assert!(matches!(result, Err(StorageError::HabitNotFound { habit_id: 99 })));
}
