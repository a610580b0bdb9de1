/// End-to-end workflows over an on-disk database
use chrono::NaiveDate;
use tempfile::NamedTempFile;

use habitual::{
    add_habit, complete_habit, delete_habit, edit_habit, list_habits, AddHabitParams,
    CompleteHabitParams, DeleteHabitParams, EditHabitParams, ListHabitsParams, SqliteStore,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_full_habit_lifecycle() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path().to_path_buf()).expect("Failed to open store");

    add_habit(
        &store,
        AddHabitParams {
            name: "Meditate".to_string(),
            category: "Mind".to_string(),
            periodicity: 1,
            created_at: d("2023-07-01"),
        },
    )
    .unwrap();

    // Three consecutive days, then a break, then one more
    for date in ["2023-07-30", "2023-07-31", "2023-08-01", "2023-08-05"] {
        complete_habit(
            &store,
            CompleteHabitParams {
                habit: "Meditate".to_string(),
                completed_at: d(date),
            },
        )
        .unwrap();
    }

    let listed = list_habits(&store, ListHabitsParams { as_of: d("2023-08-05") }).unwrap();
    let habit = &listed.habits[0];
    assert_eq!(habit.current_streak, 1);
    assert_eq!(habit.longest_streak, 3);
    assert_eq!(habit.last_completed, Some(d("2023-08-05")));
    assert_eq!(habit.total_completed, 4);
    assert!(habit.on_track);

    // Widening the grace window via edit bridges the break
    edit_habit(
        &store,
        EditHabitParams {
            habit: "Meditate".to_string(),
            name: None,
            category: None,
            periodicity: Some(7),
        },
    )
    .unwrap();

    let listed = list_habits(&store, ListHabitsParams { as_of: d("2023-08-05") }).unwrap();
    assert_eq!(listed.habits[0].current_streak, 4);
    assert_eq!(listed.habits[0].longest_streak, 4);

    delete_habit(
        &store,
        DeleteHabitParams {
            habit: "Meditate".to_string(),
        },
    )
    .unwrap();

    let listed = list_habits(&store, ListHabitsParams { as_of: d("2023-08-05") }).unwrap();
    assert!(listed.habits.is_empty());
    assert_eq!(listed.summary.total_completions, 0);
}

#[test]
fn test_database_persists_across_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    {
        let store = SqliteStore::new(db_path.clone()).unwrap();
        add_habit(
            &store,
            AddHabitParams {
                name: "Journal".to_string(),
                category: "Mind".to_string(),
                periodicity: 1,
                created_at: d("2023-07-01"),
            },
        )
        .unwrap();
        complete_habit(
            &store,
            CompleteHabitParams {
                habit: "Journal".to_string(),
                completed_at: d("2023-07-02"),
            },
        )
        .unwrap();
    }

    let store = SqliteStore::new(db_path).unwrap();
    let listed = list_habits(&store, ListHabitsParams { as_of: d("2023-07-02") }).unwrap();
    assert_eq!(listed.habits.len(), 1);
    assert_eq!(listed.habits[0].name, "Journal");
    assert_eq!(listed.habits[0].total_completed, 1);
    assert_eq!(listed.habits[0].last_completed, Some(d("2023-07-02")));
}

#[test]
fn test_duplicate_name_is_rejected_end_to_end() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let store = SqliteStore::new(temp_file.path().to_path_buf()).unwrap();

    let params = || AddHabitParams {
        name: "Stretch".to_string(),
        category: "Health".to_string(),
        periodicity: 1,
        created_at: d("2023-07-01"),
    };

    add_habit(&store, params()).unwrap();
    assert!(add_habit(&store, params()).is_err());
}
