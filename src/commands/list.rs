/// Listing habits with their derived streak metrics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Streak;
use crate::storage::{HabitStore, StorageError};

/// Parameters for listing habits
#[derive(Debug, Deserialize)]
pub struct ListHabitsParams {
    /// Reference date for the on-track check, supplied by the caller
    pub as_of: NaiveDate,
}

/// One habit with its metrics
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: i64,
    pub name: String,
    pub category: String,
    pub periodicity: u32,
    pub created_at: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// None when the habit has never been completed; rendered as "N/A"
    pub last_completed: Option<NaiveDate>,
    pub total_completed: u32,
    pub on_track: bool,
}

/// Aggregate numbers across all habits
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub total_habits: u32,
    pub total_completions: u32,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub summary: ListSummary,
}

/// List all habits with metrics computed from their logs
///
/// One snapshot read per habit feeds one engine invocation; the engine
/// itself never touches the store.
pub fn list_habits<S: HabitStore>(
    store: &S,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, StorageError> {
    let mut summaries = Vec::new();
    let mut total_completions = 0;

    for habit in store.list_habits()? {
        let events = store.events_for_habit(habit.id)?;
        let streak = Streak::from_events(habit.id, habit.periodicity, &events);
        total_completions += streak.total_completed;

        summaries.push(HabitSummary {
            habit_id: habit.id.as_i64(),
            name: habit.name,
            category: habit.category,
            periodicity: habit.periodicity.days(),
            created_at: habit.created_at,
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
            last_completed: streak.last_completed,
            total_completed: streak.total_completed,
            on_track: streak.is_on_track(habit.periodicity, params.as_of),
        });
    }

    let summary = ListSummary {
        total_habits: summaries.len() as u32,
        total_completions,
    };

    Ok(ListHabitsResponse {
        habits: summaries,
        summary,
    })
}
