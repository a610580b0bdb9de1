/// Logging a habit completion

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::commands::resolve_habit;
use crate::storage::{HabitStore, StorageError};

/// Parameters for logging a completion
///
/// The completion date is always supplied by the caller; defaulting to
/// "today" is the binary's decision, made at call time.
#[derive(Debug, Deserialize)]
pub struct CompleteHabitParams {
    pub habit: String,
    pub completed_at: NaiveDate,
}

/// Response from logging a completion
#[derive(Debug, Serialize)]
pub struct CompleteHabitResponse {
    pub habit_id: i64,
    pub name: String,
    pub completed_at: NaiveDate,
}

/// Append a completion to the habit's log using the provided store
pub fn complete_habit<S: HabitStore>(
    store: &S,
    params: CompleteHabitParams,
) -> Result<CompleteHabitResponse, StorageError> {
    let id = resolve_habit(store, &params.habit)?;
    store.add_completion(id, params.completed_at)?;

    Ok(CompleteHabitResponse {
        habit_id: id.as_i64(),
        name: params.habit,
        completed_at: params.completed_at,
    })
}
