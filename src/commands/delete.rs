/// Deleting a habit and its completion log

use serde::{Deserialize, Serialize};

use crate::commands::resolve_habit;
use crate::storage::{HabitStore, StorageError};

/// Parameters for deleting a habit, identified by name
#[derive(Debug, Deserialize)]
pub struct DeleteHabitParams {
    pub habit: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub habit_id: i64,
    pub name: String,
}

/// Delete a habit using the provided store
pub fn delete_habit<S: HabitStore>(
    store: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, StorageError> {
    let id = resolve_habit(store, &params.habit)?;
    store.delete_habit(id)?;

    Ok(DeleteHabitResponse {
        habit_id: id.as_i64(),
        name: params.habit,
    })
}
