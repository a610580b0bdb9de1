/// Editing an existing habit's name, category, or periodicity

use serde::{Deserialize, Serialize};

use crate::commands::resolve_habit;
use crate::domain::Periodicity;
use crate::storage::{HabitStore, StorageError};

/// Parameters for editing a habit, identified by its current name
///
/// Omitted fields are left unchanged. Id and creation date cannot be edited.
#[derive(Debug, Deserialize)]
pub struct EditHabitParams {
    pub habit: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub periodicity: Option<i64>,
}

/// Response from editing a habit
#[derive(Debug, Serialize)]
pub struct EditHabitResponse {
    pub habit_id: i64,
    pub name: String,
}

/// Apply edits to a habit using the provided store
pub fn edit_habit<S: HabitStore>(
    store: &S,
    params: EditHabitParams,
) -> Result<EditHabitResponse, StorageError> {
    let id = resolve_habit(store, &params.habit)?;
    let mut habit = store.get_habit(id)?;

    let periodicity = params
        .periodicity
        .map(Periodicity::from_raw)
        .transpose()?;

    habit.edit(params.name, params.category, periodicity)?;
    store.edit_habit(&habit)?;

    Ok(EditHabitResponse {
        habit_id: habit.id.as_i64(),
        name: habit.name,
    })
}
