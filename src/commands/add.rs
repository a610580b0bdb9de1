/// Adding a new habit definition

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Periodicity};
use crate::storage::{HabitStore, StorageError};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct AddHabitParams {
    pub name: String,
    pub category: String,
    /// Grace window in days (1 = daily, 7 = weekly)
    pub periodicity: i64,
    /// Creation date, supplied by the caller rather than read from a clock
    pub created_at: NaiveDate,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct AddHabitResponse {
    pub habit_id: i64,
    pub name: String,
}

/// Create a new habit using the provided store
pub fn add_habit<S: HabitStore>(
    store: &S,
    params: AddHabitParams,
) -> Result<AddHabitResponse, StorageError> {
    let name = params.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::InvalidHabitName("habit name cannot be empty".to_string()).into());
    }

    let periodicity = Periodicity::from_raw(params.periodicity)?;
    let id = store.add_habit(&name, &params.category, periodicity, params.created_at)?;

    Ok(AddHabitResponse {
        habit_id: id.as_i64(),
        name,
    })
}
