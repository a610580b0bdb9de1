/// CompletionEvent entity for the append-only completion log
///
/// Each row of the log records that a habit was (or was not) completed on a
/// calendar date. Rows are never mutated or deleted by the core; a row with
/// the completed flag cleared is inert and excluded from streak math.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::domain::HabitId;

/// One row of a habit's completion log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Which habit this event belongs to
    pub habit_id: HabitId,
    /// Calendar date the completion was logged for
    pub completed_at: NaiveDate,
    /// Whether this row counts as a completion. Rows with this flag false
    /// are soft-deleted entries and must be filtered out before any streak
    /// computation.
    pub completed: bool,
}

impl CompletionEvent {
    pub fn new(habit_id: HabitId, completed_at: NaiveDate) -> Self {
        Self {
            habit_id,
            completed_at,
            completed: true,
        }
    }

    /// Reconstruct an event from a stored row
    pub fn from_row(habit_id: HabitId, completed_at: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id,
            completed_at,
            completed,
        }
    }
}

/// Extract the completion dates that participate in streak math
///
/// Keeps only flagged-true events. Order is preserved as given; the streak
/// engine sorts for itself and never assumes sortedness.
pub fn completed_dates(events: &[CompletionEvent]) -> Vec<NaiveDate> {
    events
        .iter()
        .filter(|e| e.completed)
        .map(|e| e.completed_at)
        .collect()
}
