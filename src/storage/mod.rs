/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite: habit
/// definitions plus the append-only completion log. The streak engine never
/// sees this layer; it consumes the already-fetched event lists.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{CompletionEvent, DomainError, Habit, HabitId, Periodicity};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: i64 },

    #[error("No habit named '{name}'")]
    UnknownHabit { name: String },

    #[error("A habit named '{name}' already exists")]
    DuplicateName { name: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Trait defining the storage interface for habits
///
/// The seam between the store and everything else: commands are generic
/// over it, and tests can drive them against any implementation. Reads
/// return consistent snapshots (each call is a single query), and writes
/// are serialized by the underlying connection.
pub trait HabitStore {
    /// Create a new habit, returning the assigned id
    ///
    /// Rejects a name that already exists; name uniqueness is this layer's
    /// job, not the record's.
    fn add_habit(
        &self,
        name: &str,
        category: &str,
        periodicity: Periodicity,
        created_at: NaiveDate,
    ) -> Result<HabitId, StorageError>;

    /// Get a habit by id
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError>;

    /// Look up a habit id by exact name
    fn habit_id_by_name(&self, name: &str) -> Result<Option<HabitId>, StorageError>;

    /// Whether a habit with this name exists
    fn habit_exists(&self, name: &str) -> Result<bool, StorageError>;

    /// Persist edits to a habit's name, category, or periodicity
    fn edit_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit and its completion log
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError>;

    /// List all habits
    fn list_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// All log rows for a habit, in no guaranteed order
    fn events_for_habit(&self, habit_id: HabitId) -> Result<Vec<CompletionEvent>, StorageError>;

    /// Append a completion to the habit's log
    fn add_completion(&self, habit_id: HabitId, completed_at: NaiveDate) -> Result<(), StorageError>;
}
