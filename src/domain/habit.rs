/// Habit entity and related functionality
///
/// This module defines the Habit record: the identity and configuration of
/// one tracked habit. A Habit in memory has exactly one state (valid,
/// fully populated); persistence-level lifecycle lives in the store.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::domain::{DomainError, HabitId, Periodicity};

/// A habit the user wants to perform regularly
///
/// `id` and `created_at` are immutable once assigned; name, category, and
/// periodicity may change through `edit`. The category is free text with no
/// validation. Name uniqueness is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Store-assigned unique identifier
    pub id: HabitId,
    /// Display name, non-empty
    pub name: String,
    /// Free-text classification ("Health", "Learning", ...)
    pub category: String,
    /// Maximum allowed gap in days between consecutive completions
    pub periodicity: Periodicity,
    /// Calendar date the habit was defined. Supplied by the caller at
    /// creation time, never defaulted from a clock captured at load time.
    pub created_at: NaiveDate,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The caller supplies `created_at` explicitly; there is no implicit
    /// "now" default anywhere in the domain layer.
    pub fn new(
        id: HabitId,
        name: String,
        category: String,
        periodicity: Periodicity,
        created_at: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            category,
            periodicity,
            created_at,
        })
    }

    /// Reconstruct a habit from a stored row
    ///
    /// Assumes the row was validated when written. The periodicity still
    /// goes through `Periodicity::from_raw` at the storage boundary, so a
    /// corrupted row cannot smuggle a zero tolerance in here.
    pub fn from_row(
        id: HabitId,
        name: String,
        category: String,
        periodicity: Periodicity,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            category,
            periodicity,
            created_at,
        }
    }

    /// Apply an edit to the mutable fields, with validation
    ///
    /// `id` and `created_at` cannot be changed.
    pub fn edit(
        &mut self,
        name: Option<String>,
        category: Option<String>,
        periodicity: Option<Periodicity>,
    ) -> Result<(), DomainError> {
        if let Some(ref new_name) = name {
            Self::validate_name(new_name)?;
        }

        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_category) = category {
            self.category = new_category;
        }
        if let Some(new_periodicity) = periodicity {
            self.periodicity = new_periodicity;
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidHabitName(
                "habit name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
