/// Core identifier and value types used throughout the domain layer
///
/// This module defines the HabitId newtype and the Periodicity value type
/// that Habit, CompletionEvent, and the streak engine build on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// A thin wrapper around the integer row id assigned by the store at
/// creation time. The newtype keeps habit ids from being confused with
/// other integers (log row ids, counts) at API boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many days may elapse between two consecutive completions before the
/// streak is considered broken
///
/// Interpretation: 1 = daily, 7 = weekly, and so on. The boundary is
/// inclusive: a gap of exactly `days` does not break a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Periodicity(u32);

impl Periodicity {
    /// Create a validated periodicity
    ///
    /// Zero is a caller input error: the streak walk assumes at least one
    /// day of tolerance between consecutive completions.
    pub fn new(days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::InvalidPeriodicity(days as i64));
        }
        Ok(Self(days))
    }

    /// Parse a periodicity from a raw integer (store rows, CLI input)
    pub fn from_raw(days: i64) -> Result<Self, DomainError> {
        if days < 1 {
            return Err(DomainError::InvalidPeriodicity(days));
        }
        Ok(Self(days as u32))
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// The gap tolerance as a signed day count, for date arithmetic
    pub fn as_days_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
