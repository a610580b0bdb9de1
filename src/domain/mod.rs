/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionEvent) and the
/// streak engine that derives adherence metrics from a habit's completion
/// log. Everything here is pure: no I/O, no logging, no clock access.

pub mod event;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use event::*;
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid periodicity: {0} (must be at least 1 day)")]
    InvalidPeriodicity(i64),

    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),
}
