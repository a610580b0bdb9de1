/// Public library interface for the habitual habit tracker
///
/// Exposes the domain layer (habit records, completion events, and the
/// streak engine), the SQLite store, and the record operations the CLI
/// drives.

use thiserror::Error;

mod commands;
mod domain;
mod storage;

// Re-export public modules and types
pub use commands::*;
pub use domain::*;
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can bubble up to the binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
