/// Record operations driven by the CLI
///
/// One module per operation. Each takes a params struct, runs against any
/// `HabitStore`, and returns a serializable response; rendering (tables,
/// JSON, error messages) stays in the binary.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;

// Re-export operation functions for easy access
pub use add::*;
pub use complete::*;
pub use delete::*;
pub use edit::*;
pub use list::*;

use crate::storage::{HabitStore, StorageError};
use crate::domain::HabitId;

/// Resolve a habit name to its id, or fail with the name in the error
fn resolve_habit<S: HabitStore>(store: &S, name: &str) -> Result<HabitId, StorageError> {
    store
        .habit_id_by_name(name)?
        .ok_or_else(|| StorageError::UnknownHabit {
            name: name.to_string(),
        })
}
