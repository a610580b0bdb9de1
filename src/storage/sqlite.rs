/// SQLite implementation of the habit storage interface
///
/// Habits live in the `habits` table; completions are appended to
/// `habit_logs`. Calendar dates are stored as `YYYY-MM-DD` text, and a row
/// that fails to parse back is surfaced as an error rather than silently
/// coerced, since a bad date would corrupt the streak math downstream.

use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{CompletionEvent, DomainError, Habit, HabitId, Periodicity};
use crate::storage::{migrations, HabitStore, StorageError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-based storage implementation
///
/// Holds one connection; the single connection serializes writes, and every
/// read is one query, so an engine invocation always sees a consistent
/// snapshot of a habit's log.
pub struct SqliteStore {
    conn: Connection,
}

/// Raw habit row before date/periodicity decoding
struct HabitRow {
    id: i64,
    name: String,
    periodicity: i64,
    category: String,
    created_at: String,
}

impl SqliteStore {
    /// Open (or create) the database file and run migrations
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::init(conn, &db_path.display().to_string())
    }

    /// In-memory database, for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::init(conn, ":memory:")
    }

    fn init(conn: Connection, label: &str) -> Result<Self, StorageError> {
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite store initialized at: {}", label);

        Ok(Self { conn })
    }

    fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| DomainError::MalformedDate(raw.to_string()))
    }

    fn decode_habit(row: HabitRow) -> Result<Habit, StorageError> {
        let periodicity = Periodicity::from_raw(row.periodicity)?;
        let created_at = Self::parse_date(&row.created_at)?;

        Ok(Habit::from_row(
            HabitId(row.id),
            row.name,
            row.category,
            periodicity,
            created_at,
        ))
    }

    fn read_habit_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HabitRow> {
        Ok(HabitRow {
            id: row.get(0)?,
            name: row.get(1)?,
            periodicity: row.get(2)?,
            category: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl HabitStore for SqliteStore {
    fn add_habit(
        &self,
        name: &str,
        category: &str,
        periodicity: Periodicity,
        created_at: NaiveDate,
    ) -> Result<HabitId, StorageError> {
        if self.habit_exists(name)? {
            return Err(StorageError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.conn.execute(
            "INSERT INTO habits (name, periodicity, category, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                name,
                periodicity.days(),
                category,
                created_at.format(DATE_FORMAT).to_string()
            ],
        )?;

        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit: {} ({})", name, id);
        Ok(id)
    }

    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, periodicity, category, created_at FROM habits WHERE id = ?1",
                params![habit_id.as_i64()],
                Self::read_habit_row,
            )
            .optional()?;

        match row {
            Some(row) => Self::decode_habit(row),
            None => Err(StorageError::HabitNotFound {
                habit_id: habit_id.as_i64(),
            }),
        }
    }

    fn habit_id_by_name(&self, name: &str) -> Result<Option<HabitId>, StorageError> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM habits WHERE name = ?1",
                params![name],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        Ok(id.map(HabitId))
    }

    fn habit_exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.habit_id_by_name(name)?.is_some())
    }

    fn edit_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        // Another habit may not already hold the new name
        if let Some(existing) = self.habit_id_by_name(&habit.name)? {
            if existing != habit.id {
                return Err(StorageError::DuplicateName {
                    name: habit.name.clone(),
                });
            }
        }

        let rows_affected = self.conn.execute(
            "UPDATE habits SET name = ?2, periodicity = ?3, category = ?4 WHERE id = ?1",
            params![
                habit.id.as_i64(),
                habit.name,
                habit.periodicity.days(),
                habit.category
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit.id.as_i64(),
            });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.as_i64()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.as_i64(),
            });
        }

        // Cascade: a deleted habit takes its log with it
        self.conn.execute(
            "DELETE FROM habit_logs WHERE habit_id = ?1",
            params![habit_id.as_i64()],
        )?;

        tracing::debug!("Deleted habit {} and its log", habit_id);
        Ok(())
    }

    fn list_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, periodicity, category, created_at FROM habits ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], Self::read_habit_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(Self::decode_habit).collect()
    }

    fn events_for_habit(&self, habit_id: HabitId) -> Result<Vec<CompletionEvent>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT habit_id, completed, completed_at FROM habit_logs WHERE habit_id = ?1",
        )?;
        let rows = stmt
            .query_map(params![habit_id.as_i64()], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, bool>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(habit_id, completed, raw_date)| {
                let completed_at = Self::parse_date(&raw_date)?;
                Ok(CompletionEvent::from_row(
                    HabitId(habit_id),
                    completed_at,
                    completed,
                ))
            })
            .collect()
    }

    fn add_completion(&self, habit_id: HabitId, completed_at: NaiveDate) -> Result<(), StorageError> {
        // The habit must exist; the log has no other integrity anchor
        let _ = self.get_habit(habit_id)?;

        self.conn.execute(
            "INSERT INTO habit_logs (habit_id, completed, completed_at) VALUES (?1, 1, ?2)",
            params![
                habit_id.as_i64(),
                completed_at.format(DATE_FORMAT).to_string()
            ],
        )?;

        tracing::debug!("Logged completion for habit {} on {}", habit_id, completed_at);
        Ok(())
    }
}
