/// Main entry point for the habitual CLI
///
/// Sets up logging, parses command line arguments, resolves the database
/// path, and dispatches to the record operations. "Today" is read from the
/// clock exactly once per invocation, here, and passed down explicitly.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habitual::{
    add_habit, complete_habit, delete_habit, edit_habit, list_habits, AddHabitParams, AppError,
    CompleteHabitParams, DeleteHabitParams, EditHabitParams, ListHabitsParams, ListHabitsResponse,
    SqliteStore,
};

/// Get the default database path with a fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habitual");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habitual");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habitual");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let mut db_path = potential_path.clone();
            db_path.push("habits.db");
            return Ok(db_path);
        }
    }

    let mut temp_path = std::env::temp_dir();
    temp_path.push("habitual");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for habitual
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Define a new habit
    Add {
        /// Habit name (must be unique)
        name: String,
        /// Free-text category
        #[arg(long, default_value = "General")]
        category: String,
        /// Max days between completions before the streak breaks
        #[arg(long, default_value_t = 1)]
        periodicity: i64,
    },
    /// Edit a habit's name, category, or periodicity
    Edit {
        /// Current name of the habit
        habit: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        periodicity: Option<i64>,
    },
    /// Delete a habit and its completion log
    Delete {
        /// Name of the habit
        habit: String,
    },
    /// Log a completion for a habit
    Complete {
        /// Name of the habit
        habit: String,
        /// Completion date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all habits with their streak metrics
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habitual={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for command output
        .init();

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let store = SqliteStore::new(db_path)?;
    let today = Local::now().date_naive();

    run_command(&store, args.command, today)?;
    Ok(())
}

fn run_command(store: &SqliteStore, command: Command, today: NaiveDate) -> Result<(), AppError> {
    match command {
        Command::Add {
            name,
            category,
            periodicity,
        } => {
            let response = add_habit(
                store,
                AddHabitParams {
                    name,
                    category,
                    periodicity,
                    created_at: today,
                },
            )?;
            println!("Added habit '{}' (id {})", response.name, response.habit_id);
        }
        Command::Edit {
            habit,
            name,
            category,
            periodicity,
        } => {
            let response = edit_habit(
                store,
                EditHabitParams {
                    habit,
                    name,
                    category,
                    periodicity,
                },
            )?;
            println!("Updated habit '{}' (id {})", response.name, response.habit_id);
        }
        Command::Delete { habit } => {
            let response = delete_habit(store, DeleteHabitParams { habit })?;
            println!("Deleted habit '{}' and its log", response.name);
        }
        Command::Complete { habit, date } => {
            let response = complete_habit(
                store,
                CompleteHabitParams {
                    habit,
                    completed_at: date.unwrap_or(today),
                },
            )?;
            println!("Logged '{}' for {}", response.name, response.completed_at);
        }
        Command::List { json } => {
            let response = list_habits(store, ListHabitsParams { as_of: today })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                render_list(&response);
            }
        }
    }

    Ok(())
}

/// Render the habit list as an aligned text table
fn render_list(response: &ListHabitsResponse) {
    if response.habits.is_empty() {
        println!("No habits defined yet. Add one with `habitual add <name>`.");
        return;
    }

    println!(
        "{:<20} {:<12} {:>6} {:>8} {:>8} {:<12} {:>6} {:<9}",
        "NAME", "CATEGORY", "PERIOD", "CURRENT", "LONGEST", "LAST", "TOTAL", "ON TRACK"
    );

    for habit in &response.habits {
        let last = habit
            .last_completed
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        println!(
            "{:<20} {:<12} {:>6} {:>8} {:>8} {:<12} {:>6} {:<9}",
            habit.name,
            habit.category,
            habit.periodicity,
            habit.current_streak,
            habit.longest_streak,
            last,
            habit.total_completed,
            if habit.on_track { "yes" } else { "no" },
        );
    }

    println!(
        "\n{} habits, {} completions logged",
        response.summary.total_habits, response.summary.total_completions
    );
}
