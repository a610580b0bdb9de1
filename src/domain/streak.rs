/// Streak engine: adherence metrics over a habit's completion log
///
/// Pure functions from a periodicity and an unordered list of completion
/// dates to derived metrics. The engine never touches the clock, the store,
/// or a logger; callers fetch the event list, filter it down to completed
/// dates, and render the results.
///
/// Gap rule: the streak between two consecutive completions survives as long
/// as they are at most `periodicity` days apart (inclusive boundary). Input
/// order never matters, and several completions on the same calendar date
/// collapse to one streak day.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::domain::{completed_dates, CompletionEvent, HabitId, Periodicity};

/// Derived streak metrics for one habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Which habit these metrics are for
    pub habit_id: HabitId,
    /// Length of the run ending at the most recent completion
    pub current_streak: u32,
    /// Longest run anywhere in the history
    pub longest_streak: u32,
    /// Most recent completion date (None if never completed)
    pub last_completed: Option<NaiveDate>,
    /// Count of flagged-true log rows
    pub total_completed: u32,
}

impl Streak {
    /// Empty metrics for a habit with no completions yet
    pub fn empty(habit_id: HabitId) -> Self {
        Self {
            habit_id,
            current_streak: 0,
            longest_streak: 0,
            last_completed: None,
            total_completed: 0,
        }
    }

    /// Compute all four metrics from a habit's raw event list
    ///
    /// Takes the unfiltered log: rows with the completed flag cleared count
    /// toward nothing, and their dates are treated as absent (a gap), not as
    /// a streak-breaking zero.
    pub fn from_events(habit_id: HabitId, periodicity: Periodicity, events: &[CompletionEvent]) -> Self {
        let dates = completed_dates(events);

        Self {
            habit_id,
            current_streak: current_streak(periodicity, &dates),
            longest_streak: longest_streak(periodicity, &dates),
            last_completed: last_completed(&dates),
            total_completed: total_completed(events),
        }
    }

    /// Whether the habit is still within its grace window relative to `today`
    ///
    /// `current_streak` is defined purely against the log's own most recent
    /// entry; this predicate is the separate "is it live right now" check,
    /// with today supplied by the caller.
    pub fn is_on_track(&self, periodicity: Periodicity, today: NaiveDate) -> bool {
        match self.last_completed {
            None => false,
            Some(last) => (today - last).num_days() <= periodicity.as_days_i64(),
        }
    }
}

/// Length of the streak ending at the most recent completion
///
/// Walks backward from the latest date, extending the streak while each gap
/// stays within `periodicity` days, and stops at the first larger gap. Does
/// not consult today's date: a log whose latest entry is a year old still
/// reports the streak that ended then.
pub fn current_streak(periodicity: Periodicity, dates: &[NaiveDate]) -> u32 {
    let dates = distinct_sorted(dates);
    if dates.is_empty() {
        return 0;
    }

    // The most recent completion always starts a streak of at least one.
    let mut streak = 1;
    for pair in dates.windows(2).rev() {
        if (pair[1] - pair[0]).num_days() <= periodicity.as_days_i64() {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

/// Longest run of completions anywhere in the history
pub fn longest_streak(periodicity: Periodicity, dates: &[NaiveDate]) -> u32 {
    let dates = distinct_sorted(dates);
    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in dates.windows(2) {
        if (pair[1] - pair[0]).num_days() <= periodicity.as_days_i64() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    longest
}

/// Most recent completion date, or None for an empty log
pub fn last_completed(dates: &[NaiveDate]) -> Option<NaiveDate> {
    dates.iter().max().copied()
}

/// Count of events with the completed flag set
///
/// The one metric computed over the unfiltered event list: it counts flagged
/// rows, so the flag itself is part of the input.
pub fn total_completed(events: &[CompletionEvent]) -> u32 {
    events.iter().filter(|e| e.completed).count() as u32
}

/// Sort ascending and collapse duplicate calendar dates
///
/// Two completions on the same day count as one streak day; without the
/// dedup, a same-day pair (gap zero) would inflate the streak.
fn distinct_sorted(dates: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}
