/// Property-style tests for the streak engine over its public API
use chrono::NaiveDate;
use habitual::{
    current_streak, last_completed, longest_streak, total_completed, CompletionEvent, HabitId,
    Periodicity, Streak,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn p(days: u32) -> Periodicity {
    Periodicity::new(days).unwrap()
}

/// All orderings of a small date set must yield identical metrics
#[test]
fn test_metrics_are_permutation_invariant() {
    let a = d("2023-07-30");
    let b = d("2023-07-31");
    let c = d("2023-08-03");
    let permutations = [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ];

    let baseline = (
        current_streak(p(1), &permutations[0]),
        longest_streak(p(1), &permutations[0]),
        last_completed(&permutations[0]),
    );

    for dates in &permutations {
        assert_eq!(current_streak(p(1), dates), baseline.0);
        assert_eq!(longest_streak(p(1), dates), baseline.1);
        assert_eq!(last_completed(dates), baseline.2);
    }
}

#[test]
fn test_longest_dominates_current_across_periodicities() {
    let dates = [
        d("2023-06-01"),
        d("2023-06-02"),
        d("2023-06-03"),
        d("2023-06-10"),
        d("2023-06-20"),
        d("2023-06-21"),
    ];

    for days in 1..=30 {
        assert!(
            longest_streak(p(days), &dates) >= current_streak(p(days), &dates),
            "violated at periodicity {}",
            days
        );
    }
}

#[test]
fn test_boundary_gap_inclusive_exclusive() {
    for days in [1u32, 3, 7, 30] {
        let start = d("2023-01-01");
        let within = start + chrono::Duration::days(days as i64);
        let beyond = start + chrono::Duration::days(days as i64 + 1);

        assert_eq!(current_streak(p(days), &[start, within]), 2);
        assert_eq!(current_streak(p(days), &[start, beyond]), 1);
        assert_eq!(longest_streak(p(days), &[start, within]), 2);
        assert_eq!(longest_streak(p(days), &[start, beyond]), 1);
    }
}

#[test]
fn test_weekly_periodicity_tolerates_irregular_spacing() {
    // Completions 5-7 days apart all stay within a weekly grace window
    let dates = [d("2023-06-01"), d("2023-06-06"), d("2023-06-13"), d("2023-06-19")];

    assert_eq!(current_streak(p(7), &dates), 4);
    assert_eq!(longest_streak(p(7), &dates), 4);
    assert_eq!(current_streak(p(1), &dates), 1);
}

#[test]
fn test_total_completed_counts_flags_not_dates() {
    let id = HabitId(1);
    // Duplicate dates still count individually toward the total; only the
    // streak math collapses them.
    let events = vec![
        CompletionEvent::from_row(id, d("2023-08-01"), true),
        CompletionEvent::from_row(id, d("2023-08-01"), true),
        CompletionEvent::from_row(id, d("2023-08-02"), false),
    ];

    assert_eq!(total_completed(&events), 2);
    let streak = Streak::from_events(id, p(1), &events);
    assert_eq!(streak.current_streak, 1);
    assert_eq!(streak.total_completed, 2);
}

#[test]
fn test_current_streak_ignores_todays_date() {
    // A streak that ended long ago still reports its length; liveness is
    // the separate is_on_track predicate.
    let dates = [d("2020-01-01"), d("2020-01-02")];
    assert_eq!(current_streak(p(1), &dates), 2);

    let streak = Streak::from_events(
        HabitId(1),
        p(1),
        &[
            CompletionEvent::new(HabitId(1), d("2020-01-01")),
            CompletionEvent::new(HabitId(1), d("2020-01-02")),
        ],
    );
    assert!(!streak.is_on_track(p(1), d("2023-08-01")));
}

#[test]
fn test_periodicity_validation_is_the_engine_gate() {
    assert_eq!(
        Periodicity::from_raw(0).unwrap_err(),
        habitual::DomainError::InvalidPeriodicity(0)
    );
    assert_eq!(
        Periodicity::from_raw(-7).unwrap_err(),
        habitual::DomainError::InvalidPeriodicity(-7)
    );
}
