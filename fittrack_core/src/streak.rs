//! Streak computation over the ledger's workout dates.
//!
//! A streak is a maximal run of calendar-consecutive dates that each have a
//! logged workout. The summary is recomputed from scratch after every
//! ledger mutation; at realistic data volumes (hundreds to low thousands
//! of dates) the O(n log n) full walk is cheap and always correct, so no
//! incremental update is attempted.

use crate::types::{DayRecord, StreakSummary};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Compute the streak summary from the ledger's day map
///
/// Day differences use calendar-date arithmetic (`NaiveDate`), so the walk
/// is immune to DST wall-clock artifacts.
///
/// `current_streak` is the length of the trailing run ending at the most
/// recent workout date. It does not check whether that date is today; a
/// streak that stopped a week ago still reports its final length.
pub fn compute(days: &BTreeMap<NaiveDate, DayRecord>) -> StreakSummary {
    // BTreeMap iteration is already date-ascending
    let workout_dates: Vec<NaiveDate> = days
        .iter()
        .filter(|(_, record)| record.workout.is_some())
        .map(|(date, _)| *date)
        .collect();

    if workout_dates.is_empty() {
        return StreakSummary::default();
    }

    let mut longest: u32 = 0;
    let mut run_length: u32 = 1;

    for pair in workout_dates.windows(2) {
        let gap = pair[1].signed_duration_since(pair[0]).num_days();
        if gap == 1 {
            run_length += 1;
        } else {
            longest = longest.max(run_length);
            run_length = 1;
        }
    }
    longest = longest.max(run_length);

    StreakSummary {
        // The final run is the trailing one
        current_streak: run_length,
        longest_streak: longest,
        total_workout_days: workout_dates.len() as u32,
        last_workout_date: workout_dates.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkoutSummary;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn workout_day() -> DayRecord {
        DayRecord {
            workout: Some(WorkoutSummary {
                workout_name: "Push Day".into(),
                exercises: vec!["Bench Press".into()],
                notes: None,
                duration_minutes: None,
            }),
            measurement: None,
            personal_records: vec![],
        }
    }

    fn days_from(dates: &[&str]) -> BTreeMap<NaiveDate, DayRecord> {
        dates.iter().map(|d| (date(d), workout_day())).collect()
    }

    #[test]
    fn test_empty_ledger_has_zero_streaks() {
        let summary = compute(&BTreeMap::new());
        assert_eq!(summary, StreakSummary::default());
    }

    #[test]
    fn test_consecutive_run_current_equals_longest() {
        let days = days_from(&["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]);
        let summary = compute(&days);
        assert_eq!(summary.current_streak, 4);
        assert_eq!(summary.longest_streak, 4);
        assert_eq!(summary.total_workout_days, 4);
        assert_eq!(summary.last_workout_date, Some(date("2024-01-04")));
    }

    #[test]
    fn test_single_gap_longest_is_max_current_is_trailing() {
        // Leading run of 3, gap, trailing run of 2
        let days = days_from(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-07",
            "2024-01-08",
        ]);
        let summary = compute(&days);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.total_workout_days, 5);
    }

    #[test]
    fn test_trailing_run_longer_than_leading() {
        let days = days_from(&["2024-01-01", "2024-01-05", "2024-01-06", "2024-01-07"]);
        let summary = compute(&days);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.current_streak, 3);
    }

    #[test]
    fn test_single_workout_day() {
        let days = days_from(&["2024-03-15"]);
        let summary = compute(&days);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 1);
        assert_eq!(summary.total_workout_days, 1);
        assert_eq!(summary.last_workout_date, Some(date("2024-03-15")));
    }

    #[test]
    fn test_dormant_streak_keeps_its_length() {
        // No "is this streak still alive" check: a run that ended long ago
        // still reports its final length as the current streak.
        let days = days_from(&["2023-06-01", "2023-06-02", "2023-06-03"]);
        let summary = compute(&days);
        assert_eq!(summary.current_streak, 3);
    }

    #[test]
    fn test_non_workout_days_are_ignored() {
        let mut days = days_from(&["2024-01-01", "2024-01-02"]);
        // A measurement-only day between workout days does not extend the run
        days.insert(
            date("2024-01-03"),
            DayRecord {
                workout: None,
                measurement: Some(crate::types::Measurement {
                    weight: 70.0,
                    height: None,
                    body_fat_percent: None,
                    unit: crate::types::UnitSystem::Metric,
                }),
                personal_records: vec![],
            },
        );
        days.extend(days_from(&["2024-01-05"]));

        let summary = compute(&days);
        assert_eq!(summary.total_workout_days, 3);
        assert_eq!(summary.longest_streak, 2);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let days = days_from(&["2024-01-31", "2024-02-01", "2024-02-02"]);
        let summary = compute(&days);
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.longest_streak, 3);
    }
}
