//! Activity ledger mutations and accessors.
//!
//! The ledger is the single authoritative mapping from calendar date to
//! that day's recorded activity (workout, body measurement, personal
//! records). All mutations are synchronous and total: malformed input is
//! declined as a no-op (returning `false`), never an error or panic.
//! Every applied mutation recomputes the streak summary from scratch.

use crate::streak;
use crate::types::{ActivityLedger, Measurement, PersonalRecord, WorkoutSummary};
use chrono::NaiveDate;
use uuid::Uuid;

impl ActivityLedger {
    /// Replace or create the workout for `date`
    ///
    /// Declines when the workout name is blank.
    pub fn upsert_workout(&mut self, date: NaiveDate, workout: WorkoutSummary) -> bool {
        if workout.workout_name.trim().is_empty() {
            tracing::warn!("Declining workout for {}: blank name", date);
            return false;
        }

        self.days.entry(date).or_default().workout = Some(workout);
        self.recompute_streak();
        tracing::debug!("Logged workout for {}", date);
        true
    }

    /// Remove the workout for `date`, pruning the entry if it becomes empty
    pub fn delete_workout(&mut self, date: NaiveDate) -> bool {
        let Some(record) = self.days.get_mut(&date) else {
            return false;
        };
        if record.workout.take().is_none() {
            return false;
        }
        self.prune_if_empty(date);
        self.recompute_streak();
        tracing::debug!("Deleted workout for {}", date);
        true
    }

    /// Replace or create the body measurement for `date`
    ///
    /// Declines when the weight is not a finite positive number. The
    /// measurement's unit tag is stored as-is; no conversion happens here.
    pub fn upsert_measurement(&mut self, date: NaiveDate, measurement: Measurement) -> bool {
        if !measurement.weight.is_finite() || measurement.weight <= 0.0 {
            tracing::warn!("Declining measurement for {}: invalid weight", date);
            return false;
        }

        self.days.entry(date).or_default().measurement = Some(measurement);
        self.recompute_streak();
        tracing::debug!("Recorded measurement for {}", date);
        true
    }

    /// Remove the measurement for `date`, pruning the entry if it becomes empty
    pub fn delete_measurement(&mut self, date: NaiveDate) -> bool {
        let Some(record) = self.days.get_mut(&date) else {
            return false;
        };
        if record.measurement.take().is_none() {
            return false;
        }
        self.prune_if_empty(date);
        self.recompute_streak();
        tracing::debug!("Deleted measurement for {}", date);
        true
    }

    /// Add a personal record to `date`
    ///
    /// Declines invalid records and duplicate ids.
    pub fn add_personal_record(&mut self, date: NaiveDate, pr: PersonalRecord) -> bool {
        if !Self::valid_pr(&pr) {
            tracing::warn!("Declining PR for {}: invalid fields", date);
            return false;
        }
        let record = self.days.entry(date).or_default();
        if record.personal_records.iter().any(|p| p.id == pr.id) {
            tracing::warn!("Declining PR for {}: duplicate id {}", date, pr.id);
            return false;
        }
        record.personal_records.push(pr);
        self.recompute_streak();
        true
    }

    /// Replace the personal record with `id` on `date`
    ///
    /// The replacement keeps `id` regardless of the id carried by `updated`.
    pub fn edit_personal_record(
        &mut self,
        date: NaiveDate,
        id: Uuid,
        mut updated: PersonalRecord,
    ) -> bool {
        if !Self::valid_pr(&updated) {
            tracing::warn!("Declining PR edit for {}: invalid fields", date);
            return false;
        }
        let Some(record) = self.days.get_mut(&date) else {
            return false;
        };
        let Some(existing) = record.personal_records.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        updated.id = id;
        *existing = updated;
        self.recompute_streak();
        true
    }

    /// Delete the personal record with `id` on `date`
    ///
    /// Removing the last PR on a date with no workout or measurement
    /// removes the whole date entry.
    pub fn delete_personal_record(&mut self, date: NaiveDate, id: Uuid) -> bool {
        let Some(record) = self.days.get_mut(&date) else {
            return false;
        };
        let before = record.personal_records.len();
        record.personal_records.retain(|p| p.id != id);
        if record.personal_records.len() == before {
            return false;
        }
        self.prune_if_empty(date);
        self.recompute_streak();
        true
    }

    /// Recompute the derived streak summary from the day map
    pub fn recompute_streak(&mut self) {
        self.streak = streak::compute(&self.days);
    }

    fn prune_if_empty(&mut self, date: NaiveDate) {
        if self.days.get(&date).is_some_and(|r| r.is_empty()) {
            self.days.remove(&date);
        }
    }

    fn valid_pr(pr: &PersonalRecord) -> bool {
        !pr.exercise_name.trim().is_empty()
            && pr.weight.is_finite()
            && pr.weight > 0.0
            && pr.reps >= 1
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// The record for a given date, if any
    pub fn day(&self, date: NaiveDate) -> Option<&crate::types::DayRecord> {
        self.days.get(&date)
    }

    /// All body measurements, date-ascending
    pub fn measurement_history(&self) -> Vec<(NaiveDate, &Measurement)> {
        self.days
            .iter()
            .filter_map(|(date, record)| record.measurement.as_ref().map(|m| (*date, m)))
            .collect()
    }

    /// All personal records across dates, date-ascending
    pub fn personal_records(&self) -> Vec<&PersonalRecord> {
        self.days
            .values()
            .flat_map(|record| record.personal_records.iter())
            .collect()
    }
}
