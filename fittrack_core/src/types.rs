//! Core domain types for the Fittrack system.
//!
//! This module defines the fundamental types used throughout the system:
//! - The activity ledger and its per-day records
//! - Workouts, body measurements, and personal records
//! - Derived streak summary
//! - Exercise catalog entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Current on-disk schema version for the persisted ledger snapshot
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Units
// ============================================================================

/// Measurement unit system
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Us,
}

impl UnitSystem {
    /// Weight unit label for display
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Us => "lb",
        }
    }

    /// Height/length unit label for display
    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Us => "in",
        }
    }
}

// ============================================================================
// Per-day record types
// ============================================================================

/// A workout recorded for a calendar date
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    pub workout_name: String,
    /// Exercise names in the order they were performed
    pub exercises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

/// A body measurement recorded for a calendar date
///
/// Values are stored in the unit system they were recorded in. The `unit`
/// tag is authoritative; conversion happens only at display boundaries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// A personal record (best weight x reps for an exercise)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonalRecord {
    pub id: Uuid,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub unit: UnitSystem,
    pub recorded_date: NaiveDate,
}

/// Everything recorded for a single calendar date
///
/// An empty `DayRecord` (no workout, no measurement, no PRs) must never be
/// stored in the ledger; the date entry is pruned instead.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DayRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personal_records: Vec<PersonalRecord>,
}

impl DayRecord {
    /// True when the record carries no content and must be pruned
    pub fn is_empty(&self) -> bool {
        self.workout.is_none() && self.measurement.is_none() && self.personal_records.is_empty()
    }
}

// ============================================================================
// Streak summary
// ============================================================================

/// Derived streak statistics over the ledger's workout dates
///
/// Recomputed from scratch after every ledger mutation and persisted as
/// part of the ledger snapshot. Never hand-edited.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_workout_days: u32,
    #[serde(default)]
    pub last_workout_date: Option<NaiveDate>,
}

// ============================================================================
// Ledger
// ============================================================================

/// The date-keyed record of workouts, measurements, and personal records
///
/// `BTreeMap<NaiveDate, _>` keeps dates in calendar order, which for ISO
/// dates coincides with lexicographic order of their string form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityLedger {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub days: BTreeMap<NaiveDate, DayRecord>,
    #[serde(default)]
    pub streak: StreakSummary,
}

fn default_schema_version() -> u32 {
    LEDGER_SCHEMA_VERSION
}

impl Default for ActivityLedger {
    fn default() -> Self {
        Self {
            schema_version: LEDGER_SCHEMA_VERSION,
            days: BTreeMap::new(),
            streak: StreakSummary::default(),
        }
    }
}

// ============================================================================
// Exercise catalog types
// ============================================================================

/// Training category of a catalog exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Hypertrophy,
    Endurance,
}

/// Equipment required by a catalog exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbell,
    Barbell,
    Machine,
    ResistanceBand,
    TrapBar,
    Plate,
}

/// A reference exercise definition (read-only catalog data)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_group: String,
    pub equipment: Equipment,
    pub description: String,
}
