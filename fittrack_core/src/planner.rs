//! Workout planning: the in-progress draft and saved templates.
//!
//! The draft is a scratch workout being assembled (persisted under the
//! `draft` key so it survives restarts); saving it as a template appends
//! to the template list and resets the draft. A template can later be
//! logged to the ledger as a given date's workout.

use crate::types::{ActivityLedger, WorkoutSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planned set within a draft or template exercise
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SetPlan {
    pub reps: u32,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An exercise within a draft or template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub exercise_name: String,
    pub sets: Vec<SetPlan>,
}

/// The in-progress workout being assembled
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct WorkoutDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

/// A saved, reusable workout
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: Uuid,
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutDraft {
    /// Add an exercise to the draft with one empty set
    ///
    /// Declines when the draft already contains that exercise id.
    pub fn add_exercise(&mut self, exercise_id: &str, exercise_name: &str) -> bool {
        if self.exercises.iter().any(|e| e.exercise_id == exercise_id) {
            tracing::warn!("'{}' is already in the draft", exercise_name);
            return false;
        }
        self.exercises.push(PlannedExercise {
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            sets: vec![SetPlan::default()],
        });
        true
    }

    /// Remove an exercise by position
    pub fn remove_exercise(&mut self, index: usize) -> bool {
        if index >= self.exercises.len() {
            return false;
        }
        self.exercises.remove(index);
        true
    }

    /// Append an empty set to the exercise at `index`
    pub fn add_set(&mut self, index: usize) -> bool {
        let Some(exercise) = self.exercises.get_mut(index) else {
            return false;
        };
        exercise.sets.push(SetPlan::default());
        true
    }

    /// Remove a set from the exercise at `exercise_index`
    pub fn remove_set(&mut self, exercise_index: usize, set_index: usize) -> bool {
        let Some(exercise) = self.exercises.get_mut(exercise_index) else {
            return false;
        };
        if set_index >= exercise.sets.len() {
            return false;
        }
        exercise.sets.remove(set_index);
        true
    }

    /// Replace a set's reps/weight
    pub fn update_set(&mut self, exercise_index: usize, set_index: usize, set: SetPlan) -> bool {
        let Some(exercise) = self.exercises.get_mut(exercise_index) else {
            return false;
        };
        let Some(existing) = exercise.sets.get_mut(set_index) else {
            return false;
        };
        *existing = set;
        true
    }

    /// Save the draft as a new template and reset the draft
    ///
    /// Requires a non-blank name and at least one exercise; otherwise the
    /// save is declined and the draft is left untouched.
    pub fn save_as_template(&mut self, templates: &mut Vec<WorkoutTemplate>) -> Option<Uuid> {
        if self.name.trim().is_empty() {
            tracing::warn!("Declining template save: blank name");
            return None;
        }
        if self.exercises.is_empty() {
            tracing::warn!("Declining template save: no exercises");
            return None;
        }

        let id = Uuid::new_v4();
        templates.push(WorkoutTemplate {
            id,
            name: std::mem::take(&mut self.name),
            exercises: std::mem::take(&mut self.exercises),
        });
        tracing::debug!("Saved template {}", id);
        Some(id)
    }
}

/// Delete a template by id
pub fn delete_template(templates: &mut Vec<WorkoutTemplate>, id: Uuid) -> bool {
    let before = templates.len();
    templates.retain(|t| t.id != id);
    templates.len() != before
}

/// Record a template as `date`'s workout in the ledger
pub fn log_template(
    ledger: &mut ActivityLedger,
    templates: &[WorkoutTemplate],
    template_id: Uuid,
    date: NaiveDate,
) -> bool {
    let Some(template) = templates.iter().find(|t| t.id == template_id) else {
        tracing::warn!("No template with id {}", template_id);
        return false;
    };

    ledger.upsert_workout(
        date,
        WorkoutSummary {
            workout_name: template.name.clone(),
            exercises: template
                .exercises
                .iter()
                .map(|e| e.exercise_name.clone())
                .collect(),
            notes: None,
            duration_minutes: None,
        },
    )
}
