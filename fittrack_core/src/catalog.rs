//! Default catalog of reference exercises.
//!
//! Read-only data keyed by muscle group and equipment type, used by the
//! planner when picking exercises. Built once and cached.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The complete catalog of reference exercises
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    pub exercises: HashMap<String, Exercise>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of reference exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing.
pub fn build_default_catalog() -> ExerciseCatalog {
    let mut exercises = HashMap::new();

    let entries = [
        // ====================================================================
        // Back
        // ====================================================================
        Exercise {
            id: "pull-ups".into(),
            name: "Pull-ups".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "back".into(),
            equipment: Equipment::Bodyweight,
            description: "Classic bodyweight exercise for back development".into(),
        },
        Exercise {
            id: "db-row".into(),
            name: "Dumbbell Row".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "back".into(),
            equipment: Equipment::Dumbbell,
            description: "Single-arm back exercise for muscle development".into(),
        },
        Exercise {
            id: "barbell-row".into(),
            name: "Barbell Row".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "back".into(),
            equipment: Equipment::Barbell,
            description: "Compound movement for back thickness".into(),
        },
        Exercise {
            id: "lat-pulldown".into(),
            name: "Lat Pulldown".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "back".into(),
            equipment: Equipment::Machine,
            description: "Machine-based vertical pulling movement".into(),
        },
        // ====================================================================
        // Chest
        // ====================================================================
        Exercise {
            id: "push-ups".into(),
            name: "Push-ups".into(),
            category: ExerciseCategory::Endurance,
            muscle_group: "chest".into(),
            equipment: Equipment::Bodyweight,
            description: "Fundamental pushing movement for chest and triceps".into(),
        },
        Exercise {
            id: "bench-press".into(),
            name: "Bench Press".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "chest".into(),
            equipment: Equipment::Barbell,
            description: "The classic barbell chest press".into(),
        },
        Exercise {
            id: "db-fly".into(),
            name: "Dumbbell Fly".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "chest".into(),
            equipment: Equipment::Dumbbell,
            description: "Isolation movement stretching the pecs".into(),
        },
        Exercise {
            id: "cable-crossover".into(),
            name: "Cable Crossover".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "chest".into(),
            equipment: Equipment::Machine,
            description: "Constant-tension chest isolation on the cable stack".into(),
        },
        // ====================================================================
        // Legs
        // ====================================================================
        Exercise {
            id: "squat".into(),
            name: "Back Squat".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "legs".into(),
            equipment: Equipment::Barbell,
            description: "Compound lower-body strength movement".into(),
        },
        Exercise {
            id: "trap-bar-deadlift".into(),
            name: "Trap Bar Deadlift".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "legs".into(),
            equipment: Equipment::TrapBar,
            description: "Hip hinge with a neutral grip and upright torso".into(),
        },
        Exercise {
            id: "lunges".into(),
            name: "Walking Lunges".into(),
            category: ExerciseCategory::Endurance,
            muscle_group: "legs".into(),
            equipment: Equipment::Bodyweight,
            description: "Unilateral leg work for balance and endurance".into(),
        },
        Exercise {
            id: "leg-press".into(),
            name: "Leg Press".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "legs".into(),
            equipment: Equipment::Machine,
            description: "Machine-supported quad-dominant pressing".into(),
        },
        // ====================================================================
        // Shoulders
        // ====================================================================
        Exercise {
            id: "overhead-press".into(),
            name: "Overhead Press".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "shoulders".into(),
            equipment: Equipment::Barbell,
            description: "Standing barbell press for shoulder strength".into(),
        },
        Exercise {
            id: "lateral-raise".into(),
            name: "Lateral Raise".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "shoulders".into(),
            equipment: Equipment::Dumbbell,
            description: "Isolation for the lateral deltoid".into(),
        },
        Exercise {
            id: "band-pull-apart".into(),
            name: "Band Pull-Apart".into(),
            category: ExerciseCategory::Endurance,
            muscle_group: "shoulders".into(),
            equipment: Equipment::ResistanceBand,
            description: "High-rep rear-delt and upper-back work".into(),
        },
        // ====================================================================
        // Arms
        // ====================================================================
        Exercise {
            id: "db-curl".into(),
            name: "Dumbbell Curl".into(),
            category: ExerciseCategory::Hypertrophy,
            muscle_group: "arms".into(),
            equipment: Equipment::Dumbbell,
            description: "Biceps isolation curl".into(),
        },
        Exercise {
            id: "dips".into(),
            name: "Dips".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "arms".into(),
            equipment: Equipment::Bodyweight,
            description: "Bodyweight triceps and chest pressing".into(),
        },
        // ====================================================================
        // Core
        // ====================================================================
        Exercise {
            id: "plank".into(),
            name: "Plank".into(),
            category: ExerciseCategory::Endurance,
            muscle_group: "core".into(),
            equipment: Equipment::Bodyweight,
            description: "Isometric trunk stability hold".into(),
        },
        Exercise {
            id: "weighted-situp".into(),
            name: "Weighted Sit-up".into(),
            category: ExerciseCategory::Strength,
            muscle_group: "core".into(),
            equipment: Equipment::Plate,
            description: "Loaded trunk flexion holding a plate".into(),
        },
        // ====================================================================
        // Neck
        // ====================================================================
        Exercise {
            id: "neck-flexion".into(),
            name: "Neck Flexion".into(),
            category: ExerciseCategory::Endurance,
            muscle_group: "neck".into(),
            equipment: Equipment::Plate,
            description: "Controlled neck flexion against light plate resistance".into(),
        },
    ];

    for exercise in entries {
        exercises.insert(exercise.id.clone(), exercise);
    }

    ExerciseCatalog { exercises }
}

impl ExerciseCatalog {
    /// Exercises for a muscle group, sorted by id for stable listings
    pub fn by_muscle_group(&self, muscle_group: &str) -> Vec<&Exercise> {
        let mut matches: Vec<_> = self
            .exercises
            .values()
            .filter(|e| e.muscle_group == muscle_group)
            .collect();
        matches.sort_by_key(|e| &e.id);
        matches
    }

    /// Exercises usable with a given piece of equipment, sorted by id
    pub fn by_equipment(&self, equipment: &Equipment) -> Vec<&Exercise> {
        let mut matches: Vec<_> = self
            .exercises
            .values()
            .filter(|e| &e.equipment == equipment)
            .collect();
        matches.sort_by_key(|e| &e.id);
        matches
    }

    /// Look up an exercise by id
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.get(id)
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of human-readable problems; empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (key, exercise) in &self.exercises {
            if key != &exercise.id {
                errors.push(format!(
                    "Exercise keyed '{}' carries id '{}'",
                    key, exercise.id
                ));
            }
            if exercise.name.trim().is_empty() {
                errors.push(format!("Exercise '{}' has an empty name", key));
            }
            if exercise.muscle_group.trim().is_empty() {
                errors.push(format!("Exercise '{}' has an empty muscle group", key));
            }
        }

        errors
    }
}
