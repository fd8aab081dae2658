//! Default exercise catalog.
//!
//! Exercises are grouped by muscle group. Order within a group is the
//! selection order used by the plan generator.

use crate::types::ExerciseRecord;
use crate::{FitnessLevel, WorkoutPreference};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::FitnessLevel::{Advanced, Beginner, Intermediate};
use crate::WorkoutPreference::{BodyweightExercises, Cardio, Hiit, Pilates, WeightTraining, Yoga};

/// Muscle-group keys present in the default catalog
pub const MUSCLE_GROUPS: &[&str] = &[
    "Chest",
    "Back",
    "Legs",
    "Shoulders",
    "Arms",
    "Core",
    "Cardio",
    "Full Body",
    "Flexibility",
];

/// Exercise records keyed by muscle group
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub groups: HashMap<String, Vec<ExerciseRecord>>,
}

/// Cached default catalog - built once and shared by every generation
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn exercise(
    name: &str,
    duration: &str,
    sets: &str,
    reps: &str,
    equipment: &str,
    levels: &[FitnessLevel],
    types: &[WorkoutPreference],
) -> ExerciseRecord {
    ExerciseRecord {
        name: name.into(),
        duration: duration.into(),
        default_sets: sets.into(),
        default_reps: reps.into(),
        equipment: equipment.into(),
        levels: levels.to_vec(),
        types: types.to_vec(),
    }
}

/// Builds the default catalog
///
/// **Note**: prefer `get_default_catalog()` outside tests.
#[rustfmt::skip]
pub fn build_default_catalog() -> Catalog {
    let mut groups = HashMap::new();

    groups.insert(
        "Chest".to_string(),
        vec![
            exercise("Push-ups", "10 reps", "3", "10", "None", &[Beginner, Intermediate, Advanced], &[BodyweightExercises, Hiit]),
            exercise("Dumbbell Bench Press", "45s", "3", "12", "Dumbbells, bench", &[Beginner, Intermediate], &[WeightTraining]),
            exercise("Barbell Bench Press", "60s", "4", "8", "Barbell, bench", &[Intermediate, Advanced], &[WeightTraining]),
            exercise("Incline Dumbbell Fly", "45s", "3", "12", "Dumbbells, incline bench", &[Intermediate, Advanced], &[WeightTraining]),
            exercise("Plyometric Push-ups", "30s", "3", "8", "None", &[Advanced], &[Hiit, BodyweightExercises]),
        ],
    );

    groups.insert(
        "Back".to_string(),
        vec![
            exercise("Lat Pulldown", "45s", "3", "12", "Cable machine", &[Beginner, Intermediate], &[WeightTraining]),
            exercise("Dumbbell Row", "45s", "3", "10 per side", "Dumbbell, bench", &[Beginner, Intermediate, Advanced], &[WeightTraining]),
            exercise("Pull-ups", "45s", "4", "8", "Pull-up bar", &[Intermediate, Advanced], &[WeightTraining, BodyweightExercises]),
            exercise("Superman Hold", "30s", "3", "10", "Mat", &[Beginner, Intermediate], &[BodyweightExercises, Pilates]),
            exercise("Renegade Row", "45s", "3", "8 per side", "Dumbbells", &[Advanced], &[Hiit, WeightTraining]),
        ],
    );

    groups.insert(
        "Legs".to_string(),
        vec![
            exercise("Goblet Squat", "45s", "3", "12", "Dumbbell", &[Beginner, Intermediate], &[WeightTraining]),
            exercise("Bodyweight Squat", "30s", "3", "15", "None", &[Beginner, Intermediate, Advanced], &[BodyweightExercises, Hiit]),
            exercise("Barbell Back Squat", "60s", "4", "8", "Barbell, squat rack", &[Intermediate, Advanced], &[WeightTraining]),
            exercise("Walking Lunges", "45s", "3", "10 per leg", "None", &[Beginner, Intermediate, Advanced], &[BodyweightExercises, Cardio]),
            exercise("Jump Squats", "30s", "4", "12", "None", &[Intermediate, Advanced], &[Hiit, Cardio]),
            exercise("Romanian Deadlift", "45s", "3", "10", "Barbell", &[Intermediate, Advanced], &[WeightTraining]),
        ],
    );

    groups.insert(
        "Shoulders".to_string(),
        vec![
            exercise("Dumbbell Shoulder Press", "45s", "3", "12", "Dumbbells", &[Beginner, Intermediate, Advanced], &[WeightTraining]),
            exercise("Lateral Raise", "30s", "3", "15", "Dumbbells", &[Beginner, Intermediate, Advanced], &[WeightTraining]),
            exercise("Pike Push-ups", "30s", "3", "10", "None", &[Intermediate, Advanced], &[BodyweightExercises]),
            exercise("Downward Dog", "60s", "3", "5 breaths", "Yoga mat", &[Beginner, Intermediate, Advanced], &[Yoga, Pilates]),
        ],
    );

    groups.insert(
        "Arms".to_string(),
        vec![
            exercise("Dumbbell Bicep Curl", "30s", "3", "12", "Dumbbells", &[Beginner, Intermediate, Advanced], &[WeightTraining]),
            exercise("Tricep Dips", "30s", "3", "10", "Bench", &[Beginner, Intermediate, Advanced], &[BodyweightExercises, WeightTraining]),
            exercise("Hammer Curl", "30s", "3", "12", "Dumbbells", &[Intermediate, Advanced], &[WeightTraining]),
            exercise("Diamond Push-ups", "30s", "3", "10", "None", &[Intermediate, Advanced], &[BodyweightExercises]),
        ],
    );

    groups.insert(
        "Core".to_string(),
        vec![
            exercise("Plank", "30s", "3", "1 hold", "Mat", &[Beginner, Intermediate, Advanced], &[BodyweightExercises, Pilates, Yoga]),
            exercise("Bicycle Crunches", "30s", "3", "20", "Mat", &[Beginner, Intermediate], &[BodyweightExercises, Hiit]),
            exercise("Mountain Climbers", "30s", "3", "20", "None", &[Intermediate, Advanced], &[Hiit, Cardio]),
            exercise("Pilates Hundred", "60s", "2", "100 pumps", "Mat", &[Beginner, Intermediate, Advanced], &[Pilates]),
            exercise("Hanging Leg Raise", "45s", "3", "10", "Pull-up bar", &[Advanced], &[WeightTraining, BodyweightExercises]),
        ],
    );

    groups.insert(
        "Cardio".to_string(),
        vec![
            exercise("Jumping Jacks", "60s", "3", "30", "None", &[Beginner, Intermediate, Advanced], &[Cardio, Hiit]),
            exercise("Brisk Walk", "20 min", "1", "Continuous", "None", &[Beginner, Intermediate], &[Cardio]),
            exercise("Bike Intervals", "15 min", "1", "30s on / 30s off", "Stationary bike", &[Intermediate, Advanced], &[Cardio, Hiit]),
            exercise("Burpees", "30s", "4", "10", "None", &[Intermediate, Advanced], &[Hiit, Cardio, BodyweightExercises]),
            exercise("Jump Rope", "60s", "4", "Continuous", "Jump rope", &[Beginner, Intermediate, Advanced], &[Cardio, Hiit]),
        ],
    );

    groups.insert(
        "Full Body".to_string(),
        vec![
            exercise("Kettlebell Swing", "45s", "4", "15", "Kettlebell", &[Intermediate, Advanced], &[WeightTraining, Hiit]),
            exercise("Dumbbell Thruster", "45s", "3", "12", "Dumbbells", &[Beginner, Intermediate, Advanced], &[WeightTraining, Hiit]),
            exercise("Deadlift", "60s", "4", "6", "Barbell", &[Intermediate, Advanced], &[WeightTraining]),
            exercise("Bear Crawl", "30s", "3", "20 m", "None", &[Beginner, Intermediate], &[BodyweightExercises, Hiit]),
            exercise("Sun Salutation", "5 min", "2", "5 rounds", "Yoga mat", &[Beginner, Intermediate, Advanced], &[Yoga]),
        ],
    );

    groups.insert(
        "Flexibility".to_string(),
        vec![
            exercise("Child's Pose", "60s", "2", "3 breaths", "Yoga mat", &[Beginner, Intermediate, Advanced], &[Yoga]),
            exercise("Standing Hamstring Stretch", "45s", "2", "1 per side", "None", &[Beginner, Intermediate, Advanced], &[Yoga, Pilates]),
            exercise("Pilates Roll-Up", "45s", "3", "8", "Mat", &[Beginner, Intermediate, Advanced], &[Pilates]),
            exercise("Pigeon Pose", "60s", "2", "1 per side", "Yoga mat", &[Intermediate, Advanced], &[Yoga]),
            exercise("Cat-Cow", "60s", "2", "10", "Yoga mat", &[Beginner, Intermediate, Advanced], &[Yoga, Pilates]),
        ],
    );

    Catalog { groups }
}

impl Catalog {
    /// Exercises of a muscle group in selection order
    ///
    /// An unknown group yields an empty slice.
    pub fn exercises_for(&self, muscle_group: &str) -> &[ExerciseRecord] {
        self.groups
            .get(muscle_group)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains_group(&self, muscle_group: &str) -> bool {
        self.groups.contains_key(muscle_group)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (group, records) in &self.groups {
            if group.is_empty() {
                errors.push("Catalog has a muscle group with an empty key".to_string());
            }
            if records.is_empty() {
                errors.push(format!("Muscle group '{}' has no exercises", group));
            }

            let mut seen = HashSet::new();
            for record in records {
                if record.name.is_empty() {
                    errors.push(format!("Muscle group '{}' has an exercise with empty name", group));
                } else if !seen.insert(record.name.as_str()) {
                    errors.push(format!(
                        "Muscle group '{}' lists '{}' more than once",
                        group, record.name
                    ));
                }
                if record.levels.is_empty() {
                    errors.push(format!("Exercise '{}' has no fitness levels", record.name));
                }
                if record.types.is_empty() {
                    errors.push(format!("Exercise '{}' has no preference types", record.name));
                }
            }
        }

        // Every level should be served by at least one exercise
        for level in FitnessLevel::ALL {
            let served = self
                .groups
                .values()
                .flatten()
                .any(|r| r.levels.contains(level));
            if !served {
                errors.push(format!("Catalog has no exercises for level {}", level));
            }
        }

        errors
    }
}
