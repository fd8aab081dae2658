//! Core domain types for plan generation.
//!
//! This module defines:
//! - Catalog records
//! - The generation request
//! - The generated plan and its response envelope

use crate::{Error, FitnessLevel, Goal, Result, WorkoutPreference};
use serde::{Deserialize, Serialize};

/// Fixed user-facing message for any generation failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate workout plan. Please try again.";

/// Message carried by a successful envelope
pub const GENERATION_SUCCEEDED_MESSAGE: &str = "Workout plan generated successfully";

// ============================================================================
// Catalog Types
// ============================================================================

/// A single exercise definition in the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub name: String,
    /// Free-form, e.g. "30s" or "10 reps"
    pub duration: String,
    pub default_sets: String,
    pub default_reps: String,
    pub equipment: String,
    pub levels: Vec<FitnessLevel>,
    pub types: Vec<WorkoutPreference>,
}

impl ExerciseRecord {
    /// Whether this record suits the level and any of the preference tags
    pub fn matches(&self, level: FitnessLevel, preferences: &[WorkoutPreference]) -> bool {
        self.levels.contains(&level) && self.types.iter().any(|t| preferences.contains(t))
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Form data submitted for plan generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub preferences: Vec<WorkoutPreference>,
    /// Collected but not used by generation
    #[serde(default)]
    pub health_conditions: Vec<String>,
    pub days_per_week: u8,
    pub session_duration: u32,
    pub plan_duration_weeks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_goals: Option<Vec<String>>,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Training frequency as reported back to the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub days_per_week: u8,
    pub session_duration: u32,
}

/// An exercise as it appears in a generated plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutExercise {
    pub name: String,
    pub duration: String,
    pub repetitions: String,
    pub sets: String,
    pub equipment: String,
}

impl From<&ExerciseRecord> for WorkoutExercise {
    fn from(record: &ExerciseRecord) -> Self {
        WorkoutExercise {
            name: record.name.clone(),
            duration: record.duration.clone(),
            repetitions: record.default_reps.clone(),
            sets: record.default_sets.clone(),
            equipment: record.equipment.clone(),
        }
    }
}

/// One training day of a plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayWorkout {
    pub day: String,
    pub exercises: Vec<WorkoutExercise>,
}

/// A complete generated weekly plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub total_weeks: u32,
    pub schedule: Schedule,
    pub exercises: Vec<DayWorkout>,
    pub seo_title: String,
    pub seo_content: String,
    pub seo_keywords: String,
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Outcome flag of a generation call
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Status/message/result wrapper returned by plan generation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanResponse {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<WorkoutPlan>,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "cacheTime")]
    pub cache_time: i64,
}

impl PlanResponse {
    pub fn success(plan: WorkoutPlan, cache_time: i64) -> Self {
        PlanResponse {
            status: ResponseStatus::Success,
            message: GENERATION_SUCCEEDED_MESSAGE.to_string(),
            result: Some(plan),
            cache_time,
        }
    }

    pub fn failure(cache_time: i64) -> Self {
        PlanResponse {
            status: ResponseStatus::Error,
            message: GENERATION_FAILED_MESSAGE.to_string(),
            result: None,
            cache_time,
        }
    }

    /// Whether the envelope carries a plan that may be rendered
    pub fn is_displayable(&self) -> bool {
        self.status == ResponseStatus::Success && self.result.is_some()
    }

    /// Borrow the plan of a successful envelope
    ///
    /// A non-success status and a missing result are the same error.
    pub fn plan(&self) -> Result<&WorkoutPlan> {
        match (&self.status, &self.result) {
            (ResponseStatus::Success, Some(plan)) => Ok(plan),
            _ => Err(Error::Generation(self.failure_message())),
        }
    }

    /// Take the plan out of a successful envelope
    pub fn into_plan(self) -> Result<WorkoutPlan> {
        let message = self.failure_message();
        match (self.status, self.result) {
            (ResponseStatus::Success, Some(plan)) => Ok(plan),
            _ => Err(Error::Generation(message)),
        }
    }

    /// Message to show when the envelope cannot be rendered
    pub fn failure_message(&self) -> String {
        if self.status == ResponseStatus::Success || self.message.is_empty() {
            GENERATION_FAILED_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> WorkoutPlan {
        WorkoutPlan {
            goal: Goal::LoseWeight,
            fitness_level: FitnessLevel::Intermediate,
            total_weeks: 4,
            schedule: Schedule {
                days_per_week: 3,
                session_duration: 30,
            },
            exercises: vec![DayWorkout {
                day: "Monday".into(),
                exercises: vec![],
            }],
            seo_title: "Intermediate Lose weight Workout Plan".into(),
            seo_content: String::new(),
            seo_keywords: String::new(),
        }
    }

    #[test]
    fn test_record_matches_level_and_any_preference() {
        let record = ExerciseRecord {
            name: "Burpees".into(),
            duration: "30s".into(),
            default_sets: "3".into(),
            default_reps: "10".into(),
            equipment: "None".into(),
            levels: vec![FitnessLevel::Intermediate, FitnessLevel::Advanced],
            types: vec![WorkoutPreference::Hiit, WorkoutPreference::Cardio],
        };

        assert!(record.matches(FitnessLevel::Advanced, &[WorkoutPreference::Cardio]));
        assert!(!record.matches(FitnessLevel::Beginner, &[WorkoutPreference::Cardio]));
        assert!(!record.matches(FitnessLevel::Advanced, &[WorkoutPreference::Yoga]));
        assert!(!record.matches(FitnessLevel::Advanced, &[]));
    }

    #[test]
    fn test_envelope_wire_format() {
        let response = PlanResponse::success(sample_plan(), 1_700_000_000_000);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["cacheTime"], 1_700_000_000_000_i64);
        assert_eq!(json["result"]["fitness_level"], "Intermediate");
        assert_eq!(json["result"]["schedule"]["days_per_week"], 3);
    }

    #[test]
    fn test_failure_envelope_omits_result() {
        let response = PlanResponse::failure(0);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], GENERATION_FAILED_MESSAGE);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_success_without_result_is_an_error() {
        let mut response = PlanResponse::success(sample_plan(), 0);
        response.result = None;

        assert!(!response.is_displayable());
        let err = response.into_plan().unwrap_err();
        assert!(err.to_string().contains(GENERATION_FAILED_MESSAGE));
    }

    #[test]
    fn test_request_optional_fields_default() {
        let json = r#"{
            "goal": "Build muscle",
            "fitness_level": "Beginner",
            "days_per_week": 3,
            "session_duration": 45,
            "plan_duration_weeks": 8
        }"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();

        assert!(request.preferences.is_empty());
        assert!(request.health_conditions.is_empty());
        assert_eq!(request.custom_goals, None);
    }
}
