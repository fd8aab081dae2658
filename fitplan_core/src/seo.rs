//! Descriptive text derived from a plan's goal, level and preferences.

use crate::{FitnessLevel, Goal, WorkoutPreference};

/// Title, description and keyword fields attached to a plan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeoText {
    pub title: String,
    pub content: String,
    pub keywords: String,
}

fn join_preferences(preferences: &[WorkoutPreference]) -> String {
    preferences
        .iter()
        .map(WorkoutPreference::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derive the three text fields
///
/// `days_per_week` is the value the user asked for, not the clamped one.
pub fn derive(
    goal: Goal,
    level: FitnessLevel,
    preferences: &[WorkoutPreference],
    days_per_week: u8,
) -> SeoText {
    let goal_lower = goal.as_str().to_lowercase();
    let level_lower = level.as_str().to_lowercase();
    let prefs = join_preferences(preferences);

    SeoText {
        title: format!("{} {} Workout Plan", level, goal),
        content: format!(
            "Follow this structured workout plan to {} as a {}. Engage in {} {} times a week.",
            goal_lower, level_lower, prefs, days_per_week
        ),
        keywords: format!("{}, {} workout, {}", goal_lower, level_lower, prefs),
    }
}
