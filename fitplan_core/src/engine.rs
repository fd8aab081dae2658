//! Plan generation.
//!
//! Selection is a fixed filter over the static tables:
//! - Clamp days per week to pick a split row
//! - For each day, take up to two matching exercises per muscle group
//! - Derive the descriptive text and wrap everything in an envelope

use crate::catalog::Catalog;
use crate::split::{self, SplitTable, DAY_NAMES};
use crate::{
    get_default_catalog, get_default_split_table, seo, DayWorkout, Error, FitnessLevel,
    PlanRequest, PlanResponse, Result, Schedule, WorkoutExercise, WorkoutPlan,
    WorkoutPreference,
};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Maximum exercises taken from each muscle group on a day
pub const EXERCISES_PER_GROUP: usize = 2;

/// Select up to `count` exercises of a muscle group
///
/// Records are taken in catalog order when their levels include `level` and
/// their types share at least one tag with `preferences`. Unknown groups and
/// empty preference lists yield no exercises.
pub fn select_exercises(
    catalog: &Catalog,
    muscle_group: &str,
    preferences: &[WorkoutPreference],
    level: FitnessLevel,
    count: usize,
) -> Vec<WorkoutExercise> {
    catalog
        .exercises_for(muscle_group)
        .iter()
        .filter(|record| record.matches(level, preferences))
        .take(count)
        .map(WorkoutExercise::from)
        .collect()
}

/// Build the plan for one training day
///
/// `index` is the day's position in the week and selects its label.
pub fn build_day(
    catalog: &Catalog,
    index: usize,
    muscle_groups: &[String],
    preferences: &[WorkoutPreference],
    level: FitnessLevel,
) -> Result<DayWorkout> {
    let day = DAY_NAMES.get(index).ok_or_else(|| {
        Error::Generation(format!(
            "Day index {} exceeds the {} available day names",
            index,
            DAY_NAMES.len()
        ))
    })?;

    let exercises = muscle_groups
        .iter()
        .flat_map(|group| {
            select_exercises(catalog, group, preferences, level, EXERCISES_PER_GROUP)
        })
        .collect();

    Ok(DayWorkout {
        day: day.to_string(),
        exercises,
    })
}

/// Generates plans from a catalog and split table
#[derive(Clone, Debug)]
pub struct PlanGenerator<'a> {
    catalog: &'a Catalog,
    splits: &'a SplitTable,
    simulated_delay: Duration,
}

impl Default for PlanGenerator<'static> {
    fn default() -> Self {
        PlanGenerator::new(get_default_catalog(), get_default_split_table())
    }
}

impl<'a> PlanGenerator<'a> {
    pub fn new(catalog: &'a Catalog, splits: &'a SplitTable) -> Self {
        Self {
            catalog,
            splits,
            simulated_delay: Duration::ZERO,
        }
    }

    /// Block for `delay` before each response is returned
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    /// Build the plan itself, without the envelope
    pub fn build_plan(&self, request: &PlanRequest) -> Result<WorkoutPlan> {
        let clamped = split::clamp_days(request.days_per_week);
        if clamped != request.days_per_week {
            tracing::debug!(
                "Requested {} days per week, using the {}-day split",
                request.days_per_week,
                clamped
            );
        }

        let row = self.splits.row_for(request.days_per_week).ok_or_else(|| {
            Error::Generation(format!("No split defined for {} days per week", clamped))
        })?;

        let days = row
            .iter()
            .enumerate()
            .map(|(index, groups)| {
                build_day(
                    self.catalog,
                    index,
                    groups,
                    &request.preferences,
                    request.fitness_level,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let text = seo::derive(
            request.goal,
            request.fitness_level,
            &request.preferences,
            request.days_per_week,
        );

        Ok(WorkoutPlan {
            goal: request.goal,
            fitness_level: request.fitness_level,
            total_weeks: request.plan_duration_weeks,
            schedule: Schedule {
                days_per_week: request.days_per_week,
                session_duration: request.session_duration,
            },
            exercises: days,
            seo_title: text.title,
            seo_content: text.content,
            seo_keywords: text.keywords,
        })
    }

    /// Generate an envelope stamped with `now`
    ///
    /// Failures never leak a partial plan: the envelope carries the error
    /// status and the fixed user-facing message instead.
    pub fn generate_at(&self, request: &PlanRequest, now: DateTime<Utc>) -> PlanResponse {
        let response = match self.build_plan(request) {
            Ok(plan) => {
                tracing::info!(
                    "Generated {} day plan: {}",
                    plan.exercises.len(),
                    plan.seo_title
                );
                PlanResponse::success(plan, now.timestamp_millis())
            }
            Err(e) => {
                tracing::error!("Plan generation failed: {}", e);
                PlanResponse::failure(now.timestamp_millis())
            }
        };

        if !self.simulated_delay.is_zero() {
            std::thread::sleep(self.simulated_delay);
        }

        response
    }

    /// Generate an envelope stamped with the current time
    pub fn generate(&self, request: &PlanRequest) -> PlanResponse {
        self.generate_at(request, Utc::now())
    }
}

/// Generate a plan from the default tables
pub fn generate_workout_plan(request: &PlanRequest) -> PlanResponse {
    PlanGenerator::default().generate(request)
}
