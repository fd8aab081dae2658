//! PDF layout of a generated plan.
//!
//! Produces a [`PdfDocument`] from a successful envelope: a title, five
//! overview lines, then each day's heading and exercises, starting a new
//! page whenever the cursor passes the bottom threshold. A footer with the
//! export date goes on the last page.

use crate::pdf::{self, FontStyle, PdfDocument, Rgb, TextItem};
use crate::{Error, PlanResponse, Result, WorkoutPlan};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

const TITLE_COLOR: Rgb = Rgb(75, 85, 99);
const MUTED_COLOR: Rgb = Rgb(107, 114, 128);
const DAY_COLOR: Rgb = Rgb(79, 70, 229);
const EXERCISE_COLOR: Rgb = Rgb(31, 41, 55);
const FOOTER_COLOR: Rgb = Rgb(156, 163, 175);

/// Page geometry, in millimetres
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PageLayout {
    #[serde(default = "default_page_width")]
    pub page_width_mm: f32,

    #[serde(default = "default_page_height")]
    pub page_height_mm: f32,

    /// Left/right margin, also the top of every page
    #[serde(default = "default_margin")]
    pub margin_mm: f32,

    /// A new page starts once the cursor is this close to the bottom edge
    #[serde(default = "default_bottom_threshold")]
    pub bottom_threshold_mm: f32,
}

// A4 portrait
fn default_page_width() -> f32 {
    210.0
}

fn default_page_height() -> f32 {
    297.0
}

fn default_margin() -> f32 {
    20.0
}

fn default_bottom_threshold() -> f32 {
    40.0
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width_mm: default_page_width(),
            page_height_mm: default_page_height(),
            margin_mm: default_margin(),
            bottom_threshold_mm: default_bottom_threshold(),
        }
    }
}

impl PageLayout {
    /// Check the geometry leaves room for content
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
            ("margin_mm", self.margin_mm),
            ("bottom_threshold_mm", self.bottom_threshold_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(Error::Config(format!("{} is not finite ({})", name, value)));
            }
        }
        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return Err(Error::Config(format!(
                "page size {}x{}mm must be positive",
                self.page_width_mm, self.page_height_mm
            )));
        }
        if self.page_width_mm <= 2.0 * self.margin_mm {
            return Err(Error::Config(format!(
                "page width {}mm leaves no room inside {}mm margins",
                self.page_width_mm, self.margin_mm
            )));
        }
        if self.margin_mm < 0.0 {
            return Err(Error::Config(format!("negative margin {}mm", self.margin_mm)));
        }
        if self.bottom_threshold_mm < FOOTER_OFFSET_MM {
            return Err(Error::Config(format!(
                "bottom threshold must be at least {}mm",
                FOOTER_OFFSET_MM
            )));
        }
        if self.page_height_mm <= self.margin_mm + self.bottom_threshold_mm {
            return Err(Error::Config(format!(
                "page height {}mm leaves no room between {}mm margin and {}mm threshold",
                self.page_height_mm, self.margin_mm, self.bottom_threshold_mm
            )));
        }
        Ok(())
    }

    fn break_line(&self) -> f32 {
        self.page_height_mm - self.bottom_threshold_mm
    }
}

/// Footer baseline distance from the bottom edge
const FOOTER_OFFSET_MM: f32 = 10.0;

struct Cursor<'a> {
    doc: PdfDocument,
    layout: &'a PageLayout,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            doc: PdfDocument::new(layout.page_width_mm, layout.page_height_mm),
            layout,
            y: layout.margin_mm,
        }
    }

    fn break_if_needed(&mut self) {
        if self.y > self.layout.break_line() {
            self.doc.add_page();
            self.y = self.layout.margin_mm;
        }
    }

    fn line(&mut self, indent: f32, size: f32, style: FontStyle, color: Rgb, text: String) {
        self.doc.text(TextItem {
            x_mm: self.layout.margin_mm + indent,
            y_mm: self.y,
            size_pt: size,
            style,
            color,
            text,
        });
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }
}

fn overview_lines(plan: &WorkoutPlan) -> [String; 5] {
    [
        format!("Goal: {}", plan.goal),
        format!("Fitness Level: {}", plan.fitness_level),
        format!("Duration: {} weeks", plan.total_weeks),
        format!("Sessions: {} days per week", plan.schedule.days_per_week),
        format!("Session Duration: {} minutes", plan.schedule.session_duration),
    ]
}

/// Lay out a successful envelope as a paginated document
///
/// Envelopes without a displayable plan are refused.
pub fn layout_plan(
    response: &PlanResponse,
    layout: &PageLayout,
    generated_on: NaiveDate,
) -> Result<PdfDocument> {
    let plan = response
        .plan()
        .map_err(|_| Error::ExportUnavailable(response.failure_message()))?;
    layout.validate()?;

    let mut cursor = Cursor::new(layout);

    cursor.line(0.0, 20.0, FontStyle::Regular, TITLE_COLOR, plan.seo_title.clone());
    cursor.advance(15.0);

    for line in overview_lines(plan) {
        cursor.line(0.0, 12.0, FontStyle::Regular, MUTED_COLOR, line);
        cursor.advance(8.0);
    }
    cursor.advance(10.0);

    for day in &plan.exercises {
        cursor.break_if_needed();
        cursor.line(0.0, 16.0, FontStyle::Regular, DAY_COLOR, day.day.clone());
        cursor.advance(10.0);

        for exercise in &day.exercises {
            cursor.break_if_needed();
            cursor.line(
                5.0,
                12.0,
                FontStyle::Bold,
                EXERCISE_COLOR,
                format!("{} ({})", exercise.name, exercise.equipment),
            );
            cursor.advance(7.0);

            let details = [
                format!("Duration: {}", exercise.duration),
                format!("Sets: {}", exercise.sets),
                format!("Reps: {}", exercise.repetitions),
            ];
            for detail in details {
                cursor.line(
                    10.0,
                    12.0,
                    FontStyle::Regular,
                    MUTED_COLOR,
                    format!("\u{2022} {}", detail),
                );
                cursor.advance(7.0);
            }
            cursor.advance(3.0);
        }

        cursor.advance(10.0);
    }

    let footer = format!("Generated on {}", generated_on.format("%-m/%-d/%Y"));
    let footer_x = layout.page_width_mm - layout.margin_mm - pdf::helvetica_width_mm(&footer, 10.0);
    cursor.doc.text(TextItem {
        x_mm: footer_x,
        y_mm: layout.page_height_mm - FOOTER_OFFSET_MM,
        size_pt: 10.0,
        style: FontStyle::Regular,
        color: FOOTER_COLOR,
        text: footer,
    });

    tracing::debug!(
        "Laid out '{}' on {} page(s)",
        plan.seo_title,
        cursor.doc.page_count()
    );
    Ok(cursor.doc)
}

/// Lay out and write a plan PDF to `path`
pub fn export_plan_pdf(
    response: &PlanResponse,
    layout: &PageLayout,
    generated_on: NaiveDate,
    path: &Path,
) -> Result<()> {
    layout_plan(response, layout, generated_on)?.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generate_workout_plan, DayWorkout, FitnessLevel, Goal, PlanRequest, Schedule,
        WorkoutExercise, WorkoutPreference,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn exercise(name: &str) -> WorkoutExercise {
        WorkoutExercise {
            name: name.into(),
            duration: "45s".into(),
            repetitions: "12".into(),
            sets: "3".into(),
            equipment: "Dumbbells".into(),
        }
    }

    fn response_with_days(days: &[(&str, usize)]) -> PlanResponse {
        let exercises = days
            .iter()
            .map(|(day, count)| DayWorkout {
                day: day.to_string(),
                exercises: (0..*count).map(|i| exercise(&format!("{} {}", day, i))).collect(),
            })
            .collect();

        PlanResponse::success(
            WorkoutPlan {
                goal: Goal::IncreaseStrength,
                fitness_level: FitnessLevel::Advanced,
                total_weeks: 12,
                schedule: Schedule {
                    days_per_week: days.len() as u8,
                    session_duration: 60,
                },
                exercises,
                seo_title: "Advanced Increase strength Workout Plan".into(),
                seo_content: String::new(),
                seo_keywords: String::new(),
            },
            0,
        )
    }

    fn texts(page: &pdf::Page) -> Vec<&str> {
        page.items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_header_and_overview() {
        let doc = layout_plan(&response_with_days(&[]), &PageLayout::default(), date()).unwrap();
        let page = &doc.pages[0];

        assert_eq!(doc.page_count(), 1);
        assert_eq!(page.items[0].text, "Advanced Increase strength Workout Plan");
        assert_eq!(page.items[0].y_mm, 20.0);
        assert_eq!(
            texts(page)[1..6],
            [
                "Goal: Increase strength",
                "Fitness Level: Advanced",
                "Duration: 12 weeks",
                "Sessions: 0 days per week",
                "Session Duration: 60 minutes",
            ]
        );
        assert_eq!(page.items[5].y_mm, 67.0);
    }

    #[test]
    fn test_exercise_block_lines() {
        let doc =
            layout_plan(&response_with_days(&[("Monday", 1)]), &PageLayout::default(), date())
                .unwrap();
        let page = &doc.pages[0];

        let day = &page.items[6];
        assert_eq!(day.text, "Monday");
        assert_eq!(day.y_mm, 85.0);

        let name = &page.items[7];
        assert_eq!(name.text, "Monday 0 (Dumbbells)");
        assert_eq!(name.style, FontStyle::Bold);
        assert_eq!(name.x_mm, 25.0);

        assert_eq!(
            texts(page)[8..11],
            ["\u{2022} Duration: 45s", "\u{2022} Sets: 3", "\u{2022} Reps: 12"]
        );
        assert_eq!(page.items[10].y_mm, 116.0);
    }

    #[test]
    fn test_exercise_near_threshold_starts_new_page() {
        // Third day's heading lands at 249mm; its first exercise would start
        // at 259mm, past the 257mm break line.
        let response = response_with_days(&[("Monday", 2), ("Wednesday", 2), ("Friday", 2)]);
        let doc = layout_plan(&response, &PageLayout::default(), date()).unwrap();

        assert_eq!(doc.page_count(), 2);

        let first = &doc.pages[0];
        let heading = first.items.iter().find(|i| i.text == "Friday").unwrap();
        assert_eq!(heading.y_mm, 249.0);
        assert!(!texts(first).contains(&"Friday 0 (Dumbbells)"));

        let second = &doc.pages[1];
        assert_eq!(second.items[0].text, "Friday 0 (Dumbbells)");
        assert_eq!(second.items[0].y_mm, 20.0);
    }

    #[test]
    fn test_long_plans_stay_inside_page_bounds() {
        let days: Vec<(&str, usize)> = crate::split::DAY_NAMES.iter().map(|d| (*d, 6)).collect();
        let layout = PageLayout::default();
        let doc = layout_plan(&response_with_days(&days), &layout, date()).unwrap();

        assert!(doc.page_count() > 2);
        let limit = layout.page_height_mm - FOOTER_OFFSET_MM;
        for page in &doc.pages {
            for item in &page.items {
                assert!(item.y_mm >= layout.margin_mm, "{} above top", item.text);
                assert!(item.y_mm <= limit, "{} at {}mm overflows", item.text, item.y_mm);
            }
        }
    }

    #[test]
    fn test_footer_on_last_page_right_aligned() {
        let layout = PageLayout::default();
        let days: Vec<(&str, usize)> = crate::split::DAY_NAMES.iter().map(|d| (*d, 4)).collect();
        let doc = layout_plan(&response_with_days(&days), &layout, date()).unwrap();

        let last = doc.pages.last().unwrap();
        let footer = last.items.last().unwrap();
        assert_eq!(footer.text, "Generated on 3/9/2024");
        assert_eq!(footer.y_mm, 287.0);

        let right_edge = footer.x_mm + pdf::helvetica_width_mm(&footer.text, footer.size_pt);
        assert!((right_edge - 190.0).abs() < 1e-3);

        for page in &doc.pages[..doc.pages.len() - 1] {
            assert!(page.items.iter().all(|i| !i.text.starts_with("Generated on")));
        }
    }

    #[test]
    fn test_error_envelope_is_refused() {
        let result = layout_plan(&PlanResponse::failure(0), &PageLayout::default(), date());
        assert!(matches!(result, Err(Error::ExportUnavailable(_))));
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let layout = PageLayout {
            page_height_mm: 50.0,
            ..PageLayout::default()
        };
        let result = layout_plan(&response_with_days(&[]), &layout, date());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_non_finite_layout_is_rejected() {
        for layout in [
            PageLayout {
                page_height_mm: f32::NAN,
                ..PageLayout::default()
            },
            PageLayout {
                bottom_threshold_mm: f32::INFINITY,
                ..PageLayout::default()
            },
            PageLayout {
                margin_mm: f32::NAN,
                ..PageLayout::default()
            },
        ] {
            let result = layout_plan(&response_with_days(&[("Monday", 2)]), &layout, date());
            assert!(matches!(result, Err(Error::Config(_))), "{:?} accepted", layout);
        }
    }

    #[test]
    fn test_non_positive_page_size_is_rejected() {
        let layout = PageLayout {
            page_width_mm: -210.0,
            ..PageLayout::default()
        };
        assert!(matches!(layout.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_export_generated_plan_to_file() {
        let request = PlanRequest {
            goal: Goal::EnhanceEndurance,
            fitness_level: FitnessLevel::Intermediate,
            preferences: vec![WorkoutPreference::Cardio, WorkoutPreference::Hiit],
            health_conditions: vec![],
            days_per_week: 5,
            session_duration: 60,
            plan_duration_weeks: 10,
            custom_goals: Some(vec!["Run a 10k".into()]),
        };
        let response = generate_workout_plan(&request);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.pdf");
        export_plan_pdf(&response, &PageLayout::default(), date(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(text.contains("Intermediate Enhance endurance Workout Plan"));
        assert!(text.contains("Monday"));
    }
}
