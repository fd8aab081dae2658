//! Enumerated option sets that bound valid request values.
//!
//! Every option serializes as its display string ("Build muscle",
//! "Weight training") and parses back case-insensitively.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in form display order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Human-readable label used on the wire and in generated text
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::InvalidOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

option_set! {
    /// Primary fitness goal of a plan
    Goal, "goal" {
        BuildMuscle => "Build muscle",
        LoseWeight => "Lose weight",
        ImproveOverallFitness => "Improve overall fitness",
        IncreaseStrength => "Increase strength",
        EnhanceEndurance => "Enhance endurance",
        ImproveFlexibility => "Improve flexibility",
    }
}

option_set! {
    /// Self-reported training experience
    FitnessLevel, "fitness level" {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

option_set! {
    /// Training-style tag used to filter the catalog
    WorkoutPreference, "workout preference" {
        WeightTraining => "Weight training",
        Cardio => "Cardio",
        Hiit => "HIIT",
        Yoga => "Yoga",
        BodyweightExercises => "Bodyweight exercises",
        Pilates => "Pilates",
    }
}

option_set! {
    /// Daily activity level (collected by the nutrition form, unused by generation)
    ActivityLevel, "activity level" {
        Sedentary => "Sedentary",
        Light => "Light",
        Moderate => "Moderate",
        VeryActive => "Very active",
        ExtraActive => "Extra active",
    }
}

option_set! {
    /// Dietary restriction tag (collected by the nutrition form, unused by generation)
    DietaryRestriction, "dietary restriction" {
        None => "None",
        Vegetarian => "Vegetarian",
        Vegan => "Vegan",
        GlutenFree => "Gluten-free",
        DairyFree => "Dairy-free",
        Keto => "Keto",
        Paleo => "Paleo",
    }
}
