#![forbid(unsafe_code)]

//! Core domain model and plan generation for fitplan.
//!
//! This crate provides:
//! - Option sets bounding request values (goals, levels, preferences)
//! - The static exercise catalog and weekly split table
//! - The plan generator and its response envelope
//! - View state for displaying and exporting a plan
//! - PDF layout and serialization

pub mod error;
pub mod options;
pub mod types;
pub mod catalog;
pub mod split;
pub mod seo;
pub mod engine;
pub mod view;
pub mod export;
pub mod pdf;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use options::*;
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use split::{build_default_split_table, get_default_split_table};
pub use engine::{generate_workout_plan, PlanGenerator};
pub use view::PlanView;
pub use export::{layout_plan, PageLayout};
pub use pdf::PdfDocument;
pub use config::Config;
