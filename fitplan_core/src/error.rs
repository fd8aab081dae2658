//! Error types for the fitplan_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitplan_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog or split table validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A string that names no entry of an option set
    #[error("Unknown {kind}: '{value}'")]
    InvalidOption { kind: &'static str, value: String },

    /// Plan generation error
    #[error("Generation error: {0}")]
    Generation(String),

    /// PDF export requested without a displayable plan
    #[error("Export unavailable: {0}")]
    ExportUnavailable(String),

    /// PDF serialization error
    #[error("PDF error: {0}")]
    Pdf(String),
}
