//! Configuration file support for fitplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml`.

use crate::export::PageLayout;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub defaults: RequestDefaults,

    #[serde(default)]
    pub pdf: PageLayout,
}

/// Where exported PDFs are written
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Generation behaviour
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationConfig {
    /// Artificial latency before a response is returned
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

impl GenerationConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

/// Values used for request fields the user leaves out
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RequestDefaults {
    #[serde(default = "default_session_duration")]
    pub session_duration: u32,

    #[serde(default = "default_plan_duration_weeks")]
    pub plan_duration_weeks: u32,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            session_duration: default_session_duration(),
            plan_duration_weeks: default_plan_duration_weeks(),
        }
    }
}

// Default value functions
fn home_or_current(subdir: &str) -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(subdir))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_output_dir() -> PathBuf {
    let base = dirs::document_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| home_or_current(".local/share"));
    base.join("fitplan")
}

fn default_session_duration() -> u32 {
    45
}

fn default_plan_duration_weeks() -> u32 {
    8
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.pdf.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| home_or_current(".config"));
        base.join("fitplan").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Resolve where an exported PDF should be written
    ///
    /// Bare file names land in the configured output directory; anything
    /// with a directory component is used as given.
    pub fn export_path(&self, requested: &Path) -> PathBuf {
        let has_dir = requested
            .parent()
            .map(|p| !p.as_os_str().is_empty())
            .unwrap_or(false);
        if requested.is_absolute() || has_dir {
            requested.to_path_buf()
        } else {
            self.export.output_dir.join(requested)
        }
    }
}
