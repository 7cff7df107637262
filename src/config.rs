//! Configuration management for NanoLog
//!
//! Describes which bundled lanes a controller starts with and which tag it registers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::controller::LogController;
use crate::error::{NanoLogError, Result};
use crate::lane::{MemoryLane, TracingLane, DEFAULT_ALERT_CAPACITY, DEFAULT_CAPACITY};

/// Settings for the in-memory lane
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryLaneConfig {
    /// Maximum records kept (default: 1000)
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Maximum warnings and errors kept (default: 100)
    #[serde(default = "default_alert_capacity")]
    pub alert_capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_alert_capacity() -> usize {
    DEFAULT_ALERT_CAPACITY
}

impl Default for MemoryLaneConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            alert_capacity: default_alert_capacity(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Tag registered on the controller at startup
    #[serde(default)]
    pub tag: Option<String>,

    /// Whether records are forwarded into `tracing` (default: true)
    #[serde(default = "default_tracing_lane")]
    pub tracing_lane: bool,

    /// Filter directive used when RUST_LOG is unset
    ///
    /// Covers both the crate's own diagnostics (`nanolog`) and forwarded records
    /// (`nanolog_record`).
    #[serde(default = "default_diagnostics_filter")]
    pub diagnostics_filter: String,

    /// In-memory lane; omitted means no memory lane
    #[serde(default)]
    pub memory_lane: Option<MemoryLaneConfig>,
}

fn default_tracing_lane() -> bool {
    true
}

fn default_diagnostics_filter() -> String {
    "nanolog=info,nanolog_record=trace".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: None,
            tracing_lane: default_tracing_lane(),
            diagnostics_filter: default_diagnostics_filter(),
            memory_lane: None,
        }
    }
}

/// A controller built from configuration
///
/// Keeps a handle on the memory lane so callers can read it back.
#[derive(Debug)]
pub struct ConfiguredController {
    pub controller: Arc<LogController>,
    pub memory_lane: Option<Arc<MemoryLane>>,
}

impl Config {
    /// Load configuration from the default file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if let Some(memory) = &self.memory_lane {
            if memory.capacity == 0 {
                return Err(NanoLogError::InvalidConfig(
                    "memory_lane.capacity must be at least 1".to_string(),
                ));
            }
            if memory.alert_capacity == 0 {
                return Err(NanoLogError::InvalidConfig(
                    "memory_lane.alert_capacity must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Build a controller with the configured tag and lanes
    ///
    /// Lanes are added memory first, then tracing.
    pub fn build_controller(&self) -> ConfiguredController {
        let controller = Arc::new(LogController::new());

        if let Some(tag) = &self.tag {
            controller.register(tag.clone());
        }

        let memory_lane = self.memory_lane.as_ref().map(|memory| {
            let lane = Arc::new(MemoryLane::new(memory.capacity, memory.alert_capacity));
            controller.add_logging_lane(lane.clone());
            lane
        });

        if self.tracing_lane {
            controller.add_logging_lane(Arc::new(TracingLane::new()));
        }

        ConfiguredController {
            controller,
            memory_lane,
        }
    }
}

/// Get the base configuration directory (~/.nanolog)
/// Falls back to ./.nanolog if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".nanolog")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nanolog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
