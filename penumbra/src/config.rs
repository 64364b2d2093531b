use crate::logging::LogLevel;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of light sample points allocated at once and requested per shadow ray.
pub const SAMPLE_BATCH_SIZE: usize = 128;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Intensity of the ambient term, used to leave headroom when normalizing lights.
    pub ambient_intensity: f32,
    /// Sample points generated per requested shadow ray of an area light.
    pub sample_batch_size: usize,
    /// Probe rays shot at most when generating light sample points.
    pub max_probe_rays: usize,
    /// Lights considered at most per shaded point.
    pub max_lights: usize,
    /// Hops through transmissive regions a single shadow ray is allowed to make.
    pub max_shadow_depth: u32,
    /// Base seed of the per-worker random streams.
    pub seed: u64,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.4,
            sample_batch_size: SAMPLE_BATCH_SIZE,
            max_probe_rays: 4096,
            max_lights: 16,
            max_shadow_depth: 64,
            seed: 0x73B9642E74AC471C,
            log_level: LogLevel::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(why) => write!(f, "Failed to read settings: {}", why),
            ConfigError::Yaml(why) => write!(f, "Failed to parse settings: {}", why),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Settings {
    /// Loads `Settings` from a YAML file. Missing fields get their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_yaml(&text)
    }

    /// Parses `Settings` from a YAML string. Missing fields get their default values.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(ConfigError::Yaml)
    }
}
