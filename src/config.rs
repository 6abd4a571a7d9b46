// Demo configuration, loaded from JSON

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::SolarSystem;

/// Environment variable holding the path of the config file.
pub const CONFIG_ENV: &str = "ORRERY_CONFIG";

/// Error type for config and scene files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Settings for the headless frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulated hours per real second.
    pub hours_per_second: f32,
    /// Real time between frames.
    pub frame_interval_ms: u64,
    /// Number of frames to run before exiting.
    pub frames: u32,
    /// Simulation time of the first frame.
    pub start_time: f32,
    /// Scene file; the built-in Sun/Earth/Moon system is used when unset.
    pub system_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hours_per_second: 24.0 * 7.0,
            frame_interval_ms: 100,
            frames: 50,
            start_time: 0.0,
            system_path: None,
        }
    }
}

impl DemoConfig {
    /// Read a config file.
    ///
    /// A relative `system_path` is taken relative to the config file's own
    /// directory, not the working directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut config: Self = serde_json::from_slice(&bytes)?;
        let resolved = match (&config.system_path, path.parent()) {
            (Some(system), Some(dir)) if system.is_relative() => Some(dir.join(system)),
            _ => None,
        };
        if resolved.is_some() {
            config.system_path = resolved;
        }
        Ok(config)
    }

    /// Read the file named by `ORRERY_CONFIG`, or use defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The system to animate.
    pub fn load_system(&self) -> Result<SolarSystem, ConfigError> {
        match &self.system_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                SolarSystem::from_json(&json)
            }
            None => Ok(SolarSystem::sun_earth_moon()),
        }
    }
}
