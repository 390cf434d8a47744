//! Configuration management for the engine and its drivers.
//!
//! Grid dimensions are compiled in (see [`crate::grid::WIDTH`]); everything
//! here concerns how a grid is seeded and how a driver paces it.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `lifegrid.toml` file (overrides defaults)
//! 3. Command line flags (override the file)
//!
//! ## Example `lifegrid.toml`
//!
//! ```toml
//! [engine]
//! seed = 42
//! density = 15
//!
//! [driver]
//! target_fps = 30
//! steps_per_frame = 1
//! max_generations = 5000
//! stop_on_cycle = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::grid::DEFAULT_DENSITY;

/// How the grid is seeded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed initializer seed; a fresh one is drawn on every reset when unset.
    pub seed: Option<u32>,
    /// Percentage of cells brought alive by the random pass.
    pub density: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            density: DEFAULT_DENSITY,
        }
    }
}

/// Cadence and stop conditions for a driver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    pub target_fps: u64,
    pub steps_per_frame: u32,
    /// Pause once this many generations have run.
    pub max_generations: Option<u64>,
    /// Pause when the grid repeats one of its recent states.
    pub stop_on_cycle: bool,
    /// Start stepping immediately instead of waiting for the user.
    pub autostart: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            steps_per_frame: 1,
            max_generations: None,
            stop_on_cycle: false,
            autostart: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// # Validation Rules
    /// - Density must be a percentage in [0, 100]
    /// - Target FPS must be in [1, 240]
    /// - At least one step per frame, at most 1000
    /// - A generation limit, when set, must be positive
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.engine.density <= 100,
            "Density must be in [0, 100]"
        );

        anyhow::ensure!(self.driver.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(
            self.driver.target_fps <= 240,
            "Target FPS too high (max 240)"
        );
        anyhow::ensure!(
            self.driver.steps_per_frame > 0,
            "Steps per frame must be positive"
        );
        anyhow::ensure!(
            self.driver.steps_per_frame <= 1000,
            "Steps per frame too large (max 1000)"
        );
        if let Some(limit) = self.driver.max_generations {
            anyhow::ensure!(limit > 0, "Max generations must be positive");
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config
            .validate()
            .map_err(|e| ConfigError::validation(e.to_string()))?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.engine).as_bytes());
        hasher.update(format!("{:?}", self.driver).as_bytes());
        hex::encode(hasher.finalize())
    }
}
