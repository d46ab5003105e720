//! Configuration system for the simulator.
//!
//! This module defines the configuration structures that parameterize a run.
//! It provides:
//! 1. **Defaults:** The fixed memory map and run limits.
//! 2. **Structures:** Hierarchical config for the system (memory map) and
//!    general behavior (verbosity, trace window, cycle guard).
//! 3. **File Overrides:** JSON deserialization for `--config` files; absent
//!    fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::ConfigError;

/// Memory-map geometry of the modeled system.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Base address of instruction memory.
    pub imem_base: u32,
    /// Size of instruction memory in bytes.
    pub imem_size: u32,
    /// Base address of data memory.
    pub dmem_base: u32,
    /// Size of data memory in bytes.
    pub dmem_size: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            imem_base: constants::IMEM_BASE,
            imem_size: constants::IMEM_SIZE,
            dmem_base: constants::DMEM_BASE,
            dmem_size: constants::DMEM_SIZE,
        }
    }
}

/// General run behavior.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log verbosity (0-7); see the tracer for the level ladder.
    pub log_level: u8,
    /// Suppress trace output for cycles below this.
    pub log_start: u64,
    /// Abort the run after this many cycles.
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: 0,
            log_start: 0,
            max_cycles: constants::MAX_CYCLES,
        }
    }
}

/// Root configuration type.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Memory-map geometry.
    pub system: SystemConfig,
    /// General run behavior.
    pub general: GeneralConfig,
}

impl Config {
    /// Reads a configuration from a JSON file, with defaults for absent fields.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }
}
