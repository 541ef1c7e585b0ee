//! Spatial index configuration with documented constants
//!
//! Values can be loaded from a TOML file; any key left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, SpatialError};

/// Configuration for a world's spatial hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Edge length of one grid cell (world units)
    ///
    /// Should be close to the size of a typical object or query radius.
    /// Smaller = more cells per object, more bookkeeping on every move
    /// Larger = fewer cells, more false positives per broad-phase query
    pub cell_size: f32,

    /// Expected number of tracked objects
    ///
    /// Only a capacity hint for the entry table. Exceeding it is fine.
    pub expected_items: usize,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            expected_items: 256,
        }
    }
}

impl SpatialConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SpatialConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SpatialError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reject cell sizes that cannot produce a grid
    pub fn validate(&self) -> Result<()> {
        validate_cell_size(self.cell_size)
    }
}

pub(crate) fn validate_cell_size(cell_size: f32) -> Result<()> {
    // NaN fails the comparison, infinity fails is_finite
    if !(cell_size > 0.0 && cell_size.is_finite()) {
        tracing::warn!("Rejected spatial cell size {}", cell_size);
        return Err(SpatialError::InvalidCellSize(cell_size));
    }
    Ok(())
}
