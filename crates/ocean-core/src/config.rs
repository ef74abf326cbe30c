//! Configuration types for the grid.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Grid configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Seed for the neighbor shuffle
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            height: 80,
            width: 120,
            seed: 0,
        }
    }
}

impl GridConfig {
    pub fn new(height: usize, width: usize, seed: u64) -> Self {
        Self { height, width, seed }
    }

    /// Both dimensions must be non-zero and their product addressable
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(Error::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.height.checked_mul(self.width).is_none() {
            return Err(Error::Validation(format!(
                "{}x{} grid has too many cells",
                self.height, self.width
            )));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
