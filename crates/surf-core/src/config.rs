//! Sampling configuration shared by every surface variant.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SurfError};
use crate::traits::Validate;

/// Number of samples per axis used when building a sampling mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub resolution: usize,
}

impl SamplingConfig {
    pub const DEFAULT_RESOLUTION: usize = 100;
    /// Smallest resolution that still spans both ends of an interval.
    pub const MIN_RESOLUTION: usize = 2;

    pub fn new(resolution: usize) -> Result<Self> {
        let config = Self { resolution };
        config.validate()?;
        Ok(config)
    }

    /// Shape `(rows, cols)` of every grid produced under this configuration.
    pub fn shape(self) -> (usize, usize) {
        (self.resolution, self.resolution)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }
}

impl Validate for SamplingConfig {
    fn validate(&self) -> Result<()> {
        if self.resolution < Self::MIN_RESOLUTION {
            return Err(SurfError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}
