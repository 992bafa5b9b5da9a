//! Sampler configuration and its builder.
//!
//! A [`SamplerConfig`] is created once per training run and can be loaded
//! from a JSON or TOML file, from environment variables, or assembled with
//! [`SamplerConfigBuilder`].

use crate::core::constants::*;
use crate::core::error::{DimSelectError, Result};
use crate::tree::sampling::SampleAlgorithm;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for random dimension selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of dimensions to sample per node (0 = `floor(sqrt(dimensions))`)
    pub requested_size: usize,
    /// Total number of dimensions in the training data (0 = not yet known)
    pub dimensions: usize,
    /// Algorithm used to draw distinct indices
    pub algorithm: SampleAlgorithm,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            requested_size: AUTO_SUBSET_SIZE,
            dimensions: 0,
            algorithm: SampleAlgorithm::default(),
        }
    }
}

impl SamplerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that a selector built from this configuration can `begin`.
    ///
    /// The dimension count must be known. A requested size larger than the
    /// dimension count is legal (the selector falls back to the square-root
    /// heuristic) and is only reported by [`log_warnings`](Self::log_warnings).
    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(DimSelectError::invalid_parameter(
                "dimensions",
                "0",
                "must be set to the number of features before sampling",
            ));
        }
        self.log_warnings();
        Ok(())
    }

    /// Log settings that are legal but probably not what was intended.
    pub fn log_warnings(&self) {
        if self.dimensions > 0 && self.requested_size > self.dimensions {
            log::warn!(
                "requested_size {} exceeds dimensions {}; floor(sqrt({})) will be used",
                self.requested_size,
                self.dimensions,
                self.dimensions
            );
        }
        if self.algorithm == SampleAlgorithm::Rejection
            && self.requested_size > 0
            && self.requested_size == self.dimensions
        {
            log::warn!(
                "rejection sampling of all {} dimensions needs many redraws; prefer index_sample",
                self.dimensions
            );
        }
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: SamplerConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(crate::config_error!(
                    "Unsupported config file format for {}. Use .json or .toml",
                    path.display()
                ))
            }
        };

        config.log_warnings();
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(crate::config_error!(
                    "Unsupported config file format for {}. Use .json or .toml",
                    path.display()
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn load_from_environment() -> Result<Self> {
        let mut config = SamplerConfig::default();
        config.apply_environment_overrides()?;
        Ok(config)
    }

    /// Override fields from `DIMSELECT_*` environment variables when set
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var(ENV_REQUESTED_SIZE) {
            self.requested_size = val
                .trim()
                .parse()
                .map_err(|_| DimSelectError::config(format!("Invalid {}: {}", ENV_REQUESTED_SIZE, val)))?;
        }

        if let Ok(val) = std::env::var(ENV_DIMENSIONS) {
            self.dimensions = val
                .trim()
                .parse()
                .map_err(|_| DimSelectError::config(format!("Invalid {}: {}", ENV_DIMENSIONS, val)))?;
        }

        if let Ok(val) = std::env::var(ENV_ALGORITHM) {
            self.algorithm = val.parse()?;
        }

        Ok(())
    }

    /// Whether the subset size is derived from the dimension count
    pub fn is_auto_size(&self) -> bool {
        self.requested_size == AUTO_SUBSET_SIZE
    }
}

/// Builder for [`SamplerConfig`] that accumulates validation errors.
#[derive(Debug)]
pub struct SamplerConfigBuilder {
    config: SamplerConfig,
    validation_errors: Vec<String>,
}

impl SamplerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        SamplerConfigBuilder {
            config: SamplerConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Set the requested subset size (0 = automatic)
    pub fn requested_size(mut self, size: usize) -> Self {
        self.config.requested_size = size;
        self
    }

    /// Set the total dimension count
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.config.dimensions = dimensions;
        self
    }

    /// Set the sampling algorithm
    pub fn algorithm(mut self, algorithm: SampleAlgorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Set the sampling algorithm by name
    pub fn algorithm_name(mut self, name: &str) -> Self {
        match name.parse() {
            Ok(algorithm) => self.config.algorithm = algorithm,
            Err(_) => self
                .validation_errors
                .push(format!("unknown sampling algorithm '{}'", name)),
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SamplerConfig> {
        if !self.validation_errors.is_empty() {
            return Err(DimSelectError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.log_warnings();
        Ok(self.config)
    }
}

impl Default for SamplerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
