//! Configuration management for dimension selection.
//!
//! Configuration is layered: defaults, then an optional file, then
//! `DIMSELECT_*` environment variables.

pub mod core;

pub use self::core::{SamplerConfig, SamplerConfigBuilder};

use crate::core::error::Result;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "dimselect.toml";

/// Resolve a configuration from an optional file plus environment overrides.
///
/// The dimension count may still be unknown here; call
/// [`SamplerConfig::validate`] once it has been filled in.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<SamplerConfig> {
    let mut config = match path {
        Some(path) => {
            let path = path.as_ref();
            log::debug!("loading sampler configuration from {}", path.display());
            SamplerConfig::load_from_file(path)?
        }
        None => SamplerConfig::default(),
    };

    config.apply_environment_overrides()?;
    config.log_warnings();
    Ok(config)
}
