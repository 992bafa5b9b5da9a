//! # dimselect
//!
//! Random dimension subset selection for the split search of
//! random-forest style decision trees.
//!
//! At every node a tree learner evaluates splits along a handful of
//! candidate dimensions. [`MultipleRandomDimensionSelect`] draws those
//! candidates: a fresh set of distinct indices in `[0, d)` per node, by
//! default `floor(sqrt(d))` of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use dimselect::{DimensionSelect, MultipleRandomDimensionSelect, SampleAlgorithm};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> dimselect::Result<()> {
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut select = MultipleRandomDimensionSelect::new(3)
//!     .with_algorithm(SampleAlgorithm::IndexSample);
//! select.set_dimensions(20);
//!
//! let candidates: Vec<usize> = select.candidates(&mut rng)?.collect();
//! assert_eq!(candidates.len(), 3);
//! assert!(candidates.iter().all(|&d| d < 20));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: constants, error handling, random sources, logging setup
//! - [`config`]: [`SamplerConfig`] with file and environment loading
//! - [`tree`]: the [`DimensionSelect`] policies and sampling algorithms

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dimension selection policies
pub mod tree;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{DimSelectError, Result},
    utils::random::{Random, RandomSource},
};

// Re-export configuration functionality
pub use crate::config::{load_config, SamplerConfig, SamplerConfigBuilder};

// Re-export dimension selection functionality
pub use crate::tree::{
    collect_dimensions, resolve_size, sample_without_replacement, AllDimensionSelect,
    Candidates, DimensionSelect, MultipleRandomDimensionSelect, RandomDimensionSelect,
    SampleAlgorithm, SelectState,
};

// Version information
pub use crate::core::constants::DIMSELECT_VERSION as VERSION;

/// Initialize the library.
///
/// Sets up `env_logger` (honouring `RUST_LOG`, defaulting to `info`).
/// Optional: the selectors work without it, they just log nowhere.
///
/// # Examples
///
/// ```rust
/// dimselect::init();
/// assert!(dimselect::is_initialized());
/// ```
pub fn init() {
    crate::core::initialize_logging()
}

/// Check if the library has been initialized.
pub fn is_initialized() -> bool {
    crate::core::is_logging_initialized()
}
