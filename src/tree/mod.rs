//! Tree-learning support: candidate dimension selection for split search.
//!
//! The split search itself lives with the caller; this module decides
//! which dimensions a node examines.

pub mod dimension_select;
pub mod sampling;

// Re-export key types and traits for easy access
pub use dimension_select::{
    collect_dimensions, resolve_size, AllDimensionSelect, Candidates, DimensionSelect,
    MultipleRandomDimensionSelect, RandomDimensionSelect, SelectState,
};
pub use sampling::{sample_without_replacement, SampleAlgorithm};
