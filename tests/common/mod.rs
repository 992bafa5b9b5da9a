//! Common test utilities for dimselect integration tests.

#![allow(dead_code)]

use dimselect::*;
use rand::prelude::*;
use std::collections::HashSet;

/// All sampling algorithms, bounded ones first.
pub const ALGORITHMS: [SampleAlgorithm; 3] = [
    SampleAlgorithm::IndexSample,
    SampleAlgorithm::PartialShuffle,
    SampleAlgorithm::Rejection,
];

/// Deterministic random source for reproducible tests
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a selector for `dimensions` features
pub fn make_select(
    requested_size: usize,
    dimensions: usize,
    algorithm: SampleAlgorithm,
) -> MultipleRandomDimensionSelect {
    let mut select = MultipleRandomDimensionSelect::new(requested_size).with_algorithm(algorithm);
    select.set_dimensions(dimensions);
    select
}

/// Check the indices are pairwise distinct and below `dimensions`
pub fn assert_valid_sample(dims: &[usize], dimensions: usize) {
    let unique: HashSet<usize> = dims.iter().copied().collect();
    assert_eq!(unique.len(), dims.len(), "duplicate dimensions in {:?}", dims);
    for &d in dims {
        assert!(d < dimensions, "dimension {} out of range [0, {})", d, dimensions);
    }
}
