//! Selection of a few distinct random dimensions per node.
//!
//! This is the random-forest policy: each node considers a fresh random
//! subset of the dimensions, by default `floor(sqrt(d))` of them.

use super::{DimensionSelect, SelectState};
use crate::config::SamplerConfig;
use crate::core::constants::{AUTO_SUBSET_SIZE, END_SENTINEL};
use crate::core::error::{DimSelectError, Result};
use crate::core::utils::random::RandomSource;
use crate::tree::sampling::{sample_without_replacement, SampleAlgorithm};
use std::iter::{Copied, FusedIterator};
use std::slice::Iter;

/// Number of dimensions sampled for a given request.
///
/// Returns `requested` when `0 < requested <= dimensions`, otherwise
/// `floor(sqrt(dimensions))`.
pub fn resolve_size(requested: usize, dimensions: usize) -> usize {
    if requested == AUTO_SUBSET_SIZE || requested > dimensions {
        isqrt(dimensions)
    } else {
        requested
    }
}

/// Exact integer square root.
fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    // f64 loses precision above 2^53; correct the estimate in both directions.
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// Selects `requested_size` distinct random dimensions on every `begin`.
///
/// The sample is stored with a trailing [`END_SENTINEL`] slot, so walking it
/// with `next` yields each sampled dimension and then the sentinel once.
///
/// A selector is not meant to be shared between threads while iterating;
/// parallel learners should give every worker its own instance.
#[derive(Debug, Clone)]
pub struct MultipleRandomDimensionSelect {
    requested_size: usize,
    dimensions: usize,
    algorithm: SampleAlgorithm,
    /// Sampled dimensions followed by the sentinel
    values: Vec<usize>,
    effective_size: usize,
    cursor: usize,
    state: SelectState,
}

impl MultipleRandomDimensionSelect {
    /// Create a selector drawing `requested_size` dimensions (0 = automatic).
    ///
    /// The dimension count starts at 0 and must be set with
    /// [`set_dimensions`](DimensionSelect::set_dimensions) before `begin`.
    pub fn new(requested_size: usize) -> Self {
        MultipleRandomDimensionSelect {
            requested_size,
            dimensions: 0,
            algorithm: SampleAlgorithm::default(),
            values: Vec::new(),
            effective_size: 0,
            cursor: 0,
            state: SelectState::Idle,
        }
    }

    /// Create a selector from a configuration.
    pub fn from_config(config: &SamplerConfig) -> Self {
        let mut select = Self::new(config.requested_size).with_algorithm(config.algorithm);
        select.dimensions = config.dimensions;
        select
    }

    /// Use a different sampling algorithm.
    pub fn with_algorithm(mut self, algorithm: SampleAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Requested subset size as configured (0 = automatic).
    pub fn requested_size(&self) -> usize {
        self.requested_size
    }

    /// Number of dimensions drawn by the last `begin` (0 before any).
    pub fn effective_size(&self) -> usize {
        match self.state {
            SelectState::Idle => 0,
            SelectState::Iterating => self.effective_size,
        }
    }

    /// Sampling algorithm in use.
    pub fn algorithm(&self) -> SampleAlgorithm {
        self.algorithm
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> SamplerConfig {
        SamplerConfig {
            requested_size: self.requested_size,
            dimensions: self.dimensions,
            algorithm: self.algorithm,
        }
    }

    /// The sampled dimensions of the current iteration, without the sentinel.
    pub fn sample(&self) -> &[usize] {
        match self.state {
            SelectState::Idle => &[],
            SelectState::Iterating => &self.values[..self.effective_size],
        }
    }

    /// Draw a fresh sample and iterate over it.
    ///
    /// The returned iterator walks its own copy of the position; it does not
    /// advance the cursor used by [`next`](DimensionSelect::next).
    pub fn candidates(&mut self, rng: &mut dyn RandomSource) -> Result<Candidates<'_>> {
        self.begin(rng)?;
        Ok(Candidates {
            inner: self.sample().iter().copied(),
        })
    }
}

impl Default for MultipleRandomDimensionSelect {
    fn default() -> Self {
        Self::new(AUTO_SUBSET_SIZE)
    }
}

impl DimensionSelect for MultipleRandomDimensionSelect {
    fn begin(&mut self, rng: &mut dyn RandomSource) -> Result<usize> {
        self.state = SelectState::Idle;

        crate::ensure!(
            self.dimensions > 0,
            DimSelectError::invalid_configuration("dimensions must be set before begin()")
        );

        let size = resolve_size(self.requested_size, self.dimensions);
        if self.requested_size > self.dimensions {
            log::debug!(
                "requested {} of {} dimensions; sampling {} instead",
                self.requested_size,
                self.dimensions,
                size
            );
        }

        sample_without_replacement(rng, self.dimensions, size, self.algorithm, &mut self.values)?;
        self.values.push(END_SENTINEL);
        // Drop capacity left over from a larger earlier sample.
        self.values.shrink_to(size + 1);

        self.effective_size = size;
        self.cursor = 0;
        self.state = SelectState::Iterating;
        Ok(self.values[0])
    }

    fn next(&mut self) -> Result<usize> {
        if self.state == SelectState::Idle {
            return Err(DimSelectError::NotStarted);
        }
        if self.cursor >= self.effective_size {
            return Err(DimSelectError::exhausted(self.effective_size));
        }
        self.cursor += 1;
        Ok(self.values[self.cursor])
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn set_dimensions(&mut self, dimensions: usize) {
        if dimensions != self.dimensions && self.state == SelectState::Iterating {
            log::debug!(
                "dimensions changed from {} to {}; discarding current sample",
                self.dimensions,
                dimensions
            );
            self.state = SelectState::Idle;
            self.values.clear();
        }
        self.dimensions = dimensions;
    }

    fn state(&self) -> SelectState {
        self.state
    }
}

/// Iterator over the dimensions sampled by
/// [`MultipleRandomDimensionSelect::candidates`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    inner: Copied<Iter<'a, usize>>,
}

impl Iterator for Candidates<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Candidates<'_> {}

impl FusedIterator for Candidates<'_> {}
