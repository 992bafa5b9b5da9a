//! Uniform sampling of distinct dimension indices without replacement.
//!
//! Three interchangeable algorithms are provided. `IndexSample` (the
//! default) and `PartialShuffle` come from `rand::seq` and take a bounded
//! number of draws whatever the ratio `k / n`; rejection sampling is kept
//! for comparison and degrades badly as `k` approaches `n`.

use crate::core::error::{DimSelectError, Result};
use crate::core::utils::random::RandomSource;
use rand::seq::{index, SliceRandom};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Algorithm used to draw `k` distinct indices from `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleAlgorithm {
    /// `rand::seq::index::sample`: Floyd's algorithm for small `k`, an
    /// in-place shuffle when `k` is a large share of `n`. O(k) for the
    /// usual `k << n`.
    IndexSample,
    /// Partial Fisher–Yates shuffle of `0..n`. O(n) time and scratch memory.
    PartialShuffle,
    /// Redraw on duplicate. Unbounded draws when `k` is close to `n`.
    Rejection,
}

impl Default for SampleAlgorithm {
    fn default() -> Self {
        SampleAlgorithm::IndexSample
    }
}

impl SampleAlgorithm {
    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleAlgorithm::IndexSample => "index_sample",
            SampleAlgorithm::PartialShuffle => "partial_shuffle",
            SampleAlgorithm::Rejection => "rejection",
        }
    }

    /// Whether the number of draws is bounded by `k`.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, SampleAlgorithm::Rejection)
    }
}

impl fmt::Display for SampleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleAlgorithm {
    type Err = DimSelectError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "index_sample" | "index" | "floyd" => Ok(SampleAlgorithm::IndexSample),
            "partial_shuffle" | "shuffle" | "fisher_yates" => Ok(SampleAlgorithm::PartialShuffle),
            "rejection" => Ok(SampleAlgorithm::Rejection),
            _ => Err(DimSelectError::invalid_parameter(
                "algorithm",
                s,
                "expected one of index_sample, partial_shuffle, rejection",
            )),
        }
    }
}

/// Fill `out` with `k` distinct indices drawn uniformly from `[0, n)`.
///
/// `out` is cleared first and only ever holds the `k` results; scratch
/// space needed by an algorithm is dropped before returning. The set is
/// uniform for every algorithm, the order is not guaranteed to be.
pub fn sample_without_replacement<R>(
    rng: &mut R,
    n: usize,
    k: usize,
    algorithm: SampleAlgorithm,
    out: &mut Vec<usize>,
) -> Result<()>
where
    R: RandomSource + ?Sized,
{
    if k > n {
        return Err(DimSelectError::invalid_parameter(
            "k",
            k.to_string(),
            format!("cannot draw more than n = {} distinct indices", n),
        ));
    }

    out.clear();
    out.reserve(k);

    match algorithm {
        SampleAlgorithm::IndexSample => {
            out.extend(index::sample(rng, n, k).iter());
        }
        SampleAlgorithm::PartialShuffle => {
            let mut pool: Vec<usize> = (0..n).collect();
            let (chosen, _) = pool.partial_shuffle(rng, k);
            out.extend_from_slice(chosen);
        }
        SampleAlgorithm::Rejection => rejection(rng, n, k, out),
    }

    Ok(())
}

fn rejection<R: RandomSource + ?Sized>(rng: &mut R, n: usize, k: usize, out: &mut Vec<usize>) {
    let mut retries = 0usize;
    for _ in 0..k {
        loop {
            let candidate = rng.draw(n);
            if !out.contains(&candidate) {
                out.push(candidate);
                break;
            }
            retries += 1;
        }
    }
    if retries > 0 {
        log::trace!("rejection sampling of {} from {} needed {} redraws", k, n, retries);
    }
}
