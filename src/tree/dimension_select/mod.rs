//! Dimension selection policies for split search.
//!
//! At every node a tree learner asks a [`DimensionSelect`] which dimensions
//! to evaluate. All policies share one iteration protocol:
//!
//! ```rust
//! use dimselect::{DimensionSelect, MultipleRandomDimensionSelect};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # fn main() -> dimselect::Result<()> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut select = MultipleRandomDimensionSelect::default();
//! select.set_dimensions(16);
//!
//! let mut dim = select.begin(&mut rng)?;
//! let mut visited = 0;
//! while dim != select.end() {
//!     // evaluate a split along `dim`
//!     visited += 1;
//!     dim = select.next()?;
//! }
//! assert_eq!(visited, 4);
//! # Ok(())
//! # }
//! ```

pub mod all;
pub mod multiple;
pub mod single;

pub use all::AllDimensionSelect;
pub use multiple::{resolve_size, Candidates, MultipleRandomDimensionSelect};
pub use single::RandomDimensionSelect;

use crate::core::constants::END_SENTINEL;
use crate::core::error::Result;
use crate::core::utils::random::RandomSource;

/// Iteration state of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    /// No sample has been drawn; only `begin` is valid.
    Idle,
    /// A sample is being walked with `next`.
    Iterating,
}

/// A policy choosing the candidate dimensions for one split search.
pub trait DimensionSelect {
    /// Draw a fresh set of dimensions and return the first one.
    fn begin(&mut self, rng: &mut dyn RandomSource) -> Result<usize>;

    /// Return the next dimension, or [`END_SENTINEL`] once the set is done.
    ///
    /// Calling again after the sentinel was returned is an error.
    fn next(&mut self) -> Result<usize>;

    /// The sentinel value that terminates iteration.
    fn end(&self) -> usize {
        END_SENTINEL
    }

    /// Total number of dimensions to select from.
    fn dimensions(&self) -> usize;

    /// Set the total number of dimensions, discarding any sample in progress.
    fn set_dimensions(&mut self, dimensions: usize);

    /// Current iteration state.
    fn state(&self) -> SelectState;
}

/// Run `begin`/`next` until the sentinel and collect the selected dimensions.
pub fn collect_dimensions<S>(select: &mut S, rng: &mut dyn RandomSource) -> Result<Vec<usize>>
where
    S: DimensionSelect + ?Sized,
{
    let mut dims = Vec::new();
    let mut dim = select.begin(rng)?;
    while dim != select.end() {
        dims.push(dim);
        dim = select.next()?;
    }
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::random::Random;

    #[test]
    fn test_policies_behind_trait_objects() {
        let mut rng = Random::with_seed(1);
        let mut policies: Vec<Box<dyn DimensionSelect>> = vec![
            Box::new(AllDimensionSelect::new()),
            Box::new(RandomDimensionSelect::new()),
            Box::new(MultipleRandomDimensionSelect::new(3)),
        ];

        let mut counts = Vec::new();
        for policy in policies.iter_mut() {
            policy.set_dimensions(9);
            counts.push(collect_dimensions(policy.as_mut(), &mut rng).unwrap().len());
        }
        assert_eq!(counts, vec![9, 1, 3]);
    }

    #[test]
    fn test_end_is_sentinel_for_every_policy() {
        assert_eq!(AllDimensionSelect::new().end(), END_SENTINEL);
        assert_eq!(RandomDimensionSelect::new().end(), END_SENTINEL);
        assert_eq!(MultipleRandomDimensionSelect::default().end(), END_SENTINEL);
    }

    #[test]
    fn test_collect_propagates_configuration_error() {
        let mut rng = Random::with_seed(1);
        let mut select = MultipleRandomDimensionSelect::default();
        assert!(collect_dimensions(&mut select, &mut rng).is_err());
    }
}
