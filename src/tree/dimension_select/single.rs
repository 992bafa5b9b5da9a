//! Selection of one random dimension.

use super::{DimensionSelect, SelectState};
use crate::core::constants::END_SENTINEL;
use crate::core::error::{DimSelectError, Result};
use crate::core::utils::random::RandomSource;

/// Picks a single uniformly random dimension per `begin`.
#[derive(Debug, Clone)]
pub struct RandomDimensionSelect {
    dimensions: usize,
    /// Whether the sentinel has been handed out for the current draw
    finished: bool,
    state: SelectState,
}

impl RandomDimensionSelect {
    /// Create a selector; the dimension count starts at 0.
    pub fn new() -> Self {
        RandomDimensionSelect {
            dimensions: 0,
            finished: false,
            state: SelectState::Idle,
        }
    }
}

impl Default for RandomDimensionSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionSelect for RandomDimensionSelect {
    fn begin(&mut self, rng: &mut dyn RandomSource) -> Result<usize> {
        if self.dimensions == 0 {
            self.state = SelectState::Idle;
            return Err(DimSelectError::invalid_configuration(
                "dimensions must be set before begin()",
            ));
        }
        self.finished = false;
        self.state = SelectState::Iterating;
        Ok(rng.draw(self.dimensions))
    }

    fn next(&mut self) -> Result<usize> {
        match (self.state, self.finished) {
            (SelectState::Idle, _) => Err(DimSelectError::NotStarted),
            (SelectState::Iterating, true) => Err(DimSelectError::exhausted(1)),
            (SelectState::Iterating, false) => {
                self.finished = true;
                Ok(END_SENTINEL)
            }
        }
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn set_dimensions(&mut self, dimensions: usize) {
        if dimensions != self.dimensions {
            self.state = SelectState::Idle;
        }
        self.dimensions = dimensions;
    }

    fn state(&self) -> SelectState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::random::Random;
    use std::collections::HashSet;

    #[test]
    fn test_one_dimension_then_sentinel() {
        let mut rng = Random::with_seed(3);
        let mut select = RandomDimensionSelect::new();
        select.set_dimensions(7);

        let dim = select.begin(&mut rng).unwrap();
        assert!(dim < 7);
        assert_eq!(select.next().unwrap(), select.end());
        assert!(select.next().is_err());
    }

    #[test]
    fn test_draws_vary() {
        let mut rng = Random::with_seed(3);
        let mut select = RandomDimensionSelect::new();
        select.set_dimensions(50);
        let seen: HashSet<usize> = (0..100).map(|_| select.begin(&mut rng).unwrap()).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_begin_without_dimensions() {
        let mut rng = Random::with_seed(3);
        let mut select = RandomDimensionSelect::new();
        assert!(matches!(
            select.begin(&mut rng),
            Err(DimSelectError::InvalidConfiguration { .. })
        ));
    }
}
