//! Selection of every dimension, in order.

use super::{DimensionSelect, SelectState};
use crate::core::constants::END_SENTINEL;
use crate::core::error::{DimSelectError, Result};
use crate::core::utils::random::RandomSource;

/// Visits dimensions `0..d` in order; the random source is not used.
#[derive(Debug, Clone)]
pub struct AllDimensionSelect {
    dimensions: usize,
    cursor: usize,
    state: SelectState,
}

impl AllDimensionSelect {
    /// Create a selector; the dimension count starts at 0.
    pub fn new() -> Self {
        AllDimensionSelect {
            dimensions: 0,
            cursor: 0,
            state: SelectState::Idle,
        }
    }
}

impl Default for AllDimensionSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionSelect for AllDimensionSelect {
    fn begin(&mut self, _rng: &mut dyn RandomSource) -> Result<usize> {
        if self.dimensions == 0 {
            self.state = SelectState::Idle;
            return Err(DimSelectError::invalid_configuration(
                "dimensions must be set before begin()",
            ));
        }
        self.cursor = 0;
        self.state = SelectState::Iterating;
        Ok(0)
    }

    fn next(&mut self) -> Result<usize> {
        if self.state == SelectState::Idle {
            return Err(DimSelectError::NotStarted);
        }
        if self.cursor >= self.dimensions {
            return Err(DimSelectError::exhausted(self.dimensions));
        }
        self.cursor += 1;
        if self.cursor == self.dimensions {
            Ok(END_SENTINEL)
        } else {
            Ok(self.cursor)
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
    use crate::tree::dimension_select::collect_dimensions;

    #[test]
    fn test_visits_all_in_order() {
        let mut rng = Random::with_seed(0);
        let mut select = AllDimensionSelect::new();
        select.set_dimensions(5);
        assert_eq!(collect_dimensions(&mut select, &mut rng).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_dimension() {
        let mut rng = Random::with_seed(0);
        let mut select = AllDimensionSelect::new();
        select.set_dimensions(1);
        assert_eq!(select.begin(&mut rng).unwrap(), 0);
        assert_eq!(select.next().unwrap(), END_SENTINEL);
        assert!(matches!(select.next(), Err(DimSelectError::Exhausted { returned: 1 })));
    }

    #[test]
    fn test_protocol_errors() {
        let mut rng = Random::with_seed(0);
        let mut select = AllDimensionSelect::new();
        assert!(matches!(select.next(), Err(DimSelectError::NotStarted)));
        assert!(select.begin(&mut rng).is_err());
    }
}
