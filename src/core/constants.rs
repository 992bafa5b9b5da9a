//! System constants and configuration defaults for dimension selection.

use static_assertions::const_assert_eq;

/// Sentinel index marking the end of a sampled dimension sequence.
///
/// No dataset can have `usize::MAX + 1` dimensions, so this value is never
/// a legal dimension index.
pub const END_SENTINEL: usize = usize::MAX;

const_assert_eq!(END_SENTINEL, usize::MAX);

/// Requested subset size meaning "derive automatically" (`floor(sqrt(d))`).
pub const AUTO_SUBSET_SIZE: usize = 0;

/// Environment variable overriding the requested subset size.
pub const ENV_REQUESTED_SIZE: &str = "DIMSELECT_REQUESTED_SIZE";

/// Environment variable overriding the total dimension count.
pub const ENV_DIMENSIONS: &str = "DIMSELECT_DIMENSIONS";

/// Environment variable overriding the sampling algorithm.
pub const ENV_ALGORITHM: &str = "DIMSELECT_ALGORITHM";

/// Library version string.
pub const DIMSELECT_VERSION: &str = env!("CARGO_PKG_VERSION");
