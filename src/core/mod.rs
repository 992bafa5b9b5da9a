//! Core infrastructure: constants, error handling, random sources and
//! logging initialization.
//!
//! - [`constants`]: the end sentinel and configuration defaults
//! - [`error`]: [`DimSelectError`] and the crate-wide [`Result`] alias
//! - [`utils`]: the [`RandomSource`](utils::random::RandomSource) abstraction

pub mod constants;
pub mod error;
pub mod utils;

pub use constants::*;
pub use error::{DimSelectError, Result};
pub use utils::random::{Random, RandomSource};

use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/// Initialize logging for the library.
///
/// Defaults `RUST_LOG` to `info` when unset and installs `env_logger`.
/// Safe to call more than once, and a logger installed by the host
/// application is left untouched.
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_ok() {
            log::debug!("dimselect {} logging initialized", DIMSELECT_VERSION);
        }
    });
}

/// Check if [`initialize_logging`] has already run.
pub fn is_logging_initialized() -> bool {
    LOGGING_INIT.is_completed()
}
