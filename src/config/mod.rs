//! Config module.
//! Provides the run configuration, log levels, path helpers and validation.

pub mod paths;
pub mod types;
mod validate;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};

/// Directory organized when none is given on the command line.
pub const SOURCE_DIR_DEFAULT: &str = ".";
/// Capacity of the bounded task queue between the scanner and the workers.
pub const QUEUE_CAPACITY_DEFAULT: usize = 100;

/// Worker pool size: twice the available hardware parallelism.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_mul(2)
}
