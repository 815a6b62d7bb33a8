//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and the loaded configuration and runs the operation against a dataset.

pub mod breadcrumb;
pub mod clips;
pub mod config;
pub mod facets;
pub mod filter;
pub mod search;

// Re-export execute functions for convenience
pub use breadcrumb::execute as breadcrumb;
pub use clips::execute as clips;
pub use self::config::execute as config;
pub use facets::execute as facets;
pub use filter::execute as filter;
pub use search::execute as search;

use crate::dataset::DataError;
use std::path::{Path, PathBuf};

/// Pick the dataset path from the command line, falling back to config
///
/// # Errors
///
/// Returns `DataError::MissingPath` if neither is set.
pub fn resolve_dataset(
    arg: Option<&Path>,
    configured: Option<&Path>,
    what: &'static str,
) -> Result<PathBuf, DataError> {
    arg.or(configured)
        .map(Path::to_path_buf)
        .ok_or(DataError::MissingPath(what))
}
