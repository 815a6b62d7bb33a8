//! Breadcrumb command - show the ancestor chain of a folder

use crate::commands::resolve_dataset;
use crate::config::FilmroomConfig;
use crate::dataset::load_library;
use crate::search::{breadcrumbs, find_folder};
use crate::{output, FilmroomError};
use std::path::Path;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Execute the breadcrumb command
///
/// An unknown id prints only the `Library` root. A known folder is followed
/// by its item count.
///
/// # Errors
/// Returns an error if the library dataset cannot be loaded.
pub fn execute(
    config: &FilmroomConfig,
    library: Option<&Path>,
    id: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let path = resolve_dataset(library, config.library_path.as_deref(), "library")?;
    let folders = load_library(&path)?;

    let trail = breadcrumbs(&folders, id);

    if quiet {
        for crumb in &trail {
            println!("{}", crumb.id);
        }
    } else {
        println!("{}", output::breadcrumb_line(&trail, &config.path_separator));
        if let Some(folder) = id.and_then(|id| find_folder(&folders, id)) {
            println!("  {}", output::folder_summary(folder));
        }
    }

    Ok(())
}
