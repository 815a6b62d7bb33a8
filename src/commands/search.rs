//! Search command - find folders and items in the library by name

use crate::commands::resolve_dataset;
use crate::config::FilmroomConfig;
use crate::dataset::load_library;
use crate::search::search_library;
use crate::{output, FilmroomError};
use std::path::Path;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Execute the library search command
///
/// # Errors
/// Returns an error if the library dataset cannot be loaded.
pub fn execute(
    config: &FilmroomConfig,
    library: Option<&Path>,
    query: &str,
    quiet: bool,
) -> Result<()> {
    let path = resolve_dataset(library, config.library_path.as_deref(), "library")?;
    let folders = load_library(&path)?;

    let matches = search_library(&folders, query, config.min_query_length);

    if matches.is_empty() {
        if !quiet {
            if query.trim().chars().count() < config.min_query_length {
                println!(
                    "Query must be at least {} characters.",
                    config.min_query_length
                );
            } else {
                println!("Nothing in the library matches '{query}'.");
            }
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} match(es) for '{query}':", matches.len());
    }
    for found in &matches {
        println!("{}", output::match_line(found, &config.path_separator, quiet));
    }

    Ok(())
}
