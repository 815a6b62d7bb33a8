//! Facets command - count the values of one filter category

use crate::commands::resolve_dataset;
use crate::config::FilmroomConfig;
use crate::dataset::load_plays;
use crate::filters::{facet_counts, FilterCategory};
use crate::{output, FilmroomError};
use log::warn;
use std::path::Path;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Execute the facets command
///
/// # Errors
/// Returns an error if the dataset cannot be loaded.
pub fn execute(
    config: &FilmroomConfig,
    plays: Option<&Path>,
    category: &str,
    quiet: bool,
) -> Result<()> {
    let path = resolve_dataset(plays, config.plays_path.as_deref(), "plays")?;
    let plays = load_plays(&path)?;

    let category = FilterCategory::from_key(category);
    if !category.is_known() {
        warn!("Unknown filter category '{category}'");
    }

    let counts = facet_counts(&plays, &category);
    if counts.is_empty() {
        if !quiet {
            println!("No values for {category}.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Values of {category}:");
    }
    for (value, count) in &counts {
        println!("{}", output::facet_line(value, *count, quiet));
    }

    Ok(())
}
