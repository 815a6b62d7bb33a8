//! Clips command - keyword search over clips

use crate::commands::resolve_dataset;
use crate::config::FilmroomConfig;
use crate::dataset::load_clips;
use crate::search::search_clips;
use crate::{output, FilmroomError};
use std::path::Path;

type Result<T> = std::result::Result<T, FilmroomError>;

/// Execute the clip search command
///
/// # Errors
/// Returns an error if the clips dataset cannot be loaded.
pub fn execute(
    config: &FilmroomConfig,
    clips: Option<&Path>,
    query: &[String],
    limit: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let path = resolve_dataset(clips, config.clips_path.as_deref(), "clips")?;
    let clips = load_clips(&path)?;

    let query = query.join(" ");
    let limit = limit.unwrap_or(config.clip_result_limit);
    let hits = search_clips(&clips, &query, limit);

    if hits.is_empty() {
        if !quiet {
            println!("No clips match '{query}'.");
        }
        return Ok(());
    }

    for hit in &hits {
        println!("{}", output::clip_line(hit, quiet));
    }

    Ok(())
}
