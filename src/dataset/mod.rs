//! JSON datasets consumed by the command line
//!
//! Plays, the library tree and clips are produced by external tools and read
//! here as plain JSON arrays. The engine itself never touches the filesystem.

pub mod error;

pub use error::DataError;

use crate::model::{Clip, Folder, Play};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and decode a JSON file
///
/// # Errors
///
/// Returns `DataError::Io` if the file cannot be read, or `DataError::Parse`
/// if its contents do not decode into `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an array of plays
///
/// # Errors
///
/// See [`load_json`].
pub fn load_plays(path: &Path) -> Result<Vec<Play>, DataError> {
    let plays: Vec<Play> = load_json(path)?;
    info!("Loaded {} plays from {}", plays.len(), path.display());
    Ok(plays)
}

/// Load the top-level folders of a library
///
/// # Errors
///
/// See [`load_json`].
pub fn load_library(path: &Path) -> Result<Vec<Folder>, DataError> {
    let folders: Vec<Folder> = load_json(path)?;
    info!("Loaded {} top-level folders from {}", folders.len(), path.display());
    Ok(folders)
}

/// Load an array of clips
///
/// # Errors
///
/// See [`load_json`].
pub fn load_clips(path: &Path) -> Result<Vec<Clip>, DataError> {
    let clips: Vec<Clip> = load_json(path)?;
    info!("Loaded {} clips from {}", clips.len(), path.display());
    Ok(clips)
}
