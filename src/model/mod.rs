//! Data model for the film room
//!
//! Plain, immutable records the engine reads:
//! - `Play`: one football play with its situation and outcome
//! - `Folder` / `FolderItem`: the library tree
//! - `Clip`: a searchable video clip

pub mod clip;
pub mod library;
pub mod play;

pub use clip::Clip;
pub use library::{Crumb, Folder, FolderItem, ItemKind};
pub use play::{HashMark, PassResult, Play, PlayType};
