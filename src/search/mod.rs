//! Library and clip search
//!
//! - [`tree`]: case-insensitive name search over the folder tree
//! - [`breadcrumb`]: ancestor chains for folder navigation
//! - [`clips`]: keyword-scored free-text search over clips
//!
//! All functions here are read-only over their inputs and never fail: an
//! unknown id or a too-short query simply produces an empty result.

pub mod breadcrumb;
pub mod clips;
pub mod tree;

pub use breadcrumb::{breadcrumbs, find_folder, parent_id};
pub use clips::{search_clips, score_clip, ClipHit};
pub use tree::{search_library, search_tree, MatchKind, TreeMatch, MIN_QUERY_LENGTH};
