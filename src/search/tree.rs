//! Name search over the folder tree

use crate::model::Folder;
use log::{debug, trace};
use serde::Serialize;

/// Queries shorter than this (in characters) produce no results
pub const MIN_QUERY_LENGTH: usize = 2;

/// Whether a match is a folder or a leaf item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Folder,
    Item,
}

/// A folder or item whose name contains the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeMatch {
    pub kind: MatchKind,
    pub id: String,
    pub name: String,
    /// Names of the ancestor folders, root first
    pub path: Vec<String>,
}

impl TreeMatch {
    /// Ancestor names joined for display
    #[must_use]
    pub fn display_path(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

/// Every folder and item whose name contains `query`, ignoring case
///
/// Traversal is depth-first in tree order: a folder comes before its
/// subfolders, and its subfolders before its own items. A match does not
/// depend on whether an ancestor matched.
#[must_use]
pub fn search_tree(folders: &[Folder], query: &str) -> Vec<TreeMatch> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    let mut path = Vec::new();

    for folder in folders {
        collect_matches(folder, &needle, &mut path, &mut matches);
    }

    debug!("Tree search for '{query}' found {} matches", matches.len());
    matches
}

fn collect_matches(
    folder: &Folder,
    needle: &str,
    path: &mut Vec<String>,
    matches: &mut Vec<TreeMatch>,
) {
    trace!("Visiting folder {} at depth {}", folder.id, path.len());

    if folder.name.to_lowercase().contains(needle) {
        matches.push(TreeMatch {
            kind: MatchKind::Folder,
            id: folder.id.clone(),
            name: folder.name.clone(),
            path: path.clone(),
        });
    }

    path.push(folder.name.clone());

    for child in &folder.folders {
        collect_matches(child, needle, path, matches);
    }

    for item in &folder.items {
        if item.name.to_lowercase().contains(needle) {
            matches.push(TreeMatch {
                kind: MatchKind::Item,
                id: item.id.clone(),
                name: item.name.clone(),
                path: path.clone(),
            });
        }
    }

    path.pop();
}

/// Search as typed into the library search box
///
/// The trimmed query must be at least `min_len` characters long, otherwise
/// nothing is returned.
#[must_use]
pub fn search_library(folders: &[Folder], query: &str, min_len: usize) -> Vec<TreeMatch> {
    let query = query.trim();
    if query.chars().count() < min_len {
        return Vec::new();
    }
    search_tree(folders, query)
}
