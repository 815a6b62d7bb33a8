//! Breadcrumb trails for folder navigation

use crate::model::{Crumb, Folder};
use log::debug;

/// Ancestor chain of a folder, root first and ending with the folder itself
///
/// `None` stands for the library root and yields an empty trail, as does an id
/// that is not in the tree.
#[must_use]
pub fn breadcrumbs(folders: &[Folder], target: Option<&str>) -> Vec<Crumb> {
    let Some(target) = target else {
        return Vec::new();
    };

    let mut trail = Vec::new();
    for folder in folders {
        if build_trail(folder, target, &mut trail) {
            return trail;
        }
    }

    debug!("Folder {target} not found, no breadcrumbs");
    Vec::new()
}

fn build_trail(folder: &Folder, target: &str, trail: &mut Vec<Crumb>) -> bool {
    trail.push(Crumb::from(folder));

    if folder.id == target {
        return true;
    }

    for child in &folder.folders {
        if build_trail(child, target, trail) {
            return true;
        }
    }

    trail.pop();
    false
}

/// Find a folder anywhere in the tree by id
#[must_use]
pub fn find_folder<'a>(folders: &'a [Folder], id: &str) -> Option<&'a Folder> {
    folders.iter().find_map(|folder| {
        if folder.id == id {
            Some(folder)
        } else {
            find_folder(&folder.folders, id)
        }
    })
}

/// Id of the folder one level up, `None` for top-level or unknown folders
#[must_use]
pub fn parent_id<'a>(folders: &'a [Folder], id: &str) -> Option<&'a str> {
    folders.iter().find_map(|folder| {
        if folder.folders.iter().any(|child| child.id == id) {
            Some(folder.id.as_str())
        } else {
            parent_id(&folder.folders, id)
        }
    })
}
