//! Folder tree of the video library

use serde::{Deserialize, Serialize};

/// What a leaf item in a folder holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Video,
    Playlist,
    Document,
}

/// A leaf entry of the library tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

impl FolderItem {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Video,
            duration_secs: None,
        }
    }
}

/// A folder with ordered subfolders and items
///
/// A library is the ordered list of its top-level folders; there is no
/// explicit root node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub items: Vec<FolderItem>,
}

impl Folder {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folders: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Append a subfolder
    #[must_use]
    pub fn with_folder(mut self, folder: Self) -> Self {
        self.folders.push(folder);
        self
    }

    /// Append a leaf item
    #[must_use]
    pub fn with_item(mut self, item: FolderItem) -> Self {
        self.items.push(item);
        self
    }

    /// Total number of items in this folder and all subfolders
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len() + self.folders.iter().map(Self::item_count).sum::<usize>()
    }
}

/// One step of a breadcrumb trail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Crumb {
    pub id: String,
    pub name: String,
}

impl From<&Folder> for Crumb {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.clone(),
            name: folder.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_is_recursive() {
        let folder = Folder::new("f1", "Season 2024")
            .with_item(FolderItem::new("i1", "Opener"))
            .with_folder(
                Folder::new("f2", "Week 1")
                    .with_item(FolderItem::new("i2", "Offense"))
                    .with_item(FolderItem::new("i3", "Defense")),
            );

        assert_eq!(folder.item_count(), 3);
    }

    #[test]
    fn test_folder_json_defaults() {
        let folder: Folder = serde_json::from_str(r#"{"id": "f", "name": "Empty"}"#).unwrap();
        assert!(folder.folders.is_empty());
        assert!(folder.items.is_empty());

        let item: FolderItem =
            serde_json::from_str(r#"{"id": "i", "name": "Cut-ups", "kind": "playlist", "durationSecs": 90}"#).unwrap();
        assert_eq!(item.kind, ItemKind::Playlist);
        assert_eq!(item.duration_secs, Some(90));
    }
}
