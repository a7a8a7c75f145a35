use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;

/// A named grouping container.
///
/// `bookmarks` is carried through storage untouched. No operation fills it or
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub bookmarks: Vec<FolderEntry>,
}

impl Folder {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            bookmarks: Vec::new(),
        }
    }
}

/// An entry of a folder's `bookmarks` list: either a bookmark id or an
/// embedded record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FolderEntry {
    Id(i64),
    Record(Bookmark),
}
