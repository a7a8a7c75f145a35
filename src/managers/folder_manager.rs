//! Folder Manager for toolmarks.
//!
//! Implements `FolderManagerTrait` over a borrowed folder collection. Every
//! mutating operation returns a new collection and leaves the borrowed one as
//! it was.

use crate::types::errors::FolderError;
use crate::types::folder::Folder;

/// Trait defining folder operations.
pub trait FolderManagerTrait<'a> {
    fn add_folder(&self, id: i64, name: &str) -> Vec<Folder>;
    fn delete_folder(&self, id: i64) -> Vec<Folder>;
    fn get_folder(&self, id: i64) -> Option<&'a Folder>;
    fn list_folders(&self) -> &'a [Folder];
}

/// Folder manager reading from a borrowed collection.
pub struct FolderManager<'a> {
    folders: &'a [Folder],
}

impl<'a> FolderManager<'a> {
    pub fn new(folders: &'a [Folder]) -> Self {
        Self { folders }
    }
}

impl<'a> FolderManagerTrait<'a> for FolderManager<'a> {
    /// Appends a folder with an empty `bookmarks` list. Names need not be unique.
    fn add_folder(&self, id: i64, name: &str) -> Vec<Folder> {
        let mut next = self.folders.to_vec();
        next.push(Folder::new(id, name));
        next
    }

    /// Drops the folder with the given id. Absent ids leave the collection as is.
    /// Bookmarks are untouched.
    fn delete_folder(&self, id: i64) -> Vec<Folder> {
        self.folders.iter().filter(|f| f.id != id).cloned().collect()
    }

    fn get_folder(&self, id: i64) -> Option<&'a Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    /// Folders in insertion order.
    fn list_folders(&self) -> &'a [Folder] {
        self.folders
    }
}

/// Checks a submitted folder name and returns it trimmed.
pub fn validate_folder_name(name: &str) -> Result<String, FolderError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FolderError::EmptyName);
    }
    Ok(trimmed.to_string())
}
