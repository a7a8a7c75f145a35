//! Unit tests for FolderManager.

use rstest::rstest;
use toolmarks::managers::folder_manager::{validate_folder_name, FolderManager, FolderManagerTrait};
use toolmarks::types::errors::FolderError;
use toolmarks::types::folder::Folder;

fn sample() -> Vec<Folder> {
    vec![Folder::new(1, "Work"), Folder::new(2, "Play"), Folder::new(3, "Work")]
}

#[test]
fn test_add_appends_empty_folder() {
    let folders = sample();
    let next = FolderManager::new(&folders).add_folder(4, "Research");
    assert_eq!(next.len(), 4);
    assert_eq!(next[3], Folder::new(4, "Research"));
    assert!(next[3].bookmarks.is_empty());
    assert_eq!(&next[..3], &folders[..]);
}

#[test]
fn test_duplicate_names_are_allowed() {
    let next = FolderManager::new(&[]).add_folder(1, "Work");
    let next = FolderManager::new(&next).add_folder(2, "Work");
    assert_eq!(next.len(), 2);
    assert_ne!(next[0].id, next[1].id);
}

#[test]
fn test_delete_removes_only_matching_id() {
    let folders = sample();
    let next = FolderManager::new(&folders).delete_folder(1);
    let ids: Vec<i64> = next.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_get_and_list() {
    let folders = sample();
    let mgr = FolderManager::new(&folders);
    assert_eq!(mgr.get_folder(2).map(|f| f.name.as_str()), Some("Play"));
    assert!(mgr.get_folder(9).is_none());
    assert_eq!(mgr.list_folders(), &folders[..]);
}

#[rstest]
#[case("Work", Ok("Work".to_string()))]
#[case("\tDeep Research  ", Ok("Deep Research".to_string()))]
#[case("", Err(FolderError::EmptyName))]
#[case(" \n ", Err(FolderError::EmptyName))]
fn test_validate_folder_name(#[case] input: &str, #[case] expected: Result<String, FolderError>) {
    assert_eq!(validate_folder_name(input), expected);
}
