use std::error::Error;

use toolmarks::types::errors::*;

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(BookmarkError::NotFound(42).to_string(), "Bookmark not found: 42");
    assert_eq!(
        BookmarkError::EmptyName.to_string(),
        "Bookmark name must not be empty"
    );
    assert_eq!(
        BookmarkError::InvalidUrl("nope".to_string()).to_string(),
        "Invalid bookmark URL: nope"
    );
}

#[test]
fn bookmark_error_implements_error_trait() {
    let err: Box<dyn Error> = Box::new(BookmarkError::NotFound(1));
    assert!(err.source().is_none());
}

// === FolderError Tests ===

#[test]
fn folder_error_display() {
    assert_eq!(FolderError::EmptyName.to_string(), "Folder name must not be empty");
}

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("disk I/O error".to_string()).to_string(),
        "Storage database error: disk I/O error"
    );
    assert_eq!(
        StorageError::SerializationError("bad float".to_string()).to_string(),
        "Storage serialization error: bad float"
    );
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StorageError::DatabaseError(_)));
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::IoError("denied".to_string()).to_string(),
        "Config I/O error: denied"
    );
    assert_eq!(
        ConfigError::SerializationError("eof".to_string()).to_string(),
        "Config serialization error: eof"
    );
    assert_eq!(
        ConfigError::InvalidKey("theme".to_string()).to_string(),
        "Invalid config key: theme"
    );
    assert_eq!(
        ConfigError::InvalidValue("color".to_string()).to_string(),
        "Invalid config value: color"
    );
}

// === OpenError Tests ===

#[test]
fn open_error_display() {
    assert_eq!(
        OpenError::LaunchFailed("no browser".to_string()).to_string(),
        "Failed to open link: no browser"
    );
}

// === AppError Tests ===

#[test]
fn app_error_wraps_source() {
    let err: AppError = StorageError::DatabaseError("locked".to_string()).into();
    assert_eq!(err.to_string(), "Startup failed: Storage database error: locked");
    assert!(err.source().is_some());
}
