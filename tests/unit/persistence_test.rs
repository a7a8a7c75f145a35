//! Unit tests for the persistence adapter over the SQLite store.

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use toolmarks::database::{Database, KeyValueStore, MemoryStore, SqliteStore};
use toolmarks::services::persistence::{
    Persistence, BOOKMARKS_KEY, COMPACT_VIEW_KEY, DARK_MODE_KEY, FOLDERS_KEY,
};
use toolmarks::types::bookmark::{Bookmark, NewBookmark};
use toolmarks::types::folder::Folder;

/// Values as the browser build of the manager left them in local storage.
const BROWSER_FOLDERS: &str = r#"[{"id":1715000000000,"name":"Work","bookmarks":[]}]"#;
const BROWSER_BOOKMARKS: &str = r#"[{"name":"ToolA","url":"https://a.example","category":"AI","tags":"x","id":1715000000001,"useCount":2,"lastUsed":"2024-05-06T12:34:56.789Z"},{"name":"ToolB","url":"https://b.example","category":"","tags":"","id":1715000000002,"useCount":0,"lastUsed":null}]"#;

#[test]
fn test_reads_values_written_by_browser_build() {
    let mut store = MemoryStore::new();
    store.set_item(FOLDERS_KEY, BROWSER_FOLDERS).unwrap();
    store.set_item(BOOKMARKS_KEY, BROWSER_BOOKMARKS).unwrap();
    store.set_item(DARK_MODE_KEY, "true").unwrap();
    store.set_item(COMPACT_VIEW_KEY, "false").unwrap();

    let loaded = Persistence::new(store).load();
    assert_eq!(loaded.folders, vec![Folder::new(1715000000000, "Work")]);
    assert_eq!(loaded.bookmarks.len(), 2);
    assert_eq!(loaded.bookmarks[0].use_count, 2);
    assert_eq!(
        loaded.bookmarks[0].last_used,
        Some(Utc.with_ymd_and_hms(2024, 5, 6, 12, 34, 56).unwrap() + chrono::Duration::milliseconds(789))
    );
    assert_eq!(loaded.bookmarks[1].last_used, None);
    assert!(loaded.dark_mode);
    assert!(!loaded.compact_view);
}

#[test]
fn test_save_then_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");

    let folders = vec![Folder::new(10, "Work"), Folder::new(11, "Work")];
    let mut opened = Bookmark::new(12, NewBookmark::new("ToolA", "https://a.example", "AI", "x"));
    opened.use_count = 4;
    opened.last_used = Some(Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap());
    let bookmarks = vec![opened];

    {
        let mut persistence = Persistence::new(SqliteStore::new(Database::open(&path).unwrap()));
        persistence.save(&folders, &bookmarks, true, true).unwrap();
    }

    let persistence = Persistence::new(SqliteStore::new(Database::open(&path).unwrap()));
    let loaded = persistence.load();
    assert_eq!(loaded.folders, folders);
    assert_eq!(loaded.bookmarks, bookmarks);
    assert!(loaded.dark_mode);
    assert!(loaded.compact_view);
}

#[test]
fn test_malformed_bookmarks_do_not_affect_other_keys() {
    let mut store = MemoryStore::new();
    store.set_item(FOLDERS_KEY, BROWSER_FOLDERS).unwrap();
    store.set_item(BOOKMARKS_KEY, r#"[{"id":"not-a-number"}]"#).unwrap();
    store.set_item(COMPACT_VIEW_KEY, "true").unwrap();

    let loaded = Persistence::new(store).load();
    assert_eq!(loaded.folders.len(), 1);
    assert!(loaded.bookmarks.is_empty());
    assert!(loaded.compact_view);
}

#[test]
fn test_save_overwrites_previous_values() {
    let mut persistence = Persistence::new(MemoryStore::new());
    persistence.save(&[Folder::new(1, "Old")], &[], true, false).unwrap();
    persistence.save(&[], &[], false, false).unwrap();

    let store = persistence.store();
    assert_eq!(store.get_item(FOLDERS_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(store.get_item(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    assert_eq!(store.keys().unwrap().len(), 4);
}

#[test]
fn test_unknown_bookmark_fields_survive_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.db");
    let stored = r#"[{"name":"ToolA","url":"https://a.example","category":"AI","tags":"x","id":7,"useCount":1,"lastUsed":null,"favicon":"https://a.example/icon.png","pinned":true}]"#;

    {
        let mut store = SqliteStore::new(Database::open(&path).unwrap());
        store.set_item(BOOKMARKS_KEY, stored).unwrap();
        let mut persistence = Persistence::new(store);
        let loaded = persistence.load();
        persistence
            .save(&loaded.folders, &loaded.bookmarks, loaded.dark_mode, loaded.compact_view)
            .unwrap();
    }

    let store = SqliteStore::new(Database::open(&path).unwrap());
    let raw = store.get_item(BOOKMARKS_KEY).unwrap().unwrap();
    let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved[0]["favicon"], "https://a.example/icon.png");
    assert_eq!(saved[0]["pinned"], true);
    assert_eq!(saved[0]["useCount"], 1);
    assert!(saved[0].get("extra").is_none());
}
