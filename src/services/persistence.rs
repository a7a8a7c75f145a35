//! Persistent store adapter.
//!
//! Mirrors folders, bookmarks and the two view flags into a
//! [`KeyValueStore`] under four independent keys, each holding JSON text.
//! Loading never fails: a missing or unreadable key falls back to its
//! default. Saving writes all four keys every time, one after another, with
//! no transaction spanning them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::database::kv_store::KeyValueStore;
use crate::state::PersistedState;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StorageError;
use crate::types::folder::Folder;

pub const FOLDERS_KEY: &str = "folders";
pub const BOOKMARKS_KEY: &str = "bookmarks";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const COMPACT_VIEW_KEY: &str = "compactView";

/// The only component that reads or writes the durable store.
pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads all four keys, substituting defaults for anything absent or malformed.
    pub fn load(&self) -> PersistedState {
        let state = PersistedState {
            folders: self.load_key(FOLDERS_KEY),
            bookmarks: self.load_key(BOOKMARKS_KEY),
            dark_mode: self.load_key(DARK_MODE_KEY),
            compact_view: self.load_key(COMPACT_VIEW_KEY),
        };
        log::info!(
            "Loaded {} folder(s) and {} bookmark(s)",
            state.folders.len(),
            state.bookmarks.len()
        );
        state
    }

    /// Writes all four keys, changed or not.
    pub fn save(
        &mut self,
        folders: &[Folder],
        bookmarks: &[Bookmark],
        dark_mode: bool,
        compact_view: bool,
    ) -> Result<(), StorageError> {
        self.save_key(FOLDERS_KEY, &folders)?;
        self.save_key(BOOKMARKS_KEY, &bookmarks)?;
        self.save_key(DARK_MODE_KEY, &dark_mode)?;
        self.save_key(COMPACT_VIEW_KEY, &compact_view)?;
        log::debug!(
            "Saved {} folder(s), {} bookmark(s), dark_mode={}, compact_view={}",
            folders.len(),
            bookmarks.len(),
            dark_mode,
            compact_view
        );
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load_key<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                log::warn!("Could not read '{}', using default: {}", key, e);
                return T::default();
            }
        };

        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("Discarding malformed value under '{}': {}", key, e);
                T::default()
            }
        }
    }

    fn save_key<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::SerializationError(format!("Failed to serialize '{}': {}", key, e)))?;
        self.store.set_item(key, &json)
    }
}
