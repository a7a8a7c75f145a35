//! Application state and its transitions.
//!
//! [`AppState`] is the single value the manager view renders from. It only
//! changes through [`reducer::reduce`].

pub mod action;
pub mod effect;
pub mod modal;
pub mod reducer;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::folder::Folder;

use modal::{FolderForm, ModalState};

pub use action::Action;
pub use effect::{Effect, Notice, NoticeLevel};
pub use reducer::{reduce, Transition};

/// The part of the state mirrored to durable storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub folders: Vec<Folder>,
    pub bookmarks: Vec<Bookmark>,
    pub dark_mode: bool,
    pub compact_view: bool,
}

/// Everything the manager view owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub folders: Vec<Folder>,
    pub bookmarks: Vec<Bookmark>,
    pub dark_mode: bool,
    pub compact_view: bool,
    pub search_term: String,
    pub selected_category: String,
    pub folder_modal: ModalState<FolderForm>,
    pub bookmark_modal: ModalState<NewBookmark>,
    /// Highest id handed out so far, across folders and bookmarks.
    last_issued_id: i64,
}

impl AppState {
    /// Builds the initial state from loaded storage. Ephemeral fields start empty.
    pub fn from_persisted(persisted: PersistedState) -> Self {
        let last_issued_id = persisted
            .folders
            .iter()
            .map(|f| f.id)
            .chain(persisted.bookmarks.iter().map(|b| b.id))
            .max()
            .unwrap_or(0);

        Self {
            folders: persisted.folders,
            bookmarks: persisted.bookmarks,
            dark_mode: persisted.dark_mode,
            compact_view: persisted.compact_view,
            last_issued_id,
            ..Self::default()
        }
    }

    /// Copies out the stored part of the state.
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            folders: self.folders.clone(),
            bookmarks: self.bookmarks.clone(),
            dark_mode: self.dark_mode,
            compact_view: self.compact_view,
        }
    }

    /// Issues a new identifier: the clock in milliseconds, bumped above every
    /// id issued before so same-millisecond creations stay distinct.
    ///
    /// Once the sequence has reached `i64::MAX` (only possible with stored
    /// data), the lowest id at or above the clock that no record uses is
    /// handed out instead.
    pub(crate) fn issue_id(&mut self, now: DateTime<Utc>) -> i64 {
        let clock = now.timestamp_millis();
        match self.last_issued_id.checked_add(1) {
            Some(next) => {
                let id = clock.max(next);
                self.last_issued_id = id;
                id
            }
            None => self.lowest_free_id_from(clock),
        }
    }

    fn lowest_free_id_from(&self, start: i64) -> i64 {
        let used: BTreeSet<i64> = self
            .folders
            .iter()
            .map(|f| f.id)
            .chain(self.bookmarks.iter().map(|b| b.id))
            .collect();
        (start..=i64::MAX)
            .chain((i64::MIN..start).rev())
            .find(|id| !used.contains(id))
            .unwrap_or(start)
    }
}
