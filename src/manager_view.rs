//! Manager view: owner of the bookmark manager's state.
//!
//! Loads the initial [`AppState`] from the persistence adapter, applies
//! actions through the reducer, and runs the requested effects: saving,
//! opening links, and collecting notices for the shell.

use chrono::{DateTime, Utc};

use crate::database::kv_store::KeyValueStore;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::services::link_opener::LinkOpener;
use crate::services::persistence::Persistence;
use crate::state::{reduce, Action, AppState, Effect, Notice};
use crate::types::bookmark::Bookmark;

pub struct ManagerView<S: KeyValueStore> {
    state: AppState,
    persistence: Persistence<S>,
    opener: Box<dyn LinkOpener>,
    top_limit: usize,
}

impl<S: KeyValueStore> ManagerView<S> {
    /// Creates the view and loads its state from `store`.
    pub fn new(store: S, opener: Box<dyn LinkOpener>, top_limit: usize) -> Self {
        let persistence = Persistence::new(store);
        let state = AppState::from_persisted(persistence.load());
        Self {
            state,
            persistence,
            opener,
            top_limit,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn top_limit(&self) -> usize {
        self.top_limit
    }

    /// Changes the length of the "most used" ranking.
    pub fn set_top_limit(&mut self, top_limit: usize) {
        self.top_limit = top_limit;
    }

    /// Applies `action` at the current time. Returns notices for the user.
    pub fn dispatch(&mut self, action: Action) -> Vec<Notice> {
        self.dispatch_at(action, Utc::now())
    }

    /// Applies `action` as if it happened at `now`.
    pub fn dispatch_at(&mut self, action: Action, now: DateTime<Utc>) -> Vec<Notice> {
        log::debug!("Dispatching {}", action.kind());
        let transition = reduce(std::mem::take(&mut self.state), action, now);
        self.state = transition.state;

        let mut notices = Vec::new();
        for effect in transition.effects {
            match effect {
                Effect::Persist => {
                    let s = &self.state;
                    if let Err(e) =
                        self.persistence
                            .save(&s.folders, &s.bookmarks, s.dark_mode, s.compact_view)
                    {
                        log::warn!("Failed to save state: {}", e);
                        notices.push(Notice::error(format!("Changes were not saved: {}", e)));
                    }
                }
                Effect::OpenUrl(url) => {
                    if let Err(e) = self.opener.open(&url) {
                        log::warn!("{}", e);
                        notices.push(Notice::error(e.to_string()));
                    }
                }
                Effect::Notice(notice) => {
                    log::info!("{}", notice.message);
                    notices.push(notice);
                }
            }
        }
        notices
    }

    /// Bookmarks matching the current search term and category.
    pub fn filtered_bookmarks(&self) -> Vec<&Bookmark> {
        BookmarkManager::new(&self.state.bookmarks)
            .filtered_bookmarks(&self.state.search_term, &self.state.selected_category)
    }

    /// The most used bookmarks, highest count first.
    pub fn top_bookmarks(&self) -> Vec<&Bookmark> {
        BookmarkManager::new(&self.state.bookmarks).top_bookmarks(self.top_limit)
    }

    /// Categories offered by the category selector.
    pub fn categories(&self) -> Vec<&str> {
        BookmarkManager::new(&self.state.bookmarks).categories()
    }
}
