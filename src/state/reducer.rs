//! Pure state transitions.
//!
//! `reduce` takes the current state, one action and the current time, and
//! returns the next state with the effects the caller must run. It performs
//! no I/O, so every transition is testable without storage or a browser.

use chrono::{DateTime, Utc};

use super::action::Action;
use super::effect::{Effect, Notice};
use super::modal::{Form, FormField, ModalKind, ModalState};
use super::AppState;
use crate::managers::bookmark_manager::{validate_new_bookmark, BookmarkManager, BookmarkManagerTrait};
use crate::managers::folder_manager::{validate_folder_name, FolderManager, FolderManagerTrait};
use crate::types::bookmark::NewBookmark;

/// Next state plus the effects the transition requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: AppState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn persisted(state: AppState) -> Self {
        Self {
            state,
            effects: vec![Effect::Persist],
        }
    }
}

/// Applies one action.
pub fn reduce(mut state: AppState, action: Action, now: DateTime<Utc>) -> Transition {
    match action {
        Action::AddFolder { name } => add_folder(state, &name, now),
        Action::DeleteFolder { id } => {
            let next = FolderManager::new(&state.folders).delete_folder(id);
            if next.len() == state.folders.len() {
                return Transition::unchanged(state);
            }
            state.folders = next;
            Transition::persisted(state)
        }
        Action::AddBookmark(fields) => add_bookmark(state, fields, now),
        Action::DeleteBookmark { id } => {
            let next = BookmarkManager::new(&state.bookmarks).delete_bookmark(id);
            if next.len() == state.bookmarks.len() {
                return Transition::unchanged(state);
            }
            state.bookmarks = next;
            Transition::persisted(state)
        }
        Action::OpenBookmark { id } => {
            match BookmarkManager::new(&state.bookmarks).open_bookmark(id, now) {
                Ok(opened) => {
                    state.bookmarks = opened.bookmarks;
                    Transition {
                        state,
                        effects: vec![Effect::Persist, Effect::OpenUrl(opened.previous.url)],
                    }
                }
                Err(e) => Transition {
                    state,
                    effects: vec![Effect::Notice(Notice::error(e.to_string()))],
                },
            }
        }
        Action::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            Transition::persisted(state)
        }
        Action::ToggleCompactView => {
            state.compact_view = !state.compact_view;
            Transition::persisted(state)
        }
        Action::SetSearchTerm(term) => {
            state.search_term = term;
            Transition::unchanged(state)
        }
        Action::SelectCategory(category) => {
            state.selected_category = category;
            Transition::unchanged(state)
        }
        Action::OpenModal(ModalKind::Folder) => {
            state.folder_modal = std::mem::take(&mut state.folder_modal).open();
            Transition::unchanged(state)
        }
        Action::OpenModal(ModalKind::Bookmark) => {
            state.bookmark_modal = std::mem::take(&mut state.bookmark_modal).open();
            Transition::unchanged(state)
        }
        Action::EditModalField { modal, field, value } => {
            match modal {
                ModalKind::Folder => edit_field(&mut state.folder_modal, field, &value),
                ModalKind::Bookmark => edit_field(&mut state.bookmark_modal, field, &value),
            }
            Transition::unchanged(state)
        }
        Action::ConfirmModal(ModalKind::Folder) => confirm_folder_modal(state, now),
        Action::ConfirmModal(ModalKind::Bookmark) => confirm_bookmark_modal(state, now),
        Action::CancelModal(ModalKind::Folder) => {
            state.folder_modal = ModalState::Closed;
            Transition::unchanged(state)
        }
        Action::CancelModal(ModalKind::Bookmark) => {
            state.bookmark_modal = ModalState::Closed;
            Transition::unchanged(state)
        }
    }
}

fn add_folder(mut state: AppState, name: &str, now: DateTime<Utc>) -> Transition {
    let id = state.issue_id(now);
    state.folders = FolderManager::new(&state.folders).add_folder(id, name);
    Transition::persisted(state)
}

fn add_bookmark(mut state: AppState, fields: NewBookmark, now: DateTime<Utc>) -> Transition {
    let id = state.issue_id(now);
    state.bookmarks = BookmarkManager::new(&state.bookmarks).add_bookmark(id, fields);
    Transition::persisted(state)
}

/// Field edits on a closed modal are dropped.
fn edit_field<F: Form>(modal: &mut ModalState<F>, field: FormField, value: &str) {
    if let ModalState::Open { form, error } = modal {
        if form.set_field(field, value) {
            *error = None;
        }
    }
}

fn confirm_folder_modal(mut state: AppState, now: DateTime<Utc>) -> Transition {
    let ModalState::Open { form, .. } = std::mem::take(&mut state.folder_modal) else {
        return Transition::unchanged(state);
    };

    match validate_folder_name(&form.name) {
        Ok(name) => add_folder(state, &name, now),
        Err(e) => {
            state.folder_modal = ModalState::Open {
                form,
                error: Some(e.to_string()),
            };
            Transition::unchanged(state)
        }
    }
}

fn confirm_bookmark_modal(mut state: AppState, now: DateTime<Utc>) -> Transition {
    let ModalState::Open { form, .. } = std::mem::take(&mut state.bookmark_modal) else {
        return Transition::unchanged(state);
    };

    match validate_new_bookmark(&form) {
        Ok(fields) => add_bookmark(state, fields, now),
        Err(e) => {
            state.bookmark_modal = ModalState::Open {
                form,
                error: Some(e.to_string()),
            };
            Transition::unchanged(state)
        }
    }
}
