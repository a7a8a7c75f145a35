use crate::types::bookmark::NewBookmark;

use super::modal::{FormField, ModalKind};

/// Every state transition the manager view understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddFolder { name: String },
    DeleteFolder { id: i64 },
    AddBookmark(NewBookmark),
    DeleteBookmark { id: i64 },
    OpenBookmark { id: i64 },
    ToggleDarkMode,
    ToggleCompactView,
    SetSearchTerm(String),
    SelectCategory(String),
    OpenModal(ModalKind),
    EditModalField {
        modal: ModalKind,
        field: FormField,
        value: String,
    },
    ConfirmModal(ModalKind),
    CancelModal(ModalKind),
}

impl Action {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddFolder { .. } => "add-folder",
            Action::DeleteFolder { .. } => "delete-folder",
            Action::AddBookmark(_) => "add-bookmark",
            Action::DeleteBookmark { .. } => "delete-bookmark",
            Action::OpenBookmark { .. } => "open-bookmark",
            Action::ToggleDarkMode => "toggle-dark-mode",
            Action::ToggleCompactView => "toggle-compact-view",
            Action::SetSearchTerm(_) => "set-search-term",
            Action::SelectCategory(_) => "select-category",
            Action::OpenModal(_) => "open-modal",
            Action::EditModalField { .. } => "edit-modal-field",
            Action::ConfirmModal(_) => "confirm-modal",
            Action::CancelModal(_) => "cancel-modal",
        }
    }
}
