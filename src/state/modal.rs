//! Creation modals.
//!
//! Each modal is `Closed` or `Open` with the form being filled in. The form
//! is the value handed to the create operation on confirm, so nothing typed
//! into a modal is dropped.

use crate::types::bookmark::NewBookmark;

/// Which creation modal an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Folder,
    Bookmark,
}

/// An input field inside a creation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Url,
    Category,
    Tags,
}

impl FormField {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Some(FormField::Name),
            "url" => Some(FormField::Url),
            "category" => Some(FormField::Category),
            "tags" => Some(FormField::Tags),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Url => "url",
            FormField::Category => "category",
            FormField::Tags => "tags",
        }
    }
}

/// Form of the add-folder modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderForm {
    pub name: String,
}

/// Form fields that a modal knows how to update.
pub trait Form: Default {
    /// Stores `value` in `field`. Returns false if the form has no such field.
    fn set_field(&mut self, field: FormField, value: &str) -> bool;
}

impl Form for FolderForm {
    fn set_field(&mut self, field: FormField, value: &str) -> bool {
        match field {
            FormField::Name => {
                self.name = value.to_string();
                true
            }
            _ => false,
        }
    }
}

impl Form for NewBookmark {
    fn set_field(&mut self, field: FormField, value: &str) -> bool {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Url => &mut self.url,
            FormField::Category => &mut self.category,
            FormField::Tags => &mut self.tags,
        };
        *slot = value.to_string();
        true
    }
}

/// Two-state modal machine carrying its form while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState<F> {
    Closed,
    Open {
        form: F,
        /// Inline message from the last rejected confirm.
        error: Option<String>,
    },
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<F: Form> ModalState<F> {
    /// Opens with an empty form. Already-open modals keep their form.
    pub fn open(self) -> Self {
        match self {
            ModalState::Closed => ModalState::Open {
                form: F::default(),
                error: None,
            },
            open => open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            ModalState::Open { form, .. } => Some(form),
            ModalState::Closed => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ModalState::Open { error, .. } => error.as_deref(),
            ModalState::Closed => None,
        }
    }
}
