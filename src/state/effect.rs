/// Side effects requested by a transition. The reducer never performs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write folders, bookmarks and both view flags to the store.
    Persist,
    /// Open the URL in a new browsing context.
    OpenUrl(String),
    /// Show a message to the user.
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
