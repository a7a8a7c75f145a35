use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(i64),
    /// The bookmark name is empty.
    EmptyName,
    /// The URL does not parse as an absolute URL.
    InvalidUrl(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::EmptyName => write!(f, "Bookmark name must not be empty"),
            BookmarkError::InvalidUrl(url) => write!(f, "Invalid bookmark URL: {}", url),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === FolderError ===

/// Errors related to folder operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderError {
    /// The folder name is empty.
    EmptyName,
}

impl fmt::Display for FolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderError::EmptyName => write!(f, "Folder name must not be empty"),
        }
    }
}

impl std::error::Error for FolderError {}

// === StorageError ===

/// Errors raised by the durable key-value store.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize a value for storage.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === ConfigError ===

/// Errors related to loading and updating the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the config file.
    SerializationError(String),
    /// The provided config key is invalid.
    InvalidKey(String),
    /// The provided config value is invalid.
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
            ConfigError::InvalidKey(key) => write!(f, "Invalid config key: {}", key),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid config value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// === OpenError ===

/// Errors raised when handing a URL to the system browser.
#[derive(Debug)]
pub enum OpenError {
    /// The launcher process could not be started or reported failure.
    LaunchFailed(String),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::LaunchFailed(msg) => write!(f, "Failed to open link: {}", msg),
        }
    }
}

impl std::error::Error for OpenError {}

// === AppError ===

/// Errors raised while starting the application shell.
#[derive(Debug)]
pub enum AppError {
    /// The durable store could not be opened.
    Storage(StorageError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(e) => write!(f, "Startup failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Storage(e) => Some(e),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

