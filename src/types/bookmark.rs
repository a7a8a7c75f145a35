use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A saved link with usage tracking.
///
/// Field names serialize in camelCase (`useCount`, `lastUsed`) so stored
/// collections stay readable by the browser build of the manager. Fields this
/// build does not know are kept in `extra` and written back on save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub use_count: u64,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bookmark {
    /// Builds a fresh bookmark from submitted form fields. Usage starts at zero.
    pub fn new(id: i64, fields: NewBookmark) -> Self {
        Self {
            id,
            name: fields.name,
            url: fields.url,
            category: fields.category,
            tags: fields.tags,
            use_count: 0,
            last_used: None,
            extra: Map::new(),
        }
    }

    /// Splits the comma-separated `tags` string into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Caller-supplied fields of a bookmark about to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBookmark {
    pub name: String,
    pub url: String,
    pub category: String,
    pub tags: String,
}

impl NewBookmark {
    pub fn new(name: &str, url: &str, category: &str, tags: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            tags: tags.to_string(),
        }
    }
}
