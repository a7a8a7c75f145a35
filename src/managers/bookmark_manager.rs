//! Bookmark Manager for toolmarks.
//!
//! Implements `BookmarkManagerTrait`: add, delete and open over a borrowed
//! collection, plus the search filter and the usage ranking. Mutations return
//! a new collection; the borrowed one is never reordered or edited.

use chrono::{DateTime, Utc};
use url::Url;

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::BookmarkError;

/// Default length of the "most used" ranking.
pub const TOP_BOOKMARKS_LIMIT: usize = 5;

/// Result of opening a bookmark.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedBookmark {
    /// The collection with the opened record's usage updated.
    pub bookmarks: Vec<Bookmark>,
    /// The record as it was before the update. Its `url` is what gets opened.
    pub previous: Bookmark,
}

/// Trait defining bookmark operations.
///
/// Lookups and derived lists borrow from the backing collection, so they
/// outlive the manager itself.
pub trait BookmarkManagerTrait<'a> {
    fn add_bookmark(&self, id: i64, fields: NewBookmark) -> Vec<Bookmark>;
    fn delete_bookmark(&self, id: i64) -> Vec<Bookmark>;
    fn open_bookmark(&self, id: i64, now: DateTime<Utc>) -> Result<OpenedBookmark, BookmarkError>;
    fn get_bookmark(&self, id: i64) -> Option<&'a Bookmark>;
    fn filtered_bookmarks(&self, search_term: &str, selected_category: &str) -> Vec<&'a Bookmark>;
    fn top_bookmarks(&self, limit: usize) -> Vec<&'a Bookmark>;
    fn categories(&self) -> Vec<&'a str>;
}

/// Bookmark manager reading from a borrowed collection.
pub struct BookmarkManager<'a> {
    bookmarks: &'a [Bookmark],
}

impl<'a> BookmarkManager<'a> {
    pub fn new(bookmarks: &'a [Bookmark]) -> Self {
        Self { bookmarks }
    }
}

impl<'a> BookmarkManagerTrait<'a> for BookmarkManager<'a> {
    /// Appends a bookmark with `use_count = 0` and no `last_used`.
    fn add_bookmark(&self, id: i64, fields: NewBookmark) -> Vec<Bookmark> {
        let mut next = self.bookmarks.to_vec();
        next.push(Bookmark::new(id, fields));
        next
    }

    /// Drops the bookmark with the given id. Absent ids leave the collection as is.
    fn delete_bookmark(&self, id: i64) -> Vec<Bookmark> {
        self.bookmarks.iter().filter(|b| b.id != id).cloned().collect()
    }

    /// Bumps the usage of one bookmark.
    ///
    /// `use_count` grows by exactly one and `last_used` becomes `now`, or stays
    /// at its previous value if the clock reads earlier. Other records are
    /// copied unchanged.
    fn open_bookmark(&self, id: i64, now: DateTime<Utc>) -> Result<OpenedBookmark, BookmarkError> {
        let previous = self
            .get_bookmark(id)
            .cloned()
            .ok_or(BookmarkError::NotFound(id))?;

        let bookmarks = self
            .bookmarks
            .iter()
            .map(|b| {
                if b.id != id {
                    return b.clone();
                }
                let last_used = match b.last_used {
                    Some(prev) if prev > now => prev,
                    _ => now,
                };
                Bookmark {
                    use_count: b.use_count.saturating_add(1),
                    last_used: Some(last_used),
                    ..b.clone()
                }
            })
            .collect();

        Ok(OpenedBookmark { bookmarks, previous })
    }

    fn get_bookmark(&self, id: i64) -> Option<&'a Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Case-insensitive substring match on `name`, and exact `category` match
    /// unless `selected_category` is empty. Collection order is kept.
    fn filtered_bookmarks(&self, search_term: &str, selected_category: &str) -> Vec<&'a Bookmark> {
        let needle = search_term.to_lowercase();
        self.bookmarks
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .filter(|b| selected_category.is_empty() || b.category == selected_category)
            .collect()
    }

    /// Highest `use_count` first, at most `limit` entries. Ties keep
    /// collection order.
    fn top_bookmarks(&self, limit: usize) -> Vec<&'a Bookmark> {
        let mut ranked: Vec<&'a Bookmark> = self.bookmarks.iter().collect();
        ranked.sort_by(|a, b| b.use_count.cmp(&a.use_count));
        ranked.truncate(limit);
        ranked
    }

    /// Distinct non-empty categories in order of first appearance.
    fn categories(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for b in self.bookmarks {
            let category = b.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

/// Checks submitted bookmark fields.
///
/// The name must be non-blank and the URL must parse as an absolute
/// `http`/`https` URL. Returns the fields with name and URL trimmed.
pub fn validate_new_bookmark(fields: &NewBookmark) -> Result<NewBookmark, BookmarkError> {
    let name = fields.name.trim();
    if name.is_empty() {
        return Err(BookmarkError::EmptyName);
    }

    let url = fields.url.trim();
    let parsed = Url::parse(url).map_err(|_| BookmarkError::InvalidUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BookmarkError::InvalidUrl(url.to_string()));
    }

    Ok(NewBookmark {
        name: name.to_string(),
        url: url.to_string(),
        category: fields.category.trim().to_string(),
        tags: fields.tags.clone(),
    })
}
