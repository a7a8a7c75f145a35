//! toolmarks: a bookmark manager for AI tools.
//!
//! Folders, categorized and tagged bookmarks, search, and a "most used"
//! ranking, persisted to a local key-value store. This library crate exposes
//! all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod manager_view;
pub mod managers;
pub mod platform;
pub mod router;
pub mod services;
pub mod state;
pub mod types;
pub mod ui;
