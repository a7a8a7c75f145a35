//! toolmarks storage layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value store the persistence adapter writes through.
//!
//! # Usage
//!
//! ```no_run
//! use toolmarks::database::{Database, KeyValueStore, SqliteStore};
//!
//! let db = Database::open("storage.db").expect("failed to open store");
//! let mut store = SqliteStore::new(db);
//! store.set_item("darkMode", "true").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, MemoryStore, SqliteStore};
