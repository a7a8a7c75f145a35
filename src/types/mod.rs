pub mod bookmark;
pub mod config;
pub mod errors;
pub mod folder;
