pub mod bookmark_manager;
pub mod folder_manager;
