//! Two-page router.

/// Path of the landing page.
pub const LANDING_PATH: &str = "/";
/// Path of the bookmark manager.
pub const MANAGER_PATH: &str = "/main";

/// Page selected by a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Manager,
    NotFound(String),
}

impl Route {
    /// Matches a path. A trailing slash is ignored and an empty path means `/`.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => LANDING_PATH,
            p => p,
        };
        match normalized {
            LANDING_PATH => Route::Landing,
            MANAGER_PATH => Route::Manager,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => LANDING_PATH,
            Route::Manager => MANAGER_PATH,
            Route::NotFound(path) => path,
        }
    }
}
