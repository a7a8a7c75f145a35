//! Property-based tests for reloading persisted state.
//!
//! Whatever the manager view has saved must come back unchanged when a new
//! view is opened over the same SQLite file.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tempfile::TempDir;
use toolmarks::database::{Database, SqliteStore};
use toolmarks::manager_view::ManagerView;
use toolmarks::services::link_opener::LogOnlyOpener;
use toolmarks::state::Action;
use toolmarks::types::bookmark::NewBookmark;

#[derive(Debug, Clone)]
enum Step {
    Folder(String),
    Bookmark(String, String, String),
    Open(usize),
    DeleteBookmark(usize),
    DeleteFolder(usize),
    ToggleDark,
    ToggleCompact,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        "[a-zA-Z ]{1,12}".prop_map(Step::Folder),
        (
            "[a-zA-Z0-9 ]{1,12}",
            "[a-zA-Z]{0,6}",
            "[a-z, ]{0,12}",
        )
            .prop_map(|(n, c, t)| Step::Bookmark(n, c, t)),
        (0usize..6).prop_map(Step::Open),
        (0usize..6).prop_map(Step::DeleteBookmark),
        (0usize..6).prop_map(Step::DeleteFolder),
        Just(Step::ToggleDark),
        Just(Step::ToggleCompact),
    ]
}

fn open_view(path: &std::path::Path) -> ManagerView<SqliteStore> {
    let db = Database::open(path).expect("Failed to open database");
    ManagerView::new(SqliteStore::new(db), Box::new(LogOnlyOpener), 5)
}

// Property: save then reload yields the same folders, bookmarks (usage
// included) and view flags.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn reload_restores_saved_state(steps in proptest::collection::vec(arb_step(), 1..25)) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("storage.db");
        let mut now = Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap();

        let saved = {
            let mut view = open_view(&path);
            for step in steps {
                now += Duration::milliseconds(137);
                let action = match step {
                    Step::Folder(name) => Action::AddFolder { name },
                    Step::Bookmark(name, category, tags) => Action::AddBookmark(NewBookmark::new(
                        &name,
                        "https://saved.example/path?q=1",
                        &category,
                        &tags,
                    )),
                    Step::Open(i) => match view.state().bookmarks.get(i) {
                        Some(b) => Action::OpenBookmark { id: b.id },
                        None => continue,
                    },
                    Step::DeleteBookmark(i) => match view.state().bookmarks.get(i) {
                        Some(b) => Action::DeleteBookmark { id: b.id },
                        None => continue,
                    },
                    Step::DeleteFolder(i) => match view.state().folders.get(i) {
                        Some(f) => Action::DeleteFolder { id: f.id },
                        None => continue,
                    },
                    Step::ToggleDark => Action::ToggleDarkMode,
                    Step::ToggleCompact => Action::ToggleCompactView,
                };
                let notices = view.dispatch_at(action, now);
                prop_assert!(notices.is_empty(), "unexpected notices: {:?}", notices);
            }
            view.state().persisted()
        };

        let reloaded = open_view(&path);
        prop_assert_eq!(reloaded.state().persisted(), saved);
    }
}
