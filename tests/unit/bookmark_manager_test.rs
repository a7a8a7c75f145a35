//! Unit tests for BookmarkManager.

use chrono::{Duration, TimeZone, Utc};
use rstest::rstest;
use toolmarks::managers::bookmark_manager::{
    validate_new_bookmark, BookmarkManager, BookmarkManagerTrait, TOP_BOOKMARKS_LIMIT,
};
use toolmarks::types::bookmark::{Bookmark, NewBookmark};
use toolmarks::types::errors::BookmarkError;

fn bookmark(id: i64, name: &str, category: &str, uses: u64) -> Bookmark {
    let mut b = Bookmark::new(id, NewBookmark::new(name, &format!("https://{}.example", id), category, ""));
    b.use_count = uses;
    b
}

fn catalog() -> Vec<Bookmark> {
    vec![
        bookmark(1, "ChatGPT", "AI", 3),
        bookmark(2, "Midjourney", "Art", 7),
        bookmark(3, "Claude", "AI", 7),
        bookmark(4, "Copilot", "Code", 1),
        bookmark(5, "Perplexity", "AI", 0),
        bookmark(6, "Figma", "", 12),
        bookmark(7, "Gemini", "AI", 3),
    ]
}

#[test]
fn test_add_starts_unused() {
    let next = BookmarkManager::new(&[]).add_bookmark(
        10,
        NewBookmark::new("ToolA", "https://a.example", "AI", "x"),
    );
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, 10);
    assert_eq!(next[0].use_count, 0);
    assert_eq!(next[0].last_used, None);
    assert_eq!(next[0].tags, "x");
}

#[test]
fn test_delete_missing_leaves_collection_equal() {
    let list = catalog();
    assert_eq!(BookmarkManager::new(&list).delete_bookmark(99), list);
}

#[test]
fn test_delete_keeps_order_of_survivors() {
    let list = catalog();
    let ids: Vec<i64> = BookmarkManager::new(&list)
        .delete_bookmark(3)
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 4, 5, 6, 7]);
}

#[test]
fn test_open_twice_counts_twice() {
    let list = catalog();
    let first = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
    let second = first + Duration::minutes(5);

    let once = BookmarkManager::new(&list).open_bookmark(4, first).unwrap();
    let twice = BookmarkManager::new(&once.bookmarks)
        .open_bookmark(4, second)
        .unwrap();
    assert_eq!(twice.previous.use_count, 2);
    assert_eq!(twice.bookmarks[3].use_count, 3);
    assert_eq!(twice.bookmarks[3].last_used, Some(second));
    assert_eq!(twice.previous.url, "https://4.example");
}

#[test]
fn test_open_unknown_id() {
    let list = catalog();
    assert_eq!(
        BookmarkManager::new(&list).open_bookmark(0, Utc::now()),
        Err(BookmarkError::NotFound(0))
    );
}

#[test]
fn test_top_is_capped_at_five_with_stable_ties() {
    let list = catalog();
    let top = BookmarkManager::new(&list).top_bookmarks(TOP_BOOKMARKS_LIMIT);
    let ids: Vec<i64> = top.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![6, 2, 3, 1, 7]);
}

#[test]
fn test_top_of_short_collection_returns_all() {
    let list = vec![bookmark(1, "A", "", 0), bookmark(2, "B", "", 1)];
    let ids: Vec<i64> = BookmarkManager::new(&list)
        .top_bookmarks(TOP_BOOKMARKS_LIMIT)
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![2, 1]);
}

#[rstest]
#[case("", "", vec![1, 2, 3, 4, 5, 6, 7])]
#[case("c", "", vec![1, 3, 4])]
#[case("CL", "", vec![3])]
#[case("", "AI", vec![1, 3, 5, 7])]
#[case("e", "AI", vec![3, 5, 7])]
#[case("", "ai", vec![])]
#[case("zzz", "", vec![])]
fn test_filter(#[case] search: &str, #[case] category: &str, #[case] expected: Vec<i64>) {
    let list = catalog();
    let ids: Vec<i64> = BookmarkManager::new(&list)
        .filtered_bookmarks(search, category)
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_categories_skip_blank() {
    let list = catalog();
    assert_eq!(BookmarkManager::new(&list).categories(), vec!["AI", "Art", "Code"]);
}

#[rstest]
#[case(NewBookmark::new("", "https://a.example", "", ""), BookmarkError::EmptyName)]
#[case(NewBookmark::new("   ", "https://a.example", "", ""), BookmarkError::EmptyName)]
#[case(NewBookmark::new("Tool", "", "", ""), BookmarkError::InvalidUrl(String::new()))]
#[case(NewBookmark::new("Tool", "mailto:me@example.com", "", ""), BookmarkError::InvalidUrl("mailto:me@example.com".into()))]
#[case(NewBookmark::new("Tool", "/relative/path", "", ""), BookmarkError::InvalidUrl("/relative/path".into()))]
fn test_validate_rejects(#[case] fields: NewBookmark, #[case] expected: BookmarkError) {
    assert_eq!(validate_new_bookmark(&fields), Err(expected));
}

#[test]
fn test_validate_accepts_http_and_keeps_tags_verbatim() {
    let fields = NewBookmark::new("Local", "http://localhost:8080/ui", "", " a ,b ");
    let ok = validate_new_bookmark(&fields).unwrap();
    assert_eq!(ok.url, "http://localhost:8080/ui");
    assert_eq!(ok.tags, " a ,b ");
}

#[test]
fn test_derived_lists_outlive_the_manager() {
    let bookmarks = catalog();
    let (top, ai, categories) = {
        let mgr = BookmarkManager::new(&bookmarks);
        (mgr.top_bookmarks(2), mgr.filtered_bookmarks("", "AI"), mgr.categories())
    };
    let first = BookmarkManager::new(&bookmarks).get_bookmark(1);

    assert_eq!(top.iter().map(|b| b.id).collect::<Vec<_>>(), vec![6, 2]);
    assert_eq!(ai.len(), 4);
    assert_eq!(categories, vec!["AI", "Art", "Code"]);
    assert_eq!(first.map(|b| b.name.as_str()), Some("ChatGPT"));
}
