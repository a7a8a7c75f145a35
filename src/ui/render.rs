//! Text rendering of the pages.
//!
//! Rendering only reads: the manager page is drawn from the manager view's
//! state and derived lists, and nothing here touches storage.

use crate::database::KeyValueStore;
use crate::manager_view::ManagerView;
use crate::state::modal::{FolderForm, ModalState};
use crate::state::{AppState, Notice, NoticeLevel};
use crate::types::bookmark::{Bookmark, NewBookmark};

use super::theme::{compact_view_icon, dark_mode_icon, Palette, Spacing};

pub const MANAGER_TITLE: &str = "AI Tool Bookmark Manager";

/// Renders the manager page: header, filters, the three panels and any open modal.
pub fn render_manager<S: KeyValueStore>(view: &ManagerView<S>, color: bool) -> String {
    let state = view.state();
    let palette = Palette::for_mode(state.dark_mode, color);
    let spacing = Spacing::for_view(state.compact_view);

    let mut sections = vec![
        header(state, &palette),
        filters(state, &view.categories(), &palette),
        folders_panel(state, &palette, &spacing),
        bookmarks_panel(&view.filtered_bookmarks(), &palette, &spacing),
        top_panel(&view.top_bookmarks(), &palette, &spacing),
    ];
    if let Some(lines) = folder_modal(&state.folder_modal, &palette) {
        sections.push(lines);
    }
    if let Some(lines) = bookmark_modal(&state.bookmark_modal, &palette) {
        sections.push(lines);
    }

    join_sections(sections, &spacing)
}

/// Renders the landing page.
pub fn render_landing(color: bool) -> String {
    let palette = Palette::for_mode(false, color);
    [
        palette.paint(palette.heading, "toolmarks"),
        "Keep the AI tools you rely on one keystroke away.".to_string(),
        format!("Type {} to open the bookmark manager.", palette.paint(palette.accent, "go /main")),
    ]
    .join("\n")
}

/// Renders the page shown for an unknown path.
pub fn render_not_found(path: &str, color: bool) -> String {
    let palette = Palette::for_mode(false, color);
    format!(
        "{}\nTry {} or {}.",
        palette.paint(palette.danger, &format!("No page at {}", path)),
        palette.paint(palette.accent, "go /"),
        palette.paint(palette.accent, "go /main"),
    )
}

/// One line per notice, oldest first.
pub fn render_notices(notices: &[Notice], color: bool) -> String {
    let palette = Palette::for_mode(false, color);
    notices
        .iter()
        .map(|n| match n.level {
            NoticeLevel::Info => format!("{} {}", palette.paint(palette.accent, "[info]"), n.message),
            NoticeLevel::Error => format!("{} {}", palette.paint(palette.danger, "[error]"), n.message),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_sections(sections: Vec<Vec<String>>, spacing: &Spacing) -> String {
    let separator = "\n".repeat(spacing.between_sections + 1);
    sections
        .into_iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join(&separator)
}

fn header(state: &AppState, palette: &Palette) -> Vec<String> {
    vec![format!(
        "{}   [{}] dark  [{}] compact",
        palette.paint(palette.heading, MANAGER_TITLE),
        dark_mode_icon(state.dark_mode),
        compact_view_icon(state.compact_view),
    )]
}

fn filters(state: &AppState, categories: &[&str], palette: &Palette) -> Vec<String> {
    let search = if state.search_term.is_empty() {
        palette.paint(palette.muted, "(search bookmarks...)")
    } else {
        state.search_term.clone()
    };
    let selected = if state.selected_category.is_empty() {
        "All categories"
    } else {
        state.selected_category.as_str()
    };

    let mut lines = vec![format!("Search: {}", search), format!("Category: {}", selected)];
    if !categories.is_empty() {
        lines.push(palette.paint(
            palette.muted,
            &format!("  available: {}", categories.join(", ")),
        ));
    }
    lines
}

fn folders_panel(state: &AppState, palette: &Palette, spacing: &Spacing) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}",
        palette.paint(palette.heading, "Folders"),
        palette.paint(palette.muted, "(folder new)")
    )];
    if state.folders.is_empty() {
        lines.push(format!("{}{}", spacing.indent, palette.paint(palette.muted, "(no folders)")));
    }
    for folder in &state.folders {
        lines.push(format!(
            "{}{} {}",
            spacing.indent,
            palette.paint(palette.muted, &format!("#{}", folder.id)),
            folder.name
        ));
    }
    lines
}

fn bookmarks_panel(bookmarks: &[&Bookmark], palette: &Palette, spacing: &Spacing) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  {}",
        palette.paint(palette.heading, "Bookmarks"),
        palette.paint(palette.muted, "(bookmark new)")
    )];
    if bookmarks.is_empty() {
        lines.push(format!("{}{}", spacing.indent, palette.paint(palette.muted, "(no bookmarks)")));
    }
    for b in bookmarks {
        let mut line = format!(
            "{}{} {}",
            spacing.indent,
            palette.paint(palette.muted, &format!("#{}", b.id)),
            palette.paint(palette.link, &b.name)
        );
        if !b.category.is_empty() {
            line.push_str(&format!(" [{}]", b.category));
        }
        let tags = b.tag_list();
        if !tags.is_empty() {
            let tags: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
            line.push_str(&format!(" {}", palette.paint(palette.muted, &tags.join(" "))));
        }
        line.push_str(&format!(" <{}>", b.url));
        lines.push(line);
    }
    lines
}

fn top_panel(bookmarks: &[&Bookmark], palette: &Palette, spacing: &Spacing) -> Vec<String> {
    let mut lines = vec![palette.paint(palette.heading, "Most used")];
    if bookmarks.is_empty() {
        lines.push(format!("{}{}", spacing.indent, palette.paint(palette.muted, "(nothing yet)")));
    }
    for b in bookmarks {
        lines.push(format!(
            "{}{} {}  {}",
            spacing.indent,
            palette.paint(palette.muted, &format!("#{}", b.id)),
            palette.paint(palette.link, &b.name),
            palette.paint(palette.muted, &format!("uses: {}", b.use_count)),
        ));
    }
    lines
}

fn modal_frame(title: &str, fields: Vec<(&str, &str)>, error: Option<&str>, palette: &Palette) -> Vec<String> {
    let mut lines = vec![format!("┌ {}", palette.paint(palette.heading, title))];
    for (label, value) in fields {
        lines.push(format!("│ {}: {}", label, value));
    }
    if let Some(error) = error {
        lines.push(format!("│ {}", palette.paint(palette.danger, &format!("! {}", error))));
    }
    lines.push(format!(
        "└ {} | {}",
        palette.paint(palette.accent, "ok"),
        palette.paint(palette.muted, "cancel")
    ));
    lines
}

fn folder_modal(modal: &ModalState<FolderForm>, palette: &Palette) -> Option<Vec<String>> {
    let form = modal.form()?;
    Some(modal_frame(
        "Add folder",
        vec![("name", form.name.as_str())],
        modal.error(),
        palette,
    ))
}

fn bookmark_modal(modal: &ModalState<NewBookmark>, palette: &Palette) -> Option<Vec<String>> {
    let form = modal.form()?;
    Some(modal_frame(
        "Add bookmark",
        vec![
            ("name", form.name.as_str()),
            ("url", form.url.as_str()),
            ("category", form.category.as_str()),
            ("tags (comma separated)", form.tags.as_str()),
        ],
        modal.error(),
        palette,
    ))
}
