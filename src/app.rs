//! App shell for toolmarks.
//!
//! Routes between the landing page and the manager view, turns terminal
//! commands into actions, and owns the notice queue. It keeps no domain
//! data of its own.

use crate::database::{Database, KeyValueStore, SqliteStore};
use crate::manager_view::ManagerView;
use crate::managers::folder_manager::validate_folder_name;
use crate::router::Route;
use crate::services::link_opener::{opener_for, LinkOpener};
use crate::services::settings_engine::{
    parse_value, resolve_storage_path, SettingsEngine, SettingsEngineTrait, LIVE_KEYS,
};
use crate::state::modal::ModalKind;
use crate::state::{Action, Notice};
use crate::types::errors::AppError;
use crate::ui::commands::{self, Command, HELP};
use crate::ui::render;
use crate::ui::toaster::Toaster;

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<S: KeyValueStore> {
    route: Route,
    manager: ManagerView<S>,
    settings: SettingsEngine,
    toaster: Toaster,
}

impl App<SqliteStore> {
    /// Opens the SQLite store the loaded settings point at.
    pub fn open(settings: SettingsEngine) -> Result<Self, AppError> {
        let config = settings.get_config();
        let db = Database::open(&resolve_storage_path(config))?;
        let opener = opener_for(config.open_links);
        Ok(Self::new(settings, SqliteStore::new(db), opener))
    }
}

impl<S: KeyValueStore> App<S> {
    /// Starts at the configured `start_path`.
    pub fn new(settings: SettingsEngine, store: S, opener: Box<dyn LinkOpener>) -> Self {
        let config = settings.get_config();
        let route = Route::from_path(&config.start_path);
        log::info!("Starting at {}", route.path());
        let manager = ManagerView::new(store, opener, config.top_limit);
        Self {
            route,
            manager,
            settings,
            toaster: Toaster::new(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn manager(&self) -> &ManagerView<S> {
        &self.manager
    }

    pub fn settings(&self) -> &SettingsEngine {
        &self.settings
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = Route::from_path(path);
        log::info!("Navigated to {}", self.route.path());
    }

    pub fn notify(&mut self, notice: Notice) {
        self.toaster.push(notice);
    }

    /// Sends an action to the manager view and queues the notices it returns.
    pub fn dispatch(&mut self, action: Action) {
        let notices = self.manager.dispatch(action);
        self.toaster.extend(notices);
    }

    /// Parses and runs one input line. Parse errors become notices.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match commands::parse(line) {
            Ok(command) => self.handle(command),
            Err(e) => {
                self.notify(Notice::error(e.to_string()));
                Flow::Continue
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Refresh => {}
            Command::Help => self.notify(Notice::info(HELP)),
            Command::Go(path) => self.navigate(&path),
            Command::Config => self.notify(Notice::info(self.settings.describe())),
            Command::ConfigSet(key, raw) => self.set_config(&key, &raw),
            Command::ConfigReset => match self.settings.reset() {
                Ok(()) => {
                    self.manager.set_top_limit(self.settings.get_config().top_limit);
                    self.notify(Notice::info("Settings reset to defaults"));
                }
                Err(e) => self.notify(Notice::error(e.to_string())),
            },
            other if self.route != Route::Manager => {
                log::debug!("Ignoring {:?} outside the manager view", other);
                self.notify(Notice::error("Open /main to manage bookmarks (go /main)"));
            }
            Command::Search(term) => self.dispatch(Action::SetSearchTerm(term)),
            Command::Category(category) => self.dispatch(Action::SelectCategory(category)),
            Command::ToggleDark => self.dispatch(Action::ToggleDarkMode),
            Command::ToggleCompact => self.dispatch(Action::ToggleCompactView),
            Command::NewFolder => self.dispatch(Action::OpenModal(ModalKind::Folder)),
            Command::AddFolder(name) => match validate_folder_name(&name) {
                Ok(name) => self.dispatch(Action::AddFolder { name }),
                Err(e) => self.notify(Notice::error(e.to_string())),
            },
            Command::DeleteFolder(id) => self.dispatch(Action::DeleteFolder { id }),
            Command::NewBookmark => self.dispatch(Action::OpenModal(ModalKind::Bookmark)),
            Command::DeleteBookmark(id) => self.dispatch(Action::DeleteBookmark { id }),
            Command::Open(id) => self.dispatch(Action::OpenBookmark { id }),
            Command::Set(field, value) => match self.active_modal() {
                Some(modal) => self.dispatch(Action::EditModalField { modal, field, value }),
                None => self.notify(Notice::error("No form is open")),
            },
            Command::Confirm => match self.active_modal() {
                Some(modal) => self.dispatch(Action::ConfirmModal(modal)),
                None => self.notify(Notice::error("No form is open")),
            },
            Command::Cancel => match self.active_modal() {
                Some(modal) => self.dispatch(Action::CancelModal(modal)),
                None => self.notify(Notice::error("No form is open")),
            },
        }
        Flow::Continue
    }

    fn set_config(&mut self, key: &str, raw: &str) {
        if let Err(e) = self.settings.set_value(key, parse_value(raw)) {
            log::warn!("{}", e);
            self.notify(Notice::error(e.to_string()));
            return;
        }
        self.manager.set_top_limit(self.settings.get_config().top_limit);
        if LIVE_KEYS.contains(&key) {
            self.notify(Notice::info(format!("{} updated", key)));
        } else {
            self.notify(Notice::info(format!("{} updated, takes effect on next start", key)));
        }
    }

    /// The modal that form commands apply to. The bookmark modal wins when both are open.
    fn active_modal(&self) -> Option<ModalKind> {
        let state = self.manager.state();
        if state.bookmark_modal.is_open() {
            Some(ModalKind::Bookmark)
        } else if state.folder_modal.is_open() {
            Some(ModalKind::Folder)
        } else {
            None
        }
    }

    /// Renders the current page followed by pending notices, which are consumed.
    pub fn render(&mut self) -> String {
        let color = self.settings.get_config().color;
        let page = match &self.route {
            Route::Landing => render::render_landing(color),
            Route::Manager => render::render_manager(&self.manager, color),
            Route::NotFound(path) => render::render_not_found(path, color),
        };

        let notices = self.toaster.drain();
        if notices.is_empty() {
            page
        } else {
            format!("{}\n\n{}", page, render::render_notices(&notices, color))
        }
    }
}
