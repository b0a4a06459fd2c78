use repoview_core::config::settings::{Config, PreviewConfig, UiConfig};
use repoview_core::view::list::ListView;
use repoview_core::view::tree::{self, TreeRow};
use repoview_core::{
    Action, ActionRegistry, CoreError, CoreResult, Entry, Intent, Keymap, Navigator, Snapshot,
    Theme,
};

/// Application mode; determines how input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Typing into the search box; every keystroke refilters the list.
    Search,
    Help,
}

/// Which pane receives cursor and open actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    List,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Self::Tree => Self::List,
            Self::List => Self::Tree,
        }
    }
}

/// Top-level application state.
///
/// The [`Navigator`] owns the browsing session; everything else here is
/// presentation state: focus, per-pane cursors, mode and a status message.
/// Listing requests produced by intents are queued in `requests` until the
/// main loop hands them to background tasks.
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    mode: AppMode,
    focus: Focus,
    /// Path of the tree node under the cursor.
    tree_cursor: Option<String>,
    list_cursor: usize,
    keymap: Keymap,
    registry: ActionRegistry,
    theme: Theme,
    ui: UiConfig,
    preview: PreviewConfig,
    title: String,
    status_message: Option<String>,
    requests: Vec<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app at the repository root and queues the start-up fetches.
    pub fn new(mut navigator: Navigator, config: &Config) -> Self {
        let requests = navigator.initial_requests();
        Self {
            navigator,
            mode: AppMode::Normal,
            focus: Focus::List,
            tree_cursor: None,
            list_cursor: 0,
            keymap: Keymap::with_overrides(&config.keys),
            registry: ActionRegistry::new(),
            theme: config.theme.clone(),
            ui: config.ui.clone(),
            preview: config.preview.clone(),
            title: config.repository.label(),
            status_message: None,
            requests,
            should_quit: false,
        }
    }

    // --- Getters ---

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.navigator.snapshot()
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn preview_config(&self) -> &PreviewConfig {
        &self.preview
    }

    /// `owner/repo@branch` of the browsed repository.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The list cursor, clamped to the rows currently shown.
    pub fn list_cursor(&self, view: &ListView) -> usize {
        self.list_cursor.min(view.rows().len().saturating_sub(1))
    }

    /// Index of the tree cursor within `rows`.
    ///
    /// Falls back to the active node, then to the first row.
    pub fn tree_cursor(&self, rows: &[TreeRow]) -> usize {
        self.tree_cursor
            .as_deref()
            .and_then(|path| rows.iter().position(|r| r.path == path))
            .or_else(|| rows.iter().position(|r| r.active))
            .unwrap_or(0)
    }

    /// Takes the listing requests queued since the last call.
    pub fn take_requests(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }

    // --- Immutable builder methods ---

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    // --- Intents ---

    /// Applies `intent` to the session and queues whatever it needs fetched.
    pub fn dispatch(mut self, intent: Intent) -> Self {
        let moves = intent.is_navigation();
        let before = self.navigator.session().current_path().to_string();
        let requests = self.navigator.dispatch(intent);
        self.requests.extend(requests);

        if moves || self.navigator.session().current_path() != before {
            self.list_cursor = 0;
            self.tree_cursor = None;
        }
        self
    }

    /// Hands a finished listing fetch to the navigator.
    ///
    /// Failures for paths still on screen become the status message.
    pub fn complete_listing(mut self, path: &str, result: CoreResult<Vec<Entry>>) -> Self {
        match self.navigator.complete(path, result) {
            Ok(_) | Err(CoreError::AbortedByNavigation { .. }) => self,
            Err(e) => self.with_status(e.to_string()),
        }
    }

    /// Executes a key-bound action in Normal mode.
    pub fn handle_action(self, action: Action) -> Self {
        match action {
            Action::CursorDown => self.move_cursor(1),
            Action::CursorUp => self.move_cursor(-1),
            Action::Open => self.open_under_cursor(),
            Action::ToggleNode => self.toggle_under_cursor(),
            Action::GoUp => self.dispatch(Intent::Up),
            Action::GoBack => self.dispatch(Intent::Back),
            Action::GoForward => self.dispatch(Intent::Forward),
            Action::Search => self.with_mode(AppMode::Search),
            Action::SwitchFocus => {
                let focus = self.focus.toggled();
                Self { focus, ..self }
            }
            Action::Help => self.with_mode(AppMode::Help),
            Action::Quit => self.with_quit(),
        }
    }

    // --- Search ---

    pub fn search_push_char(self, c: char) -> Self {
        let mut query = self.navigator.session().query().to_string();
        query.push(c);
        self.search(query)
    }

    pub fn search_pop_char(self) -> Self {
        let mut query = self.navigator.session().query().to_string();
        query.pop();
        self.search(query)
    }

    /// Leaves search mode keeping the filter.
    pub fn search_confirm(self) -> Self {
        self.with_mode(AppMode::Normal)
    }

    /// Leaves search mode and clears the filter.
    pub fn search_cancel(self) -> Self {
        self.search(String::new()).with_mode(AppMode::Normal)
    }

    fn search(self, query: String) -> Self {
        let app = self.dispatch(Intent::Search(query));
        Self {
            list_cursor: 0,
            ..app
        }
    }

    // --- Cursor handling ---

    fn move_cursor(self, delta: isize) -> Self {
        match self.focus {
            Focus::List => {
                let len = ListView::project(&self.snapshot()).rows().len();
                let list_cursor = step(self.list_cursor.min(len.saturating_sub(1)), delta, len);
                Self {
                    list_cursor,
                    ..self
                }
            }
            Focus::Tree => {
                let rows = tree::build(&self.snapshot());
                if rows.is_empty() {
                    return self;
                }
                let index = step(self.tree_cursor(&rows), delta, rows.len());
                let tree_cursor = Some(rows[index].path.clone());
                Self {
                    tree_cursor,
                    ..self
                }
            }
        }
    }

    fn open_under_cursor(self) -> Self {
        match self.focus {
            Focus::List => {
                let view = ListView::project(&self.snapshot());
                let entry = view
                    .rows()
                    .get(self.list_cursor(&view))
                    .map(|row| row.entry.clone());
                match entry {
                    Some(entry) => self.dispatch(Intent::Select(entry)),
                    None => self,
                }
            }
            Focus::Tree => match self.tree_row_under_cursor() {
                Some(row) => self.dispatch(Intent::Navigate(row.path)),
                None => self,
            },
        }
    }

    fn toggle_under_cursor(self) -> Self {
        match self.focus {
            Focus::Tree => match self.tree_row_under_cursor() {
                Some(row) => {
                    let tree_cursor = Some(row.path.clone());
                    let app = self.dispatch(Intent::ToggleNode(row.path));
                    Self {
                        tree_cursor,
                        ..app
                    }
                }
                None => self,
            },
            Focus::List => self,
        }
    }

    fn tree_row_under_cursor(&self) -> Option<TreeRow> {
        let rows = tree::build(&self.snapshot());
        let index = self.tree_cursor(&rows);
        rows.into_iter().nth(index)
    }
}

/// Moves `index` by `delta` within `0..len`, clamping at both ends.
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}
