use super::keymap::KeyMap;
use crate::config::Preferences;
use crate::domain::models::{QueryTicket, ResultItem};
use std::sync::Arc;

pub mod input;
pub mod results;
pub mod toast;

// Re-exports
pub use input::{AppTextArea, InputState};
pub use results::ResultsState;
pub use toast::{Toast, ToastStyle};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Search,      // Typing into the search bar, navigating rows
    Preferences, // Editing the binary path
    Help,        // Showing the key reference
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub toast: Option<Toast>,
    pub is_loading: bool,
    /// A redirect to the preferences editor is already scheduled.
    pub redirect_pending: bool,

    // --- Query ---
    pub search: AppTextArea<'a>,
    pub latest_ticket: QueryTicket,
    pub last_query: Option<String>,

    // --- Rows (the latest applied result) ---
    pub results: ResultsState,

    // --- Preferences Editor ---
    pub input: Option<InputState<'a>>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub prefs: Preferences,
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(prefs: Preferences) -> Self {
        Self {
            theme: crate::theme::Theme::from_palette_type(prefs.theme),
            prefs,
            ..Default::default()
        }
    }

    /// Pre-fills the search bar, as when launched with a query argument.
    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = AppTextArea::single_line(text);
        self
    }

    #[must_use]
    pub fn search_text(&self) -> String {
        self.search.text()
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ResultItem> {
        self.results.selected_item()
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count as usize) % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Search,
            toast: None,
            is_loading: false,
            redirect_pending: false,
            search: AppTextArea::single_line(""),
            latest_ticket: QueryTicket::default(),
            last_query: None,
            results: ResultsState::default(),
            input: None,
            frame_count: 0,
            prefs: Preferences::default(),
            keymap: Arc::new(KeyMap::new()),
            theme: crate::theme::Theme::default(),
        }
    }
}
