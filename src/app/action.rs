use crate::config::Preferences;
use crate::domain::{
    error::InvokeError,
    models::{CopyField, QueryTicket, ResultItem},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Search ---
    TextAreaInput(crossterm::event::KeyEvent), // Edits the focused text field
    ClearSearch,                               // Esc: clear, or quit when already empty
    SubmitQuery(String),                       // Debounced (or immediate) query fired

    // --- Navigation ---
    SelectNext,
    SelectPrev,
    SelectIndex(usize),

    // --- Row Actions ---
    CopySelected(CopyField),

    // --- Preferences ---
    OpenPreferences,
    ReturnToPreferences, // Back to the root view, then open the editor
    SavePreferences(String),
    CancelMode,
    ToggleHelp,

    // --- Async Results ---
    QueryResolved(QueryTicket, Result<Vec<ResultItem>, InvokeError>),
    Copied(Result<String, String>),
    PreferencesSaved(Result<Box<Preferences>, String>),
}
