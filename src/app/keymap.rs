use super::action::Action;
use crate::domain::models::CopyField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    // Bindings that take precedence over typing in the search bar.
    pub search: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut search = HashMap::new();

        // --- Navigation ---
        search.insert(key(KeyCode::Down), Action::SelectNext);
        search.insert(key(KeyCode::Up), Action::SelectPrev);
        search.insert(ctrl('n'), Action::SelectNext);
        search.insert(ctrl('p'), Action::SelectPrev);

        // --- Row Actions ---
        search.insert(key(KeyCode::Enter), Action::CopySelected(CopyField::Arg));
        search.insert(ctrl('t'), Action::CopySelected(CopyField::Title));
        search.insert(ctrl('s'), Action::CopySelected(CopyField::Subtitle));

        // --- App ---
        search.insert(ctrl('o'), Action::OpenPreferences);
        search.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        search.insert(key(KeyCode::Esc), Action::ClearSearch);
        search.insert(ctrl('c'), Action::Quit);

        Self { search }
    }

    /// Ignores kind/state so press and repeat events resolve alike.
    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.search
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
