use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
    }

    match app_state.mode {
        AppMode::Preferences => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => {
                    let input = app_state.input.as_ref()?;
                    let path = input.text_area.text().trim().to_string();
                    if path.is_empty() {
                        return None;
                    }
                    Some(Action::SavePreferences(path))
                }
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Search => match event {
            Event::Key(key) => app_state
                .keymap
                .get_action(key)
                .or(Some(Action::TextAreaInput(key))),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::SelectNext),
                MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                _ => None,
            },
            _ => None,
        },
    }
}
