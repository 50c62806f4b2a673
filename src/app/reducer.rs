use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, AppTextArea, InputState, Toast},
};
use crate::domain::models::{normalize_query, TriggerPolicy};
use std::time::{Duration, Instant};

/// Pause between a configuration failure and the preferences editor.
pub const PREFERENCES_REDIRECT_DELAY: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Search ---
        Action::TextAreaInput(key) => {
            if state.mode == AppMode::Preferences {
                if let Some(input) = &mut state.input {
                    input.text_area.input_single_line(key);
                }
                return None;
            }
            if state.mode != AppMode::Search {
                return None;
            }
            let before = state.search_text();
            state.search.input_single_line(key);
            let after = state.search_text();
            if before != after {
                return search_changed(state, after);
            }
        }
        Action::ClearSearch => {
            if state.search_text().is_empty() {
                state.should_quit = true;
            } else {
                state.search = AppTextArea::single_line("");
                return search_changed(state, String::new());
            }
        }
        Action::SubmitQuery(text) => {
            return submit(state, &text);
        }

        // --- Navigation ---
        Action::SelectNext => state.results.select_next(),
        Action::SelectPrev => state.results.select_prev(),
        Action::SelectIndex(i) => state.results.select_index(i),

        // --- Row Actions ---
        Action::CopySelected(field) => {
            let item = state.selected_item()?;
            return Some(Command::Copy(field, field.pick(item).to_string()));
        }

        // --- Preferences ---
        Action::OpenPreferences => {
            state.mode = AppMode::Preferences;
            state.input = Some(InputState {
                text_area: AppTextArea::single_line(&state.prefs.binary_path.to_string_lossy()),
            });
        }
        Action::ReturnToPreferences => {
            state.redirect_pending = false;
            // Never clobber an editor the user is already typing into.
            if state.mode == AppMode::Preferences {
                return None;
            }
            pop_to_root(state);
            return update(state, Action::OpenPreferences);
        }
        Action::SavePreferences(path) => {
            state.mode = AppMode::Search;
            state.input = None;
            return Some(Command::SavePreferences(path.into()));
        }
        Action::CancelMode => {
            state.mode = AppMode::Search;
            state.input = None;
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Search
            } else {
                AppMode::Help
            };
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Async Results ---
        Action::QueryResolved(ticket, result) => {
            if ticket != state.latest_ticket {
                tracing::debug!(%ticket, latest = %state.latest_ticket, "discarding stale result");
                return None;
            }
            state.is_loading = false;
            match result {
                Ok(items) => {
                    tracing::debug!(%ticket, rows = items.len(), "applying result");
                    state.results.replace(items);
                }
                Err(err) if err.is_configuration() => {
                    tracing::error!(%ticket, error = %err, "binary is not configured");
                    state.toast = Some(Toast::failure(
                        "Error",
                        format!("{err}; opening preferences"),
                    ));
                    if state.redirect_pending || state.mode == AppMode::Preferences {
                        return None;
                    }
                    state.redirect_pending = true;
                    return Some(Command::OpenPreferencesAfter(PREFERENCES_REDIRECT_DELAY));
                }
                Err(err) => {
                    // Previous rows stay visible.
                    tracing::warn!(%ticket, error = %err, "query failed");
                    state.toast = Some(Toast::failure("Execution error", err.to_string()));
                }
            }
        }
        Action::Copied(result) => {
            state.toast = Some(match result {
                Ok(text) => Toast::success("Copied", text),
                Err(err) => Toast::failure("Copy failed", err),
            });
        }
        Action::PreferencesSaved(result) => match result {
            Ok(prefs) => {
                state.theme = crate::theme::Theme::from_palette_type(prefs.theme);
                state.prefs = *prefs;
                state.toast = Some(Toast::success(
                    "Preferences saved",
                    state.prefs.binary_path.display().to_string(),
                ));
                let text = state.search_text();
                if !normalize_query(&text).is_empty() {
                    return submit(state, &text);
                }
            }
            Err(err) => {
                state.toast = Some(Toast::failure("Preferences not saved", err));
            }
        },

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .toast
                .as_ref()
                .is_some_and(|t| t.is_expired(Instant::now()))
            {
                state.toast = None;
            }
        }
    }
    None
}

fn search_changed(state: &mut AppState, text: String) -> Option<Command> {
    match state.prefs.trigger {
        TriggerPolicy::Debounced => Some(Command::ScheduleQuery(text)),
        TriggerPolicy::EveryKeystroke => submit(state, &text),
    }
}

fn submit(state: &mut AppState, text: &str) -> Option<Command> {
    let query = normalize_query(text);
    let Some(argument) = state.prefs.empty_query.argument_for(query) else {
        // Also invalidates anything still in flight.
        state.latest_ticket = state.latest_ticket.next();
        state.last_query = None;
        state.is_loading = false;
        state.results.clear();
        return None;
    };

    let ticket = state.latest_ticket.next();
    state.latest_ticket = ticket;
    state.last_query = Some(query.to_string());
    state.is_loading = true;
    tracing::info!(%ticket, query, "issuing query");
    Some(Command::Resolve(ticket, argument))
}

fn pop_to_root(state: &mut AppState) {
    state.mode = AppMode::Search;
    state.input = None;
    state.search = AppTextArea::single_line("");
    state.latest_ticket = state.latest_ticket.next();
    state.last_query = None;
    state.is_loading = false;
    state.results.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ToastStyle;
    use crate::config::Preferences;
    use crate::domain::{
        error::InvokeError,
        models::{CopyField, EmptyQueryPolicy, QueryTicket, ResultItem},
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::path::PathBuf;

    fn row(title: &str) -> ResultItem {
        ResultItem {
            title: title.to_string(),
            subtitle: format!("{title} subtitle"),
            arg: format!("{title} arg"),
        }
    }

    fn type_char(state: &mut AppState, c: char) -> Option<Command> {
        update(
            state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        )
    }

    fn issued(cmd: Option<Command>) -> (QueryTicket, Option<String>) {
        match cmd {
            Some(Command::Resolve(ticket, arg)) => (ticket, arg),
            other => panic!("expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_debounced_typing_schedules() {
        let mut state = AppState::default();
        assert_eq!(
            type_char(&mut state, '1'),
            Some(Command::ScheduleQuery("1".to_string()))
        );
        assert!(!state.is_loading);
        assert_eq!(state.latest_ticket, QueryTicket(0));
    }

    #[test]
    fn test_every_keystroke_resolves_immediately() {
        let mut state = AppState::new(Preferences {
            trigger: TriggerPolicy::EveryKeystroke,
            ..Default::default()
        });
        let (t1, arg) = issued(type_char(&mut state, '1'));
        assert_eq!(arg.as_deref(), Some("1"));
        let (t2, arg) = issued(type_char(&mut state, '7'));
        assert_eq!(arg.as_deref(), Some("17"));
        assert!(t2 > t1);
        assert!(state.is_loading);
    }

    #[test]
    fn test_ctrl_m_does_not_split_the_search() {
        let mut state = AppState::default().with_search("17");
        let cmd = update(
            &mut state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)),
        );
        assert_eq!(cmd, None);
        assert_eq!(state.search.lines().len(), 1);
        assert_eq!(state.search_text(), "17");
    }

    #[test]
    fn test_submit_trims_query() {
        let mut state = AppState::default();
        let (_, arg) = issued(update(&mut state, Action::SubmitQuery("  now \t".into())));
        assert_eq!(arg.as_deref(), Some("now"));
        assert_eq!(state.last_query.as_deref(), Some("now"));
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let mut state = AppState::default();
        state.results.replace(vec![row("old")]);
        let (ticket, _) = issued(update(&mut state, Action::SubmitQuery("1".into())));

        assert_eq!(update(&mut state, Action::SubmitQuery("   ".into())), None);
        assert!(state.results.items.is_empty());
        assert!(!state.is_loading);

        // The earlier invocation can no longer land.
        update(&mut state, Action::QueryResolved(ticket, Ok(vec![row("late")])));
        assert!(state.results.items.is_empty());
    }

    #[test]
    fn test_empty_query_pass_through_policies() {
        let mut state = AppState::new(Preferences {
            empty_query: EmptyQueryPolicy::PassEmpty,
            ..Default::default()
        });
        let (_, arg) = issued(update(&mut state, Action::SubmitQuery(" ".into())));
        assert_eq!(arg, Some(String::new()));

        state.prefs.empty_query = EmptyQueryPolicy::OmitArgument;
        let (_, arg) = issued(update(&mut state, Action::SubmitQuery(String::new())));
        assert_eq!(arg, None);
        assert!(state.is_loading);
    }

    #[test]
    fn test_result_replaces_rows() {
        let mut state = AppState::default();
        let (ticket, _) = issued(update(&mut state, Action::SubmitQuery("1".into())));
        update(
            &mut state,
            Action::QueryResolved(
                ticket,
                Ok(vec![ResultItem {
                    title: "A".into(),
                    subtitle: "B".into(),
                    arg: "C".into(),
                }]),
            ),
        );
        assert!(!state.is_loading);
        assert_eq!(state.results.items.len(), 1);
        let selected = state.selected_item().unwrap();
        assert_eq!(
            (selected.title.as_str(), selected.subtitle.as_str(), selected.arg.as_str()),
            ("A", "B", "C")
        );
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut state = AppState::default();
        let (slow, _) = issued(update(&mut state, Action::SubmitQuery("1".into())));
        let (fast, _) = issued(update(&mut state, Action::SubmitQuery("17".into())));

        update(&mut state, Action::QueryResolved(fast, Ok(vec![row("new")])));
        update(&mut state, Action::QueryResolved(slow, Ok(vec![row("stale")])));

        assert_eq!(state.results.items, vec![row("new")]);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_result_keeps_loading_for_latest() {
        let mut state = AppState::default();
        let (slow, _) = issued(update(&mut state, Action::SubmitQuery("1".into())));
        issued(update(&mut state, Action::SubmitQuery("17".into())));

        update(&mut state, Action::QueryResolved(slow, Ok(vec![row("stale")])));
        assert!(state.is_loading);
        assert!(state.results.items.is_empty());
    }

    #[test]
    fn test_execution_and_parse_errors_keep_rows() {
        let mut state = AppState::default();
        state.results.replace(vec![row("kept")]);

        for err in [
            InvokeError::Execution("exit status: 2".into()),
            InvokeError::Parse("expected value".into()),
        ] {
            let (ticket, _) = issued(update(&mut state, Action::SubmitQuery("x".into())));
            let cmd = update(&mut state, Action::QueryResolved(ticket, Err(err)));
            assert_eq!(cmd, None);
            assert!(!state.is_loading);
            assert_eq!(state.results.items, vec![row("kept")]);
            let toast = state.toast.as_ref().unwrap();
            assert_eq!(toast.style, ToastStyle::Failure);
        }
    }

    #[test]
    fn test_configuration_error_redirects_to_preferences() {
        let mut state = AppState::default().with_search("1700000000");
        state.results.replace(vec![row("old")]);
        let (ticket, _) = issued(update(&mut state, Action::SubmitQuery("1700000000".into())));

        let cmd = update(
            &mut state,
            Action::QueryResolved(
                ticket,
                Err(InvokeError::Configuration {
                    path: PathBuf::from("/missing"),
                    reason: "no such file".into(),
                }),
            ),
        );
        assert_eq!(
            cmd,
            Some(Command::OpenPreferencesAfter(PREFERENCES_REDIRECT_DELAY))
        );
        assert!(!state.is_loading);
        assert!(state.toast.as_ref().unwrap().message.contains("/missing"));

        update(&mut state, Action::ReturnToPreferences);
        assert_eq!(state.mode, AppMode::Preferences);
        assert_eq!(state.search_text(), "");
        assert!(state.results.items.is_empty());
        assert!(state.input.is_some());
    }

    #[test]
    fn test_repeated_configuration_errors_arm_one_redirect() {
        let mut state = AppState::new(Preferences {
            trigger: TriggerPolicy::EveryKeystroke,
            ..Default::default()
        });
        let missing = || {
            Err(InvokeError::Configuration {
                path: PathBuf::from("/missing"),
                reason: "no such file".into(),
            })
        };

        let (t1, _) = issued(type_char(&mut state, '1'));
        assert_eq!(
            update(&mut state, Action::QueryResolved(t1, missing())),
            Some(Command::OpenPreferencesAfter(PREFERENCES_REDIRECT_DELAY))
        );
        let (t2, _) = issued(type_char(&mut state, '7'));
        assert_eq!(update(&mut state, Action::QueryResolved(t2, missing())), None);
        assert!(state.redirect_pending);

        update(&mut state, Action::ReturnToPreferences);
        assert_eq!(state.mode, AppMode::Preferences);
        assert!(!state.redirect_pending);
        for c in "/opt/ts".chars() {
            type_char(&mut state, c);
        }

        // A late redirect leaves the editor alone.
        assert_eq!(update(&mut state, Action::ReturnToPreferences), None);
        assert_eq!(state.mode, AppMode::Preferences);
        assert_eq!(state.input.as_ref().unwrap().text_area.text(), "/opt/ts");
    }

    #[test]
    fn test_configuration_error_while_editing_does_not_redirect() {
        let mut state = AppState::default();
        let (ticket, _) = issued(update(&mut state, Action::SubmitQuery("1".into())));
        update(&mut state, Action::OpenPreferences);

        let cmd = update(
            &mut state,
            Action::QueryResolved(
                ticket,
                Err(InvokeError::Configuration {
                    path: PathBuf::new(),
                    reason: "no binary configured".into(),
                }),
            ),
        );
        assert_eq!(cmd, None);
        assert!(!state.redirect_pending);
        assert_eq!(state.mode, AppMode::Preferences);
    }

    #[test]
    fn test_copy_actions() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::CopySelected(CopyField::Arg)), None);

        state.results.replace(vec![row("A")]);
        assert_eq!(
            update(&mut state, Action::CopySelected(CopyField::Arg)),
            Some(Command::Copy(CopyField::Arg, "A arg".into()))
        );
        assert_eq!(
            update(&mut state, Action::CopySelected(CopyField::Subtitle)),
            Some(Command::Copy(CopyField::Subtitle, "A subtitle".into()))
        );

        update(&mut state, Action::Copied(Ok("A arg".into())));
        assert_eq!(state.toast.as_ref().unwrap().style, ToastStyle::Success);
    }

    #[test]
    fn test_clear_search_then_quit() {
        let mut state = AppState::default().with_search("17");
        assert_eq!(
            update(&mut state, Action::ClearSearch),
            Some(Command::ScheduleQuery(String::new()))
        );
        assert!(!state.should_quit);
        update(&mut state, Action::ClearSearch);
        assert!(state.should_quit);
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut state = AppState::default().with_search("1700000000");
        update(&mut state, Action::OpenPreferences);
        assert_eq!(state.mode, AppMode::Preferences);

        // Typing goes to the editor, not the search bar.
        assert_eq!(type_char(&mut state, '/'), None);
        assert_eq!(state.search_text(), "1700000000");

        let cmd = update(&mut state, Action::SavePreferences("/opt/ts".into()));
        assert_eq!(cmd, Some(Command::SavePreferences(PathBuf::from("/opt/ts"))));
        assert_eq!(state.mode, AppMode::Search);

        let prefs = Preferences {
            binary_path: PathBuf::from("/opt/ts"),
            ..Default::default()
        };
        let (_, arg) = issued(update(&mut state, Action::PreferencesSaved(Ok(Box::new(prefs)))));
        assert_eq!(arg.as_deref(), Some("1700000000"));
        assert_eq!(state.prefs.binary_path, PathBuf::from("/opt/ts"));
    }

    #[test]
    fn test_tick_expires_toast() {
        let mut state = AppState::default();
        let mut toast = Toast::success("Copied", "x");
        toast.shown_at = Instant::now() - Duration::from_secs(10);
        state.toast = Some(toast);
        update(&mut state, Action::Tick);
        assert!(state.toast.is_none());
        assert_eq!(state.frame_count, 1);
    }
}
