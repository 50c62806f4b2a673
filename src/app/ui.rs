use crate::app::state::{AppMode, AppState};
use crate::components::{
    footer::Footer,
    header::Header,
    modals::{helpers::dim_area, HelpModal, TextInputModal},
    result_list::ResultList,
    search_bar::SearchBar,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        results: main[2],
        footer: main[3],
    }
}

fn visible(r: Rect) -> bool {
    r.width > 0 && r.height > 0
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if !visible(area) {
        return;
    }

    let layout = get_layout(area);
    let theme = app_state.theme.clone();

    // --- Header ---
    if visible(layout.header) {
        let header = Header {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(header, layout.header);
    }

    // --- Search ---
    if visible(layout.search) {
        let search = SearchBar {
            text_area: &app_state.search,
            theme: &theme,
            focused: app_state.mode == AppMode::Search,
        };
        f.render_widget(search, layout.search);
    }

    // --- Results ---
    if visible(layout.results) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);
        let inner = block.inner(layout.results);
        f.render_widget(block, layout.results);

        let list = ResultList {
            items: &app_state.results.items,
            theme: &theme,
            is_loading: app_state.is_loading,
        };
        f.render_stateful_widget(list, inner, &mut app_state.results.list_state);
    }

    // --- Footer ---
    if visible(layout.footer) {
        let footer = Footer {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Modals ---
    match app_state.mode {
        AppMode::Search => {}
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            let help = HelpModal {
                theme: &theme,
                prefs: &app_state.prefs,
            };
            f.render_widget(help, area);
        }
        AppMode::Preferences => {
            if let Some(input) = &app_state.input {
                dim_area(f.buffer_mut(), area);
                let modal = TextInputModal {
                    theme: &theme,
                    title: " PREFERENCES ",
                    label: "Path to the converter binary",
                    text_area: &input.text_area,
                };
                f.render_widget(modal, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppTextArea, InputState};
    use crate::domain::models::ResultItem;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_reserves_fixed_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.results.height, 19);
    }

    #[test]
    fn test_draw_rows_and_search() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::default().with_search("1700000000");
        state.results.replace(vec![ResultItem {
            title: "Tue, 14 Nov 2023 22:13:20".to_string(),
            subtitle: "UTC".to_string(),
            arg: "2023-11-14T22:13:20Z".to_string(),
        }]);

        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("1700000000"));
        assert!(text.contains("Tue, 14 Nov 2023 22:13:20"));
        assert!(text.contains("2023-11-14T22:13:20Z"));
        assert!(text.contains("READY"));
    }

    #[test]
    fn test_draw_preferences_modal() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = AppState::default();
        state.mode = AppMode::Preferences;
        state.input = Some(InputState {
            text_area: AppTextArea::single_line("/usr/local/bin/ts"),
        });

        terminal.draw(|f| draw(f, &mut state)).unwrap();
        let text = screen(&terminal);

        assert!(text.contains("PREFERENCES"));
        assert!(text.contains("/usr/local/bin/ts"));
    }

    #[test]
    fn test_draw_help_modal() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut state = AppState::default();
        state.mode = AppMode::Help;

        terminal.draw(|f| draw(f, &mut state)).unwrap();
        assert!(screen(&terminal).contains("HELP - KEYBINDINGS"));
    }

    #[test]
    fn test_draw_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        let mut state = AppState::default().with_search("x");
        terminal.draw(|f| draw(f, &mut state)).unwrap();
    }
}
