use crate::config::Preferences;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub prefs: &'a Preferences,
}

fn entry<'a>(key: &'a str, desc: String, key_style: Style, desc_style: Style) -> Row<'a> {
    Row::new(vec![
        Cell::from(Span::styled(key, key_style)),
        Cell::from(Span::styled(desc, desc_style)),
    ])
}

fn heading(name: &str, style: Style) -> Row<'_> {
    Row::new(vec![Cell::from(Span::styled(name, style)), Cell::from("")])
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let k = self.theme.footer_segment_key;
        let d = self.theme.result_title;
        let v = self.theme.result_arg;
        let h = self.theme.header_item;
        let prefs = self.prefs;

        let trigger = match prefs.trigger {
            crate::domain::models::TriggerPolicy::Debounced => {
                format!("{} ({} ms)", prefs.trigger.label(), prefs.debounce_ms)
            }
            other => other.label().to_string(),
        };

        let rows = vec![
            heading("Results", h),
            entry(" ↑ / ↓, ^p / ^n", "Select previous / next row".into(), k, d),
            entry(" Enter", "Copy the row's value".into(), k, d),
            entry(" ^t", "Copy the title".into(), k, d),
            entry(" ^s", "Copy the subtitle".into(), k, d),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            heading("General", h),
            entry(" ^o", "Edit the binary path".into(), k, d),
            entry(" Esc", "Clear the search, quit when empty".into(), k, d),
            entry(" ^c", "Quit".into(), k, d),
            entry(" F1", "Toggle this help".into(), k, d),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            heading("Preferences", h),
            entry(" binary", prefs.binary_path.display().to_string(), k, v),
            entry(" trigger", trigger, k, v),
            entry(" timeout", format!("{} ms", prefs.timeout_ms), k, v),
            entry(" theme", prefs.theme.label().to_string(), k, v),
        ];

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
