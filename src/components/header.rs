use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let binary_style = if state.prefs.binary_path.as_os_str().is_empty() {
            theme.header_warn
        } else {
            theme.header_binary
        };
        let subject = match state.last_query.as_deref() {
            Some(q) if !q.is_empty() => format!("for {q} "),
            _ => String::new(),
        };
        let (activity, activity_style) = if state.is_loading {
            (
                format!(" {} resolving {subject}", state.spinner()),
                theme.header_active,
            )
        } else {
            (
                format!(" {} rows {subject}", state.results.items.len()),
                theme.header_item,
            )
        };

        // Segment background colors for separator transitions
        let logo_bg = theme.header_logo.bg.unwrap_or(Color::Reset);
        let binary_bg = binary_style.bg.unwrap_or(Color::Reset);
        let activity_bg = activity_style.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(" TSLAUNCH ", theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(binary_bg)),
            Span::styled(format!(" {} ", state.prefs.binary_label()), binary_style),
            Span::styled(SEP_RIGHT, Style::default().fg(binary_bg).bg(activity_bg)),
            Span::styled(activity, activity_style),
            Span::styled(SEP_RIGHT, Style::default().fg(activity_bg).bg(base_bg)),
        ];

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
