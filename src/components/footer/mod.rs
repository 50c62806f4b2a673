mod groups;
mod types;

use crate::app::state::{AppState, ToastStyle};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn status_span(&self) -> Span<'static> {
        let theme = self.theme;
        match &self.state.toast {
            Some(toast) => {
                let (glyph, style) = match toast.style {
                    ToastStyle::Success => ("✓", theme.status_ready),
                    ToastStyle::Failure => ("✗", theme.status_error),
                };
                let time = toast.timestamp.format("%H:%M:%S");
                let text = if toast.message.is_empty() {
                    format!("  {time} {glyph} {}  ", toast.title)
                } else {
                    format!("  {time} {glyph} {}: {}  ", toast.title, toast.message)
                };
                Span::styled(text, style)
            }
            None if self.state.is_loading => Span::styled(
                format!("  {} RESOLVING  ", self.state.spinner()),
                theme.status_info,
            ),
            None => Span::styled("  READY  ", theme.status_ready),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let mut spans = vec![self.status_span(), Span::raw("  ")];

        let available_width = area.width.saturating_sub(4) as usize; // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(self.state) {
            if group.items.is_empty() {
                continue;
            }

            // Check if we can fit at least the first item of the group
            let first_item = &group.items[0];
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            // Group name only when there is room to spare
            if area.width > 100 {
                let group_label =
                    Span::styled(format!("{}: ", group.name), theme.footer_group_name);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.len() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                spans.push(Span::styled(key_str, theme.footer_segment_key));
                spans.push(Span::styled(desc_str, theme.footer_segment_val));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Toast;

    fn render(state: &AppState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state,
            theme: &state.theme,
        }
        .render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_ready_when_idle() {
        let state = AppState::default();
        let text = render(&state, 80);
        assert!(text.contains("READY"));
        assert!(text.contains("prefs"));
    }

    #[test]
    fn test_toast_replaces_status() {
        let mut state = AppState::default();
        let toast = Toast::failure("Execution error", "exited with 1");
        let time = toast.timestamp.format("%H:%M:%S").to_string();
        state.toast = Some(toast);
        let text = render(&state, 80);
        assert!(text.contains("Execution error: exited with 1"));
        assert!(text.contains(&time));
        assert!(!text.contains("READY"));
    }

    #[test]
    fn test_narrow_footer_does_not_panic() {
        let state = AppState::default();
        let text = render(&state, 5);
        assert_eq!(text.chars().count(), 5);
    }
}
