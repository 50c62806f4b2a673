use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// Single-field editor: a label line, the field, and a key hint in the bottom border.
pub struct TextInputModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub label: &'a str,
    pub text_area: &'a AppTextArea<'a>,
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(70, 6, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(": save "),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::raw(": cancel "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let padded = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        };
        if padded.width == 0 || padded.height < 3 {
            return;
        }

        buf.set_span(
            padded.x,
            padded.y,
            &Span::styled(self.label, self.theme.dimmed),
            padded.width,
        );
        let field = Rect {
            y: padded.y + 2,
            height: 1,
            ..padded
        };
        Widget::render(self.text_area, field, buf);
    }
}
