use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SearchBar<'a> {
    pub text_area: &'a AppTextArea<'a>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let prompt = Rect { width: 2, ..inner };
        buf.set_span(prompt.x, prompt.y, &Span::styled("> ", self.theme.search_prompt), 2);

        let field = Rect {
            x: inner.x + 2,
            width: inner.width - 2,
            ..inner
        };
        if self.text_area.text().is_empty() {
            buf.set_span(
                field.x,
                field.y,
                &Span::styled("timestamp or date, e.g. 1700000000", self.theme.dimmed),
                field.width,
            );
        } else {
            Widget::render(self.text_area, field, buf);
        }
    }
}
