use crate::domain::models::ResultItem;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Presents rows as `title  subtitle ... arg`, with `arg` pushed to the right edge.
pub struct ResultList<'a> {
    pub items: &'a [ResultItem],
    pub theme: &'a Theme,
    pub is_loading: bool,
}

impl ResultList<'_> {
    fn row(&self, item: &ResultItem, width: usize) -> ListItem<'static> {
        let title = Span::styled(format!(" {}", item.title), self.theme.result_title);
        let subtitle = Span::styled(format!("  {}", item.subtitle), self.theme.result_subtitle);
        let arg = Span::styled(format!("{} ", item.arg), self.theme.result_arg);

        let used = title.width() + subtitle.width() + arg.width();
        let mut spans = vec![title, subtitle];
        if !item.arg.is_empty() {
            // Drop the accessory rather than wrap when the row is too narrow.
            if used < width {
                spans.push(Span::raw(" ".repeat(width - used)));
                spans.push(arg);
            }
        }
        ListItem::new(Line::from(spans))
    }
}

impl StatefulWidget for ResultList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.items.is_empty() {
            let hint = if self.is_loading {
                " Resolving..."
            } else {
                " No results"
            };
            Paragraph::new(Span::styled(hint, self.theme.dimmed)).render(area, buf);
            return;
        }

        let width = area.width as usize;
        let rows: Vec<ListItem> = self.items.iter().map(|i| self.row(i, width)).collect();
        let list = List::new(rows).highlight_style(self.theme.list_selected);
        StatefulWidget::render(list, area, buf, state);
    }
}
