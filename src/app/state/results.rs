use crate::domain::models::ResultItem;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsState {
    pub items: Vec<ResultItem>,
    pub list_state: ListState,
}

impl ResultsState {
    /// Swaps in a fresh result set and selects its first row.
    pub fn replace(&mut self, items: Vec<ResultItem>) {
        self.list_state = ListState::default();
        if !items.is_empty() {
            self.list_state.select(Some(0));
        }
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ResultItem> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_index(&mut self, i: usize) {
        if i < self.items.len() {
            self.list_state.select(Some(i));
        }
    }
}
