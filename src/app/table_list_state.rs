use std::ops::Range;

use crate::goto_sequence::GotoSequence;
use crate::pagination::table_list_visible_count;
use crate::session::Session;
use crate::text_input::TextInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableListState {
    /// Index into the filtered table names.
    pub selected: usize,
    /// Screen page; always `selected / visible_count`.
    pub page: usize,
    pub search: TextInput,
    pub searching: bool,
    pub goto: GotoSequence,
}

impl TableListState {
    pub fn new(session: &Session, selected: usize) -> Self {
        let mut state = Self {
            selected,
            search: TextInput::new(session.table_filter.clone()),
            ..Self::default()
        };
        state.clamp_selection(session);
        state
    }

    pub fn visible_count(&self, session: &Session) -> usize {
        table_list_visible_count(session.viewport_height, self.searching)
    }

    pub fn page_count(&self, session: &Session) -> usize {
        let len = session.filtered_table_names.len();
        if len == 0 {
            1
        } else {
            (len - 1) / self.visible_count(session) + 1
        }
    }

    pub fn visible_range(&self, session: &Session) -> Range<usize> {
        let len = session.filtered_table_names.len();
        let visible = self.visible_count(session);
        let start = (self.page * visible).min(len);
        start..(start + visible).min(len)
    }

    pub fn sync_page(&mut self, session: &Session) {
        self.page = self.selected / self.visible_count(session);
    }

    /// Resets the selection to the top when it no longer points at a name.
    pub fn clamp_selection(&mut self, session: &Session) {
        if self.selected >= session.filtered_table_names.len() {
            self.selected = 0;
        }
        self.sync_page(session);
    }
}
