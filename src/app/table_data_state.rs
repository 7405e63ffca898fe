use std::ops::Range;

use crate::goto_sequence::GotoSequence;
use crate::pagination::{grid_visible_count, scroll_window};
use crate::session::Session;
use crate::text_input::TextInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDataState {
    /// Index into the session's filtered rows.
    pub selected_row: usize,
    pub search: TextInput,
    pub searching: bool,
    pub goto: GotoSequence,
}

impl TableDataState {
    pub fn new(session: &Session, selected_row: usize) -> Self {
        let mut state = Self {
            selected_row,
            search: TextInput::new(session.row_filter.clone()),
            ..Self::default()
        };
        state.clamp_selection(session);
        state
    }

    pub fn clamp_selection(&mut self, session: &Session) {
        let len = session.filtered_rows.len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    pub fn visible_range(&self, session: &Session) -> Range<usize> {
        scroll_window(
            self.selected_row,
            session.filtered_rows.len(),
            grid_visible_count(session.viewport_height),
        )
    }
}
