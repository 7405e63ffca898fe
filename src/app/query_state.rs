use std::ops::Range;

use crate::goto_sequence::GotoSequence;
use crate::pagination::{grid_visible_count, scroll_window};
use crate::session::Session;
use crate::text_input::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryFocus {
    #[default]
    Input,
    Results,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub input: TextInput,
    pub focus: QueryFocus,
    pub selected_row: usize,
    /// Last execution failure, shown inline until the next run.
    pub error: Option<String>,
    pub show_results: bool,
    pub goto: GotoSequence,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-enters SQL mode after visiting a result row: same text, same
    /// results, results focused.
    pub fn restored(session: &Session, selected_row: usize) -> Self {
        let input = session
            .last_query
            .as_ref()
            .map(|q| TextInput::new(q.input.clone()))
            .unwrap_or_default();
        let mut state = Self {
            input,
            focus: QueryFocus::Results,
            selected_row,
            show_results: session.is_query_result,
            ..Self::default()
        };
        state.clamp_selection(session);
        state
    }

    pub fn result_count(&self, session: &Session) -> usize {
        if self.show_results {
            session.filtered_rows.len()
        } else {
            0
        }
    }

    pub fn clamp_selection(&mut self, session: &Session) {
        let len = self.result_count(session);
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    pub fn visible_range(&self, session: &Session) -> Range<usize> {
        scroll_window(
            self.selected_row,
            self.result_count(session),
            grid_visible_count(session.viewport_height),
        )
    }
}
