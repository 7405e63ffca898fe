use crate::cell_edit_state::CellEditState;
use crate::input_mode::InputMode;
use crate::mode::Mode;
use crate::query_state::{QueryFocus, QueryState};
use crate::row_detail_state::RowDetailState;
use crate::session::Session;
use crate::table_data_state::TableDataState;
use crate::table_list_state::TableListState;

/// The active screen together with its private state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    TableList(TableListState),
    TableData(TableDataState),
    RowDetail(RowDetailState),
    CellEdit(CellEditState),
    Query(QueryState),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::TableList(TableListState::default())
    }
}

impl ViewState {
    pub fn mode(&self) -> Mode {
        match self {
            Self::TableList(_) => Mode::TableList,
            Self::TableData(_) => Mode::TableData,
            Self::RowDetail(_) => Mode::RowDetail,
            Self::CellEdit(_) => Mode::CellEdit,
            Self::Query(_) => Mode::Query,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self {
            Self::TableList(v) if v.searching => InputMode::TextEntry,
            Self::TableData(v) if v.searching => InputMode::TextEntry,
            Self::CellEdit(_) => InputMode::TextEntry,
            Self::Query(v) if v.focus == QueryFocus::Input => InputMode::TextEntry,
            _ => InputMode::Normal,
        }
    }

    pub fn reset_goto(&mut self) {
        match self {
            Self::TableList(v) => v.goto.reset(),
            Self::TableData(v) => v.goto.reset(),
            Self::RowDetail(v) => v.goto.reset(),
            Self::Query(v) => v.goto.reset(),
            Self::CellEdit(_) => {}
        }
    }

    /// Re-derives layout-dependent fields after the viewport changed.
    pub fn refit(&mut self, session: &Session) {
        match self {
            Self::TableList(v) => v.sync_page(session),
            Self::TableData(v) => v.clamp_selection(session),
            Self::Query(v) => v.clamp_selection(session),
            Self::RowDetail(_) | Self::CellEdit(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searching_table_list_takes_text_entry() {
        let view = ViewState::TableList(TableListState {
            searching: true,
            ..Default::default()
        });

        assert_eq!(view.input_mode(), InputMode::TextEntry);
    }

    #[test]
    fn query_results_focus_is_normal_input() {
        let view = ViewState::Query(QueryState {
            focus: QueryFocus::Results,
            ..Default::default()
        });

        assert_eq!(view.input_mode(), InputMode::Normal);
        assert_eq!(view.mode(), Mode::Query);
    }
}
