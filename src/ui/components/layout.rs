use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::cell_edit::CellEdit;
use super::fatal_error::FatalError;
use super::footer::Footer;
use super::query::Query;
use super::row_detail::RowDetail;
use super::table_data::TableData;
use super::table_list::TableList;
use crate::app::state::AppState;
use crate::app::view_state::ViewState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        if let Some(message) = &state.fatal_error {
            FatalError::render(frame, area, message);
            return;
        }

        let [main_area, footer_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(Footer::height(state)),
        ])
        .areas(area);

        let session = &state.session;
        let caret = state.cursor_visible;
        match &state.view {
            ViewState::TableList(v) => TableList::render(frame, main_area, session, v, caret),
            ViewState::TableData(v) => TableData::render(frame, main_area, session, v, caret),
            ViewState::RowDetail(v) => RowDetail::render(frame, main_area, session, v),
            ViewState::CellEdit(v) => CellEdit::render(frame, main_area, session, v, caret),
            ViewState::Query(v) => Query::render(frame, main_area, session, v, caret),
        }

        Footer::render(frame, footer_area, state);
    }
}
