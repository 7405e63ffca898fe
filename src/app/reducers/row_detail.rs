//! RowDetail controller: one field per line, enter edits the field.

use crate::action::Action;
use crate::effect::Effect;
use crate::goto_sequence::GotoOutcome;
use crate::navigation::Navigation;
use crate::row_detail_state::RowDetailState;
use crate::session::Session;

use super::helpers::{last_index, select_next, select_previous};

pub fn reduce_row_detail(
    view: &mut RowDetailState,
    session: &Session,
    action: &Action,
) -> Vec<Effect> {
    if *action != Action::GotoPrefix {
        view.goto.reset();
    }

    let count = session.columns.len();
    match action {
        Action::SelectNext => select_next(&mut view.selected_col, count),
        Action::SelectPrevious => select_previous(&mut view.selected_col),
        Action::GotoPrefix => {
            if view.goto.press_g() == GotoOutcome::GotoFirst {
                view.selected_col = 0;
            }
        }
        Action::SelectLast => view.selected_col = last_index(count),
        Action::Confirm => {
            if session.cell(view.row, view.selected_col).is_some() {
                return vec![Effect::Navigate(Navigation::CellEdit {
                    row: view.row,
                    col: view.selected_col,
                    from_query: view.from_query,
                })];
            }
        }
        Action::Escape | Action::Back => {
            let target = if view.from_query {
                Navigation::ReturnToQuery { row: view.row }
            } else {
                Navigation::BackToTableData { row: view.row }
            };
            return vec![Effect::Navigate(target)];
        }
        _ => {}
    }
    vec![]
}
