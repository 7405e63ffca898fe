//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Touch the store
//!
//! Loading and writing are requested through effects and carried out by
//! the dispatcher.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{
    reduce_cell_edit, reduce_query, reduce_row_detail, reduce_table_data, reduce_table_list,
};
use crate::state::AppState;
use crate::view_state::ViewState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::None => return vec![],
        Action::Quit => {
            state.should_quit = true;
            return vec![];
        }
        Action::Render => {
            state.messages.clear_expired_at(now);
            state.clear_dirty();
            return vec![Effect::Render];
        }
        Action::Tick => {
            state.messages.clear_expired_at(now);
            state.cursor_visible = !state.cursor_visible;
            return vec![];
        }
        Action::Resize(width, height) => {
            state.session.resize(width, height);
            let AppState { session, view, .. } = state;
            view.refit(session);
            return vec![];
        }
        _ => {}
    }

    if state.fatal_error.is_some() {
        return vec![];
    }

    if action == Action::ToggleHelp {
        state.show_full_help = !state.show_full_help;
        state.view.reset_goto();
        return vec![];
    }

    let AppState { session, view, .. } = state;
    match view {
        ViewState::TableList(v) => reduce_table_list(v, session, &action),
        ViewState::TableData(v) => reduce_table_data(v, session, &action),
        ViewState::RowDetail(v) => reduce_row_detail(v, session, &action),
        ViewState::CellEdit(v) => reduce_cell_edit(v, &action),
        ViewState::Query(v) => reduce_query(v, session, &action),
    }
}
