//! Executes effects returned by the reducer: performs Session data
//! operations against the store and installs the next view.
//!
//! Store calls are synchronous, so one action is fully applied before the
//! next event is read.

use std::time::Instant;

use color_eyre::eyre::Result;
use tracing::{error, info, warn};

use crate::action::Action;
use crate::cell_edit_state::CellEditState;
use crate::effect::{Effect, PageCursor};
use crate::navigation::Navigation;
use crate::ports::{Renderer, Store};
use crate::query_rewrite::ensure_primary_key_columns;
use crate::query_state::{QueryFocus, QueryState};
use crate::reducer::reduce;
use crate::row_detail_state::RowDetailState;
use crate::session::{CellUpdate, SessionError};
use crate::state::AppState;
use crate::table_data_state::TableDataState;
use crate::table_list_state::TableListState;
use crate::view_state::ViewState;

pub struct Dispatcher {
    store: Box<dyn Store>,
}

impl Dispatcher {
    pub fn new(store: Box<dyn Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Reduces `action`, runs the resulting effects, and redraws if
    /// anything changed.
    pub fn dispatch(
        &self,
        action: Action,
        state: &mut AppState,
        renderer: &mut dyn Renderer,
        now: Instant,
    ) -> Result<()> {
        let effects = reduce(state, action, now);
        self.run(effects, state, renderer, now)?;

        if state.is_dirty() {
            let effects = reduce(state, Action::Render, now);
            self.run(effects, state, renderer, now)?;
        }
        Ok(())
    }

    pub fn run(
        &self,
        effects: Vec<Effect>,
        state: &mut AppState,
        renderer: &mut dyn Renderer,
        now: Instant,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Render => renderer.draw(state)?,
                other => {
                    self.apply(other, state, now);
                    state.mark_dirty();
                }
            }
        }
        Ok(())
    }

    fn apply(&self, effect: Effect, state: &mut AppState, now: Instant) {
        match effect {
            Effect::Render => {}
            Effect::Navigate(navigation) => self.navigate(navigation, state, now),
            Effect::ReloadTableNames => self.reload_table_names(state, now),
            Effect::LoadPage { page, cursor } => self.load_page(page, cursor, state, now),
            Effect::ExecuteQuery { query } => self.execute_query(query, state, now),
            Effect::UpdateCell { row, col, value } => {
                self.update_cell(row, col, &value, state, now);
            }
        }
    }

    fn navigate(&self, navigation: Navigation, state: &mut AppState, now: Instant) {
        let session = &mut state.session;
        match navigation {
            Navigation::TableList { clear_filter } => {
                let previous = session.active_table().map(str::to_string);
                if clear_filter {
                    session.clear_table_filter();
                }
                let position = previous.and_then(|name| {
                    session
                        .filtered_table_names
                        .iter()
                        .position(|n| *n == name)
                });
                if let Some(index) = position {
                    session.active_table_index = index;
                }
                state.view =
                    ViewState::TableList(TableListState::new(session, position.unwrap_or(0)));
            }
            Navigation::TableData { table_index } => {
                let previous = (session.active_table_index, session.current_page);
                session.active_table_index = table_index;
                session.current_page = 0;
                match session.load_table_data(self.store()) {
                    Ok(()) => {
                        state.view = ViewState::TableData(TableDataState::new(session, 0));
                    }
                    Err(e) => {
                        (session.active_table_index, session.current_page) = previous;
                        report(state, &e, now);
                    }
                }
            }
            Navigation::BackToTableData { row } => {
                state.view = ViewState::TableData(TableDataState::new(session, row));
            }
            Navigation::RowDetail {
                row,
                col,
                from_query,
            } => {
                state.view = ViewState::RowDetail(RowDetailState::new(row, col, from_query));
            }
            Navigation::CellEdit {
                row,
                col,
                from_query,
            } => match session.cell(row, col) {
                Some(value) => {
                    state.view = ViewState::CellEdit(CellEditState::new(
                        row,
                        col,
                        value.to_string(),
                        from_query,
                    ));
                }
                None => {
                    let err = SessionError::InvalidSelection(format!("cell ({row}, {col})"));
                    report(state, &err, now);
                }
            },
            Navigation::Query => state.view = ViewState::Query(QueryState::new()),
            Navigation::ReturnToQuery { row } => {
                state.view = ViewState::Query(QueryState::restored(session, row));
            }
        }
    }

    fn reload_table_names(&self, state: &mut AppState, now: Instant) {
        match state.session.load_table_names(self.store()) {
            Ok(()) => {
                if let ViewState::TableList(view) = &mut state.view {
                    view.clamp_selection(&state.session);
                }
            }
            Err(e) => report(state, &e, now),
        }
    }

    fn load_page(&self, page: usize, cursor: PageCursor, state: &mut AppState, now: Instant) {
        let session = &mut state.session;
        let previous = session.current_page;
        session.current_page = page;
        if let Err(e) = session.load_table_data(self.store()) {
            session.current_page = previous;
            report(state, &e, now);
            return;
        }

        if let ViewState::TableData(view) = &mut state.view {
            view.search.clear();
            view.selected_row = match cursor {
                PageCursor::First => 0,
                PageCursor::Last => session.filtered_rows.len().saturating_sub(1),
                PageCursor::Keep(row) => row,
            };
            view.clamp_selection(session);
        }
    }

    fn execute_query(&self, query: String, state: &mut AppState, now: Instant) {
        let store = self.store();
        let executed = ensure_primary_key_columns(&query, |table| {
            store
                .table_schema(table)
                .map(|schema| schema.primary_keys())
                .unwrap_or_default()
        });
        if executed != query {
            info!(query = %executed, "Added primary key columns to query");
        }

        match store.execute_query(&executed) {
            Ok(result) => {
                info!(
                    rows = result.row_count,
                    elapsed_ms = result.execution_time_ms,
                    "Query executed"
                );
                state.session.set_query_result(query, result);
                if let ViewState::Query(view) = &mut state.view {
                    view.error = None;
                    view.show_results = true;
                    view.focus = QueryFocus::Results;
                    view.selected_row = 0;
                }
            }
            Err(e) if e.is_fatal() => report(state, &SessionError::Store(e), now),
            Err(e) => {
                warn!(error = %e, "Query failed");
                match &mut state.view {
                    ViewState::Query(view) => view.error = Some(e.to_string()),
                    _ => state.messages.set_error_at(e.to_string(), now),
                }
            }
        }
    }

    fn update_cell(&self, row: usize, col: usize, value: &str, state: &mut AppState, now: Instant) {
        match state.session.update_cell(self.store(), row, col, value) {
            Ok(update) if update.affected_rows == 0 => {
                warn!(table = %update.table, column = %update.column, "Update matched no rows");
                state
                    .messages
                    .set_error_at("No matching row; nothing was saved".to_string(), now);
            }
            Ok(update) => state.messages.set_success_at(saved_message(&update), now),
            Err(e) => report(state, &e, now),
        }
    }
}

fn saved_message(update: &CellUpdate) -> String {
    let mut msg = format!("Saved {}.{}", update.table, update.column);
    if let Some(inferred) = &update.inferred
        && inferred.candidates > 1
    {
        msg.push_str(&format!(
            " (table guessed from {} candidates)",
            inferred.candidates
        ));
    }
    msg
}

fn report(state: &mut AppState, err: &SessionError, now: Instant) {
    if err.is_fatal() {
        error!(error = %err, "Database unusable");
        state.fatal_error = Some(err.to_string());
    } else {
        warn!(error = %err, "Operation failed");
        state.messages.set_error_at(err.to_string(), now);
    }
}
