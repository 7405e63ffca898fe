//! TableList controller: table selection, screen paging, name search.

use crate::action::Action;
use crate::effect::Effect;
use crate::goto_sequence::GotoOutcome;
use crate::navigation::Navigation;
use crate::session::Session;
use crate::table_list_state::TableListState;

use super::helpers::{edit_text, last_index, select_next, select_previous};

pub fn reduce_table_list(
    view: &mut TableListState,
    session: &mut Session,
    action: &Action,
) -> Vec<Effect> {
    if view.searching {
        reduce_search(view, session, action);
        return vec![];
    }

    if *action != Action::GotoPrefix {
        view.goto.reset();
    }

    let len = session.filtered_table_names.len();
    match action {
        Action::SelectPrevious => {
            select_previous(&mut view.selected);
            view.sync_page(session);
        }
        Action::SelectNext => {
            select_next(&mut view.selected, len);
            view.sync_page(session);
        }
        Action::PagePrevious => {
            if view.page > 0 {
                view.page -= 1;
                view.selected = view.page * view.visible_count(session);
            }
        }
        Action::PageNext => {
            if view.page + 1 < view.page_count(session) {
                view.page += 1;
                view.selected = (view.page * view.visible_count(session)).min(last_index(len));
            }
        }
        Action::GotoPrefix => {
            if view.goto.press_g() == GotoOutcome::GotoFirst {
                view.selected = 0;
                view.page = 0;
            }
        }
        Action::SelectLast => {
            view.selected = last_index(len);
            view.sync_page(session);
        }
        Action::Confirm => {
            if view.selected < len {
                return vec![Effect::Navigate(Navigation::TableData {
                    table_index: view.selected,
                })];
            }
        }
        Action::EnterSearch => {
            view.searching = true;
            clear_filter(view, session);
        }
        Action::Escape => {
            if !session.table_filter.is_empty() {
                clear_filter(view, session);
            }
        }
        Action::EnterSqlMode => return vec![Effect::Navigate(Navigation::Query)],
        Action::Refresh => return vec![Effect::ReloadTableNames],
        _ => {}
    }
    vec![]
}

fn reduce_search(view: &mut TableListState, session: &mut Session, action: &Action) {
    match action {
        Action::Confirm => {
            view.searching = false;
            view.sync_page(session);
        }
        Action::Escape => {
            view.searching = false;
            clear_filter(view, session);
        }
        _ => {
            if edit_text(&mut view.search, action) == Some(true) {
                session.filter_tables(view.search.text());
                view.clamp_selection(session);
            }
        }
    }
}

fn clear_filter(view: &mut TableListState, session: &mut Session) {
    view.search.clear();
    session.clear_table_filter();
    view.clamp_selection(session);
}
