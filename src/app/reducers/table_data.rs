//! TableData controller: row selection with scrolling across page
//! boundaries, row search, and the way into row detail.

use crate::action::Action;
use crate::effect::{Effect, PageCursor};
use crate::goto_sequence::GotoOutcome;
use crate::navigation::Navigation;
use crate::session::Session;
use crate::table_data_state::TableDataState;

use super::helpers::{edit_text, last_index, select_previous};

pub fn reduce_table_data(
    view: &mut TableDataState,
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

    let len = session.filtered_rows.len();
    let page = session.current_page;
    let max_page = session.max_page();
    match action {
        Action::SelectNext => {
            if view.selected_row + 1 < len {
                view.selected_row += 1;
            } else if page < max_page {
                return load(page + 1, PageCursor::First);
            }
        }
        Action::SelectPrevious => {
            if view.selected_row > 0 {
                select_previous(&mut view.selected_row);
            } else if page > 0 {
                return load(page - 1, PageCursor::Last);
            }
        }
        Action::PageNext => {
            if page < max_page {
                return load(page + 1, PageCursor::First);
            }
        }
        Action::PagePrevious => {
            if page > 0 {
                return load(page - 1, PageCursor::First);
            }
        }
        Action::GotoPrefix => {
            if view.goto.press_g() == GotoOutcome::GotoFirst {
                if page == 0 {
                    view.selected_row = 0;
                } else {
                    return load(0, PageCursor::First);
                }
            }
        }
        Action::SelectLast => {
            if page == max_page {
                view.selected_row = last_index(len);
            } else {
                return load(max_page, PageCursor::Last);
            }
        }
        Action::Confirm => {
            if view.selected_row < len {
                return vec![Effect::Navigate(Navigation::RowDetail {
                    row: view.selected_row,
                    col: 0,
                    from_query: false,
                })];
            }
        }
        Action::EnterSearch => {
            view.searching = true;
            view.search.clear();
            session.clear_row_filter();
            view.clamp_selection(session);
        }
        Action::Escape => {
            if session.row_filter.is_empty() {
                return back_to_tables();
            }
            view.search.clear();
            session.clear_row_filter();
            view.clamp_selection(session);
        }
        Action::Back => return back_to_tables(),
        Action::Refresh => return load(page, PageCursor::Keep(view.selected_row)),
        Action::EnterSqlMode => return vec![Effect::Navigate(Navigation::Query)],
        _ => {}
    }
    vec![]
}

fn reduce_search(view: &mut TableDataState, session: &mut Session, action: &Action) {
    match action {
        Action::Confirm | Action::Escape => view.searching = false,
        _ => {
            if edit_text(&mut view.search, action) == Some(true) {
                session.filter_rows(view.search.text());
                if view.selected_row >= session.filtered_rows.len() {
                    view.selected_row = 0;
                }
            }
        }
    }
}

fn load(page: usize, cursor: PageCursor) -> Vec<Effect> {
    vec![Effect::LoadPage { page, cursor }]
}

fn back_to_tables() -> Vec<Effect> {
    vec![Effect::Navigate(Navigation::TableList { clear_filter: true })]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(range: std::ops::Range<usize>) -> Vec<Vec<String>> {
        range
            .map(|i| vec![i.to_string(), format!("name{i}")])
            .collect()
    }

    /// Page `page` of a 45-row table.
    fn setup(page: usize) -> (TableDataState, Session) {
        let start = page * 20;
        let end = (start + 20).min(45);
        let mut session = Session::with_table_page(&["items"], 0, &["id", "name"], rows(start..end), 45);
        session.current_page = page;
        (TableDataState::new(&session, 0), session)
    }

    #[test]
    fn next_from_last_row_loads_following_page_at_top() {
        let (mut view, mut session) = setup(0);
        view.selected_row = 19;

        let effects = reduce_table_data(&mut view, &mut session, &Action::SelectNext);

        assert_eq!(
            effects,
            vec![Effect::LoadPage {
                page: 1,
                cursor: PageCursor::First
            }]
        );
    }

    #[test]
    fn previous_from_first_row_loads_previous_page_at_bottom() {
        let (mut view, mut session) = setup(1);

        let effects = reduce_table_data(&mut view, &mut session, &Action::SelectPrevious);

        assert_eq!(
            effects,
            vec![Effect::LoadPage {
                page: 0,
                cursor: PageCursor::Last
            }]
        );
    }

    #[test]
    fn next_on_last_row_of_last_page_stays() {
        let (mut view, mut session) = setup(2);
        view.selected_row = 4;

        let effects = reduce_table_data(&mut view, &mut session, &Action::SelectNext);

        assert!(effects.is_empty());
        assert_eq!(view.selected_row, 4);
    }

    #[test]
    fn g_then_g_on_later_page_loads_first_page() {
        let (mut view, mut session) = setup(2);

        assert!(reduce_table_data(&mut view, &mut session, &Action::GotoPrefix).is_empty());
        let effects = reduce_table_data(&mut view, &mut session, &Action::GotoPrefix);

        assert_eq!(
            effects,
            vec![Effect::LoadPage {
                page: 0,
                cursor: PageCursor::First
            }]
        );
    }

    #[test]
    fn g_then_other_key_does_not_navigate() {
        let (mut view, mut session) = setup(0);
        view.selected_row = 5;

        reduce_table_data(&mut view, &mut session, &Action::GotoPrefix);
        reduce_table_data(&mut view, &mut session, &Action::Unbound);

        assert!(!view.goto.is_pending());
        assert_eq!(view.selected_row, 5);
    }

    #[test]
    fn shift_g_loads_last_page() {
        let (mut view, mut session) = setup(0);

        let effects = reduce_table_data(&mut view, &mut session, &Action::SelectLast);

        assert_eq!(
            effects,
            vec![Effect::LoadPage {
                page: 2,
                cursor: PageCursor::Last
            }]
        );
    }

    #[test]
    fn escape_clears_row_filter_before_leaving() {
        let (mut view, mut session) = setup(0);
        reduce_table_data(&mut view, &mut session, &Action::EnterSearch);
        reduce_table_data(&mut view, &mut session, &Action::TextInput('7'));
        reduce_table_data(&mut view, &mut session, &Action::Escape);
        assert!(!view.searching);
        assert_eq!(session.row_filter, "7");

        let first = reduce_table_data(&mut view, &mut session, &Action::Escape);
        let second = reduce_table_data(&mut view, &mut session, &Action::Escape);

        assert!(first.is_empty());
        assert_eq!(session.filtered_rows.len(), 20);
        assert_eq!(
            second,
            vec![Effect::Navigate(Navigation::TableList { clear_filter: true })]
        );
    }

    #[test]
    fn confirm_opens_row_detail_on_first_column() {
        let (mut view, mut session) = setup(0);
        view.selected_row = 3;

        let effects = reduce_table_data(&mut view, &mut session, &Action::Confirm);

        assert_eq!(
            effects,
            vec![Effect::Navigate(Navigation::RowDetail {
                row: 3,
                col: 0,
                from_query: false
            })]
        );
    }
}
