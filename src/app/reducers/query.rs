//! Query controller: SQL input with caret, and a results grid that leads
//! into row detail.

use crate::action::Action;
use crate::effect::Effect;
use crate::goto_sequence::GotoOutcome;
use crate::navigation::Navigation;
use crate::query_state::{QueryFocus, QueryState};
use crate::session::Session;

use super::helpers::{edit_text, last_index, select_next, select_previous};

pub fn reduce_query(view: &mut QueryState, session: &Session, action: &Action) -> Vec<Effect> {
    match view.focus {
        QueryFocus::Input => reduce_input(view, action),
        QueryFocus::Results => reduce_results(view, session, action),
    }
}

fn reduce_input(view: &mut QueryState, action: &Action) -> Vec<Effect> {
    match action {
        Action::Escape => back_to_tables(),
        Action::Confirm => {
            if view.input.text().trim().is_empty() {
                return vec![];
            }
            vec![Effect::ExecuteQuery {
                query: view.input.text().to_string(),
            }]
        }
        _ => {
            edit_text(&mut view.input, action);
            vec![]
        }
    }
}

fn reduce_results(view: &mut QueryState, session: &Session, action: &Action) -> Vec<Effect> {
    if *action != Action::GotoPrefix {
        view.goto.reset();
    }

    let len = view.result_count(session);
    match action {
        Action::SelectNext => select_next(&mut view.selected_row, len),
        Action::SelectPrevious => select_previous(&mut view.selected_row),
        Action::GotoPrefix => {
            if view.goto.press_g() == GotoOutcome::GotoFirst {
                view.selected_row = 0;
            }
        }
        Action::SelectLast => view.selected_row = last_index(len),
        Action::FocusQueryInput => view.focus = QueryFocus::Input,
        Action::Confirm => {
            if view.selected_row < len {
                return vec![Effect::Navigate(Navigation::RowDetail {
                    row: view.selected_row,
                    col: 0,
                    from_query: true,
                })];
            }
        }
        Action::Escape | Action::Back => return back_to_tables(),
        _ => {}
    }
    vec![]
}

fn back_to_tables() -> Vec<Effect> {
    vec![Effect::Navigate(Navigation::TableList { clear_filter: true })]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_session(count: usize) -> Session {
        let rows = (0..count).map(|i| vec![i.to_string()]).collect();
        let mut session = Session::with_table_page(&["t"], 0, &["id"], rows, count);
        session.is_query_result = true;
        session
    }

    #[test]
    fn blank_query_is_not_executed() {
        let mut view = QueryState::new();
        view.input = crate::text_input::TextInput::new("   ");

        assert!(reduce_query(&mut view, &Session::new(), &Action::Confirm).is_empty());
    }

    #[test]
    fn confirm_executes_typed_text() {
        let mut view = QueryState::new();
        for c in "SELECT 1".chars() {
            reduce_query(&mut view, &Session::new(), &Action::TextInput(c));
        }

        let effects = reduce_query(&mut view, &Session::new(), &Action::Confirm);

        assert_eq!(
            effects,
            vec![Effect::ExecuteQuery {
                query: "SELECT 1".to_string()
            }]
        );
    }

    #[test]
    fn q_types_into_input() {
        let mut view = QueryState::new();

        let effects = reduce_query(&mut view, &Session::new(), &Action::TextInput('q'));

        assert!(effects.is_empty());
        assert_eq!(view.input.text(), "q");
    }

    #[test]
    fn results_confirm_opens_row_detail_from_query() {
        let session = results_session(3);
        let mut view = QueryState {
            focus: QueryFocus::Results,
            show_results: true,
            ..QueryState::new()
        };
        reduce_query(&mut view, &session, &Action::SelectLast);

        let effects = reduce_query(&mut view, &session, &Action::Confirm);

        assert_eq!(
            effects,
            vec![Effect::Navigate(Navigation::RowDetail {
                row: 2,
                col: 0,
                from_query: true
            })]
        );
    }

    #[test]
    fn i_returns_focus_to_input() {
        let session = results_session(1);
        let mut view = QueryState {
            focus: QueryFocus::Results,
            show_results: true,
            ..QueryState::new()
        };

        reduce_query(&mut view, &session, &Action::FocusQueryInput);

        assert_eq!(view.focus, QueryFocus::Input);
    }
}
