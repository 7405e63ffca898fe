//! CellEdit controller: edits one value, enter saves, escape cancels.

use crate::action::Action;
use crate::cell_edit_state::CellEditState;
use crate::effect::Effect;
use crate::navigation::Navigation;

use super::helpers::edit_text;

pub fn reduce_cell_edit(view: &mut CellEditState, action: &Action) -> Vec<Effect> {
    let back = Effect::Navigate(Navigation::RowDetail {
        row: view.row,
        col: view.col,
        from_query: view.from_query,
    });

    match action {
        Action::Confirm => vec![
            Effect::UpdateCell {
                row: view.row,
                col: view.col,
                value: view.input.text().to_string(),
            },
            back,
        ],
        Action::Escape => vec![back],
        _ => {
            edit_text(&mut view.input, action);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_input::TextEdit;

    #[test]
    fn confirm_saves_then_returns_to_row_detail() {
        let mut view = CellEditState::new(2, 1, "alice".to_string(), true);
        reduce_cell_edit(&mut view, &Action::TextEdit(TextEdit::DeleteWordBackward));
        reduce_cell_edit(&mut view, &Action::TextInput('b'));

        let effects = reduce_cell_edit(&mut view, &Action::Confirm);

        assert_eq!(
            effects,
            vec![
                Effect::UpdateCell {
                    row: 2,
                    col: 1,
                    value: "b".to_string()
                },
                Effect::Navigate(Navigation::RowDetail {
                    row: 2,
                    col: 1,
                    from_query: true
                }),
            ]
        );
    }

    #[test]
    fn escape_discards_edit() {
        let mut view = CellEditState::new(0, 0, "x".to_string(), false);
        reduce_cell_edit(&mut view, &Action::TextInput('y'));

        let effects = reduce_cell_edit(&mut view, &Action::Escape);

        assert_eq!(
            effects,
            vec![Effect::Navigate(Navigation::RowDetail {
                row: 0,
                col: 0,
                from_query: false
            })]
        );
    }
}
