//! Shared helper functions for sub-reducers.

use crate::action::Action;
use crate::text_input::TextInput;

/// Applies a text-entry action to `input`. Returns `None` for any other
/// action, otherwise whether the text changed.
pub fn edit_text(input: &mut TextInput, action: &Action) -> Option<bool> {
    match action {
        Action::TextInput(c) => {
            input.insert(*c);
            Some(true)
        }
        Action::TextEdit(edit) => Some(input.apply(*edit)),
        _ => None,
    }
}

pub fn select_next(selected: &mut usize, len: usize) {
    if *selected + 1 < len {
        *selected += 1;
    }
}

pub fn select_previous(selected: &mut usize) {
    *selected = selected.saturating_sub(1);
}

pub fn last_index(len: usize) -> usize {
    len.saturating_sub(1)
}
