use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::text_input::TextEdit;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state.input_mode()),
    }
}

fn handle_key_event(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::TextEntry => handle_text_entry(key),
        InputMode::Fatal => Action::None,
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('g') => Action::ToggleHelp,
            _ => Action::Unbound,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Left | KeyCode::Char('h') => Action::PagePrevious,
        KeyCode::Right | KeyCode::Char('l') => Action::PageNext,
        KeyCode::Char('g') => Action::GotoPrefix,
        KeyCode::Char('G') => Action::SelectLast,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Escape,
        KeyCode::Char('q') => Action::Back,
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('s') => Action::EnterSqlMode,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('i') => Action::FocusQueryInput,
        _ => Action::Unbound,
    }
}

/// Shared by the search prompts, the cell editor and the query input.
fn handle_text_entry(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Escape,

        KeyCode::Left if ctrl || alt => Action::TextEdit(TextEdit::WordLeft),
        KeyCode::Right if ctrl || alt => Action::TextEdit(TextEdit::WordRight),
        KeyCode::Left => Action::TextEdit(TextEdit::Left),
        KeyCode::Right => Action::TextEdit(TextEdit::Right),
        KeyCode::Home => Action::TextEdit(TextEdit::Home),
        KeyCode::End => Action::TextEdit(TextEdit::End),

        KeyCode::Backspace if alt || ctrl => Action::TextEdit(TextEdit::DeleteWordBackward),
        KeyCode::Backspace => Action::TextEdit(TextEdit::Backspace),
        KeyCode::Delete => Action::TextEdit(TextEdit::Delete),

        KeyCode::Char(c) if ctrl => match c {
            'a' => Action::TextEdit(TextEdit::Home),
            'e' => Action::TextEdit(TextEdit::End),
            'w' => Action::TextEdit(TextEdit::DeleteWordBackward),
            'u' => Action::TextEdit(TextEdit::DeleteToStart),
            'k' => Action::TextEdit(TextEdit::DeleteToEnd),
            _ => Action::None,
        },
        KeyCode::Char(c) if alt => match c {
            'b' => Action::TextEdit(TextEdit::WordLeft),
            'f' => Action::TextEdit(TextEdit::WordRight),
            _ => Action::None,
        },
        KeyCode::Char(c) => Action::TextInput(c),

        _ => Action::None,
    }
}
