//! Centralized keybinding definitions.
//! Single source of truth for the footer hints and the full help listing.

use crate::action::Action;
use crate::query_state::QueryFocus;
use crate::text_input::TextEdit;
use crate::view_state::ViewState;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for the footer (e.g., "j/k")
    pub key_short: &'static str,
    /// Display key for full help (e.g., "j / ↓")
    pub key: &'static str,
    /// Short description for the footer
    pub desc_short: &'static str,
    /// Full description for help
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

const fn binding(
    key_short: &'static str,
    key: &'static str,
    desc_short: &'static str,
    description: &'static str,
    action: Action,
) -> KeyBinding {
    KeyBinding {
        key_short,
        key,
        desc_short,
        description,
        action,
    }
}

// =============================================================================
// Global
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    binding("^G", "Ctrl+G", "Help", "Toggle full help", Action::ToggleHelp),
    binding("^C", "Ctrl+C", "Quit", "Quit from any screen", Action::Quit),
];

// =============================================================================
// Per-screen keys (Normal input)
// =============================================================================

pub const TABLE_LIST_KEYS: &[KeyBinding] = &[
    binding("j/k", "j / ↓, k / ↑", "Move", "Select next / previous table", Action::SelectNext),
    binding("h/l", "h / ←, l / →", "Page", "Previous / next page of tables", Action::PageNext),
    binding("gg/G", "g g, G", "Top/Bottom", "Jump to first / last table", Action::SelectLast),
    binding("Enter", "Enter", "Open", "Browse the selected table", Action::Confirm),
    binding("/", "/", "Search", "Filter table names", Action::EnterSearch),
    binding("Esc", "Esc", "Clear", "Clear the table filter", Action::Escape),
    binding("s", "s", "SQL", "Open SQL mode", Action::EnterSqlMode),
    binding("r", "r", "Refresh", "Reload the table list", Action::Refresh),
];

pub const TABLE_DATA_KEYS: &[KeyBinding] = &[
    binding("j/k", "j / ↓, k / ↑", "Move", "Select next / previous row", Action::SelectNext),
    binding("h/l", "h / ←, l / →", "Page", "Previous / next page of rows", Action::PageNext),
    binding("gg/G", "g g, G", "Top/Bottom", "Jump to first / last page", Action::SelectLast),
    binding("Enter", "Enter", "Row", "Show row details", Action::Confirm),
    binding("/", "/", "Search", "Filter rows on this page", Action::EnterSearch),
    binding("s", "s", "SQL", "Open SQL mode", Action::EnterSqlMode),
    binding("r", "r", "Refresh", "Reload this page", Action::Refresh),
    binding("Esc/q", "Esc, q", "Back", "Clear filter or return to tables", Action::Back),
];

pub const ROW_DETAIL_KEYS: &[KeyBinding] = &[
    binding("j/k", "j / ↓, k / ↑", "Move", "Select next / previous column", Action::SelectNext),
    binding("gg/G", "g g, G", "Top/Bottom", "Jump to first / last column", Action::SelectLast),
    binding("Enter", "Enter", "Edit", "Edit the selected cell", Action::Confirm),
    binding("Esc/q", "Esc, q", "Back", "Return to the grid", Action::Back),
];

pub const QUERY_RESULT_KEYS: &[KeyBinding] = &[
    binding("j/k", "j / ↓, k / ↑", "Move", "Select next / previous result row", Action::SelectNext),
    binding("gg/G", "g g, G", "Top/Bottom", "Jump to first / last row", Action::SelectLast),
    binding("Enter", "Enter", "Row", "Show row details", Action::Confirm),
    binding("i", "i", "Edit query", "Focus the query input", Action::FocusQueryInput),
    binding("Esc/q", "Esc, q", "Back", "Return to tables", Action::Back),
];

// =============================================================================
// Text entry
// =============================================================================

pub const SEARCH_KEYS: &[KeyBinding] = &[
    binding("type", "any character", "Filter", "Refine the filter as you type", Action::None),
    binding("Enter/Esc", "Enter, Esc", "Done", "Leave search, keep the filter", Action::Confirm),
];

pub const CELL_EDIT_KEYS: &[KeyBinding] = &[
    binding("Enter", "Enter", "Save", "Write the new value", Action::Confirm),
    binding("Esc", "Esc", "Cancel", "Discard the edit", Action::Escape),
    binding("^W", "Ctrl+W, Alt+Backspace", "Del word", "Delete the word before the caret", Action::TextEdit(TextEdit::DeleteWordBackward)),
    binding("^U/^K", "Ctrl+U, Ctrl+K", "Kill", "Delete to start / end of line", Action::TextEdit(TextEdit::DeleteToStart)),
];

pub const QUERY_INPUT_KEYS: &[KeyBinding] = &[
    binding("Enter", "Enter", "Run", "Execute the query", Action::Confirm),
    binding("Esc", "Esc", "Back", "Return to tables", Action::Escape),
    binding("^←/^→", "Ctrl+← / Ctrl+→, Alt+b / Alt+f", "Word", "Move by word", Action::TextEdit(TextEdit::WordLeft)),
    binding("^A/^E", "Home / Ctrl+A, End / Ctrl+E", "Line", "Move to start / end", Action::TextEdit(TextEdit::Home)),
];

/// Bindings for the keys the current view accepts.
pub fn bindings_for(view: &ViewState) -> &'static [KeyBinding] {
    match view {
        ViewState::TableList(v) if v.searching => SEARCH_KEYS,
        ViewState::TableList(_) => TABLE_LIST_KEYS,
        ViewState::TableData(v) if v.searching => SEARCH_KEYS,
        ViewState::TableData(_) => TABLE_DATA_KEYS,
        ViewState::RowDetail(_) => ROW_DETAIL_KEYS,
        ViewState::CellEdit(_) => CELL_EDIT_KEYS,
        ViewState::Query(v) if v.focus == QueryFocus::Input => QUERY_INPUT_KEYS,
        ViewState::Query(_) => QUERY_RESULT_KEYS,
    }
}
