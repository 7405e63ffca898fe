use crate::text_input::TextEdit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Tick,
    Resize(u16, u16),
    ToggleHelp,

    // Navigation
    SelectPrevious,
    SelectNext,
    PagePrevious,
    PageNext,
    /// `g`; a second one in a row jumps to the top.
    GotoPrefix,
    SelectLast,

    Confirm,
    Escape,
    /// `q`: go back one screen.
    Back,
    EnterSearch,
    EnterSqlMode,
    Refresh,
    FocusQueryInput,
    /// A key with no meaning in the current mode.
    Unbound,

    // Text entry
    TextInput(char),
    TextEdit(TextEdit),
}
