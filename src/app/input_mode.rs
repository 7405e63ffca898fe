/// How raw keys are interpreted, derived from the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key commands (`j`, `k`, `/`, `q` ...).
    #[default]
    Normal,
    /// Printable keys edit a text buffer: search prompt, cell editor, SQL prompt.
    TextEntry,
    /// A fatal error is on screen; only quit is accepted.
    Fatal,
}
