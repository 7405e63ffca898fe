use crate::goto_sequence::GotoSequence;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDetailState {
    /// Index into the session's filtered rows.
    pub row: usize,
    pub selected_col: usize,
    /// Entered from SQL results rather than a table page.
    pub from_query: bool,
    pub goto: GotoSequence,
}

impl RowDetailState {
    pub fn new(row: usize, selected_col: usize, from_query: bool) -> Self {
        Self {
            row,
            selected_col,
            from_query,
            goto: GotoSequence::default(),
        }
    }
}
