use crate::text_input::TextInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellEditState {
    pub row: usize,
    pub col: usize,
    pub from_query: bool,
    pub original_value: String,
    pub input: TextInput,
}

impl CellEditState {
    /// Starts editing with the current cell text in the buffer.
    pub fn new(row: usize, col: usize, value: String, from_query: bool) -> Self {
        Self {
            row,
            col,
            from_query,
            input: TextInput::new(value.clone()),
            original_value: value,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.input.text() != self.original_value
    }
}
