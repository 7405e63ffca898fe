//! Single-line text buffer shared by the search prompt, the cell editor
//! and the SQL prompt. The caret counts characters, not bytes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Backspace,
    Delete,
    Left,
    Right,
    WordLeft,
    WordRight,
    Home,
    End,
    DeleteToStart,
    DeleteToEnd,
    DeleteWordBackward,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Creates a buffer holding `text` with the caret placed at its end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = char_count(&text);
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Applies an editing command. Returns true when the text changed.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        let len = char_count(&self.text);
        match edit {
            TextEdit::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TextEdit::Right => {
                self.cursor = (self.cursor + 1).min(len);
                false
            }
            TextEdit::WordLeft => {
                self.cursor = word_left(&self.text, self.cursor);
                false
            }
            TextEdit::WordRight => {
                self.cursor = word_right(&self.text, self.cursor);
                false
            }
            TextEdit::Home => {
                self.cursor = 0;
                false
            }
            TextEdit::End => {
                self.cursor = len;
                false
            }
            TextEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.remove_range(self.cursor - 1, self.cursor);
                true
            }
            TextEdit::Delete => {
                if self.cursor >= len {
                    return false;
                }
                self.remove_range(self.cursor, self.cursor + 1);
                true
            }
            TextEdit::DeleteToStart => {
                if self.cursor == 0 {
                    return false;
                }
                self.remove_range(0, self.cursor);
                true
            }
            TextEdit::DeleteToEnd => {
                if self.cursor >= len {
                    return false;
                }
                self.remove_range(self.cursor, len);
                true
            }
            TextEdit::DeleteWordBackward => {
                let start = word_left(&self.text, self.cursor);
                if start == self.cursor {
                    return false;
                }
                self.remove_range(start, self.cursor);
                true
            }
        }
    }

    /// Splits the text around the caret: (before, under caret, after).
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = char_to_byte_index(&self.text, self.cursor);
        let (before, rest) = self.text.split_at(at);
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => (before, Some(c), chars.as_str()),
            None => (before, None, ""),
        }
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start_byte = char_to_byte_index(&self.text, start);
        let end_byte = char_to_byte_index(&self.text, end);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = start;
    }
}

pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(byte_idx, _)| byte_idx)
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Skips whitespace to the left of `pos`, then the word before it.
pub fn word_left(text: &str, pos: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = pos.min(chars.len());
    while pos > 0 && chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }
    pos
}

/// Skips the word under `pos`, then the whitespace after it.
pub fn word_right(text: &str, pos: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = pos.min(chars.len());
    while pos < chars.len() && !chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}
