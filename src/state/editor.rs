//! Schema editor pane: raw text, cursor, and the latest parse outcome

use crate::schema::{parse_schema, FormSchema, SchemaError};

/// Multi-line text editor state. The cursor is a char offset into the
/// text; every mutation is followed by a reparse (no debouncing).
pub struct EditorState {
    text: String,
    cursor: usize,
    /// Outcome of the last parse attempt; None while the text parses
    pub error: Option<SchemaError>,
}

impl EditorState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            error: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Returns true when a character was removed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_at(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.cursor_position();
        if line == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.char_index_at(line - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.cursor_position();
        if line + 1 >= self.line_count() {
            self.cursor = self.char_count();
        } else {
            self.cursor = self.char_index_at(line + 1, col);
        }
    }

    pub fn move_line_start(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.char_index_at(line, 0);
    }

    pub fn move_line_end(&mut self) {
        let (line, _) = self.cursor_position();
        self.cursor = self.char_index_at(line, usize::MAX);
    }

    /// (line, column) of the cursor, both zero-based
    pub fn cursor_position(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Char offset of (line, col), clamping col to the line length
    fn char_index_at(&self, line: usize, col: usize) -> usize {
        let mut idx = 0;
        for (i, l) in self.text.split('\n').enumerate() {
            let len = l.chars().count();
            if i == line {
                return idx + col.min(len);
            }
            idx += len + 1;
        }
        self.char_count()
    }

    /// Re-parse the current text. On success the error flag clears and
    /// the new schema is returned; on failure the error is stored and
    /// the caller keeps whatever schema it had.
    pub fn reparse(&mut self) -> Option<FormSchema> {
        match parse_schema(&self.text) {
            Ok(schema) => {
                self.error = None;
                Some(schema)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
