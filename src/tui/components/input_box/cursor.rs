//! Cursor position and horizontal scroll for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll (in
//! display columns). All methods take `buffer: &str` explicitly; the text is
//! owned by `InputBox`.

use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column
    pub scroll: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Place the cursor after the last character.
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    /// Returns `true` if the cursor moved.
    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    /// Returns `true` if the cursor moved.
    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Display column of the cursor, counting wide characters as two.
    pub fn column(&self, buffer: &str) -> u16 {
        let width = buffer[..self.pos].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    /// Adjust `scroll` so the cursor stays inside a viewport `visible` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, visible: u16) {
        if visible == 0 {
            self.scroll = 0;
            return;
        }
        let column = self.column(buffer);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll.saturating_add(visible) {
            self.scroll = column - visible + 1;
        }
    }
}

/// Byte offset of the character boundary before `pos`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the character boundary after `pos`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "aé☕b";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(next_char_boundary(text, 3), 6);
        assert_eq!(prev_char_boundary(text, 6), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }

    #[test]
    fn test_move_at_edges() {
        let mut cursor = CursorState::new();
        assert!(!cursor.move_left("ab"));
        assert!(cursor.move_right("ab"));
        assert!(cursor.move_right("ab"));
        assert!(!cursor.move_right("ab"));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn test_column_counts_wide_chars() {
        let mut cursor = CursorState::new();
        cursor.move_to_end("日本");
        assert_eq!(cursor.column("日本"), 4);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let buffer = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.move_to_end(buffer);
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 7); // columns 7..=10 visible

        cursor.pos = 0;
        cursor.update_scroll(buffer, 4);
        assert_eq!(cursor.scroll, 0);
    }
}
