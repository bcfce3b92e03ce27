//! Single-line text field for form views.
//!
//! Supports the editing subset the forms need: insert, backspace/delete,
//! cursor movement and paste. Newlines are never stored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars.
    cursor: usize,
    masked: bool,
}

impl TextField {
    /// A field whose contents render as `*`.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = strip_newlines(value);
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_str(&mut self, text: &str) {
        let text = strip_newlines(text);
        if text.is_empty() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert_str(idx, &text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
    }

    /// Applies an editing key. Returns false if the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = 0;
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.value.chars().count();
                true
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen.
    pub fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Terminal column offset of the cursor within the displayed text.
    pub fn cursor_column(&self) -> u16 {
        let width = if self.masked {
            self.cursor
        } else {
            let idx = self.byte_index(self.cursor);
            self.value[..idx].width()
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(idx, _)| idx)
    }
}

fn strip_newlines(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_editing() {
        let mut field = TextField::default();
        for c in "Dnue".chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Backspace));
        field.handle_key(key(KeyCode::Right));
        field.handle_key(key(KeyCode::Char('n')));
        assert_eq!(field.value(), "Dune");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut field = TextField::default();
        field.set_value("ab");
        field.delete();
        assert_eq!(field.value(), "ab");
        field.handle_key(key(KeyCode::Home));
        field.delete();
        assert_eq!(field.value(), "b");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut field = TextField::default();
        field.insert_str("Frank\nHerbert\r\n");
        assert_eq!(field.value(), "FrankHerbert");
        assert_eq!(field.cursor, 12);
    }

    #[test]
    fn test_masked_display() {
        let mut field = TextField::masked();
        field.set_value("hunter2");
        assert_eq!(field.display(), "*******");
        assert_eq!(field.cursor_column(), 7);
    }

    #[test]
    fn test_cursor_column_counts_wide_chars() {
        let mut field = TextField::default();
        field.set_value("本a");
        assert_eq!(field.cursor_column(), 3);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut field = TextField::default();
        field.set_value("abc");
        field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(field.is_empty());
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_unhandled_keys() {
        let mut field = TextField::default();
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
    }
}
