/// Single-line text buffer with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text content
    pub content: String,
    /// Cursor position within the text
    pub cursor_position: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: String) -> Self {
        let cursor_position = content.len();
        Self {
            content,
            cursor_position,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn insert_char(&mut self, ch: char) {
        self.content.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position < self.content.len() {
            self.content.remove(self.cursor_position);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor_position = prev;
            self.content.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor_position = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.content[self.cursor_position..].chars().next() {
            self.cursor_position += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Split around the cursor for rendering: (before, under cursor, after)
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let (before, rest) = self.content.split_at(self.cursor_position);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = InputState::new();
        for ch in "calm".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.value(), "calm");

        input.move_cursor_home();
        input.insert_char('C');
        input.delete_char();
        assert_eq!(input.value(), "Calm");

        input.move_cursor_end();
        input.backspace();
        assert_eq!(input.value(), "Cal");
        assert_eq!(input.cursor_position, 3);
    }

    #[test]
    fn test_multibyte_cursor_moves() {
        let mut input = InputState::from_content("día".to_string());
        input.move_cursor_left();
        input.move_cursor_left();
        assert_eq!(input.cursor_position, 1);

        input.move_cursor_right();
        assert_eq!(input.cursor_position, 3);

        input.backspace();
        assert_eq!(input.value(), "da");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = InputState::from_content("zen".to_string());
        input.move_cursor_left();
        assert_eq!(input.split_at_cursor(), ("ze", Some('n'), ""));

        input.move_cursor_end();
        assert_eq!(input.split_at_cursor(), ("zen", None, ""));
    }

    #[test]
    fn test_blank_detection() {
        assert!(InputState::from_content("   ".to_string()).is_blank());
        assert!(!InputState::from_content(" a ".to_string()).is_blank());
    }
}
