//! Single-line editor used for typing a password length.

use crate::terminal::{RESET, REVERSE};

use super::EditKey;

const MAX_INPUT: usize = 12;

/// Edit buffer with a cursor. Accepts any character; validation happens when
/// the value is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buf: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let buf: Vec<char> = initial.chars().take(MAX_INPUT).collect();
        let cursor = buf.len();
        Self { buf, cursor }
    }

    pub fn text(&self) -> String {
        self.buf.iter().collect()
    }

    /// Apply an editing key. Commit and cancel are the caller's business.
    pub fn apply(&mut self, key: EditKey) {
        match key {
            EditKey::Insert(c) => {
                if self.buf.len() < MAX_INPUT && !c.is_control() {
                    self.buf.insert(self.cursor, c);
                    self.cursor += 1;
                }
            }
            EditKey::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buf.remove(self.cursor);
                }
            }
            EditKey::Delete => {
                if self.cursor < self.buf.len() {
                    self.buf.remove(self.cursor);
                }
            }
            EditKey::Left => self.cursor = self.cursor.saturating_sub(1),
            EditKey::Right => self.cursor = (self.cursor + 1).min(self.buf.len()),
            EditKey::Home => self.cursor = 0,
            EditKey::End => self.cursor = self.buf.len(),
            EditKey::Clear => {
                self.buf.clear();
                self.cursor = 0;
            }
            EditKey::Commit | EditKey::Cancel => {}
        }
    }

    /// Buffer with the cursor cell drawn in reverse video.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.buf.iter().enumerate() {
            if i == self.cursor {
                out.push_str(&format!("{REVERSE}{c}{RESET}"));
            } else {
                out.push(*c);
            }
        }
        if self.cursor == self.buf.len() {
            out.push_str(&format!("{REVERSE} {RESET}"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::console_width;

    fn type_str(ed: &mut LineEditor, s: &str) {
        for c in s.chars() {
            ed.apply(EditKey::Insert(c));
        }
    }

    #[test]
    fn starts_at_end_of_initial_value() {
        let mut ed = LineEditor::new("8");
        type_str(&mut ed, "1");
        assert_eq!(ed.text(), "81");
    }

    #[test]
    fn cursor_movement_and_deletion() {
        let mut ed = LineEditor::new("");
        type_str(&mut ed, "125");
        ed.apply(EditKey::Left);
        ed.apply(EditKey::Backspace);
        assert_eq!(ed.text(), "15");
        ed.apply(EditKey::Home);
        ed.apply(EditKey::Delete);
        assert_eq!(ed.text(), "5");
        ed.apply(EditKey::Home);
        type_str(&mut ed, "1");
        assert_eq!(ed.text(), "15");
        ed.apply(EditKey::End);
        ed.apply(EditKey::Right);
        ed.apply(EditKey::Backspace);
        assert_eq!(ed.text(), "1");
    }

    #[test]
    fn edges_are_no_ops() {
        let mut ed = LineEditor::new("");
        ed.apply(EditKey::Backspace);
        ed.apply(EditKey::Delete);
        ed.apply(EditKey::Left);
        assert_eq!(ed, LineEditor::new(""));
    }

    #[test]
    fn clear_and_limit() {
        let mut ed = LineEditor::new("20");
        ed.apply(EditKey::Clear);
        assert_eq!(ed.text(), "");
        type_str(&mut ed, &"9".repeat(40));
        assert_eq!(ed.text().len(), MAX_INPUT);
    }

    #[test]
    fn render_shows_cursor_cell() {
        let ed = LineEditor::new("12");
        assert_eq!(console_width(&ed.render()), 3);
        assert!(ed.render().starts_with("12"));
    }
}
