//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Box rows are built as strings so a whole
//! screen can be assembled first and written in one go, which keeps redraws
//! flicker-free in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, IsTerminal, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const REVERSE: &str = "\x1b[7m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues). Nothing is
/// written when stdout is a pipe or file.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    let codes = reset_codes(io::stdout().is_terminal());
    if !codes.is_empty() {
        print!("{codes}");
        flush();
    }
}

fn reset_codes(tty: bool) -> &'static str {
    if tty { "\x1b[0m\x1b[?25h" } else { "" }
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// A screenful of box rows, written with `\r\n` so it renders the same in
/// raw and cooked mode.
#[derive(Debug, Default)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ──────────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        let row = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            format!("┌{}{}┐", title_part, "─".repeat(remaining))
        };
        self.rows.push(row);
        self
    }

    /// │ content              │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let padding = INNER_WIDTH.saturating_sub(console_width(content));
        self.rows
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// │       content        │
    pub fn center(&mut self, content: &str) -> &mut Self {
        let total = INNER_WIDTH.saturating_sub(console_width(content));
        let left = total / 2;
        self.rows.push(format!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        ));
        self
    }

    /// Key on the left, description on the right, wrapped to the box.
    pub fn opt(&mut self, key: &str, desc: &str) -> &mut Self {
        const KEY_COL: usize = 18;
        let desc_col = INNER_WIDTH - KEY_COL;

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let key = format!("{:<width$}", key, width = KEY_COL);
        for (i, text) in lines.iter().enumerate() {
            let lead = if i == 0 { key.as_str() } else { "" };
            self.line(&format!("{:<width$}{}", lead, text, width = KEY_COL));
        }
        if lines.is_empty() {
            self.line(&key);
        }
        self
    }

    /// ├──────────────────────┤
    pub fn rule(&mut self) -> &mut Self {
        self.rows.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// └──────────────────────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.rows.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Unboxed row below the frame, for status text.
    pub fn plain(&mut self, content: &str) -> &mut Self {
        self.rows.push(content.to_string());
        self
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            out.write_all(row.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
