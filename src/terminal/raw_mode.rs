//! RAII guard for the widget's screen mode.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;

use crate::exits;

/// Raw mode on the alternate screen with the cursor hidden. Everything is
/// undone on drop, in reverse order.
pub struct ScreenGuard {
    raw: bool,
}

impl ScreenGuard {
    pub fn enter() -> io::Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        exits::set_alt_screen(true);
        let mut guard = Self { raw: false };
        enable_raw_mode()?;
        guard.raw = true;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if self.raw {
            let _ = disable_raw_mode();
        }
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        exits::set_alt_screen(false);
    }
}
