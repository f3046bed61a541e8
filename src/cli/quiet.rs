//! Global quiet mode state for CLI.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and confirmations; errors and passwords still print.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdout goes to a terminal rather than a pipe or file.
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}
