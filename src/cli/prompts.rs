//! User-facing messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation line; kept off stdout when that is a pipe so it only ever
/// carries passwords.
fn confirm(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if quiet::stdout_is_tty() {
        println!("{GREEN}{msg}{RESET}");
    } else {
        eprintln!("{msg}");
    }
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Warning: length {requested} is outside 4-20, using {used}"
    ));
}

pub fn settings_load_failed(err: &str) {
    warn(&format!("Failed to load settings, using defaults: {err}"));
}

pub fn settings_saved(path: &str) {
    confirm(&format!("Settings saved \u{2192} {path}"));
}

pub fn clipboard_copied(count: usize) {
    if count == 1 {
        confirm("*** -COPIED TO CLIPBOARD- ***");
    } else {
        confirm(&format!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***"));
    }
}

/// Clipboard failures are always shown, then the passwords go to stdout.
pub fn clipboard_error(err: &str) {
    error(&format!("{err}; printing instead"));
}
