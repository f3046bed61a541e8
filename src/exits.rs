//! Exit handling: signal handlers and terminal restore on every exit path.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the widget owns the alternate screen.
static ALT_SCREEN: AtomicBool = AtomicBool::new(false);

pub fn set_alt_screen(active: bool) {
    ALT_SCREEN.store(active, Ordering::SeqCst);
}

/// Bytes that put the tty back: style and cursor always, and the main
/// screen only when the alternate one was entered.
#[cfg(any(unix, test))]
fn restore_sequence(alt_screen: bool) -> &'static [u8] {
    if alt_screen {
        b"\x1b[0m\x1b[?25h\x1b[?1049l"
    } else {
        b"\x1b[0m\x1b[?25h"
    }
}

/// Put the tty back into cooked mode with echo, using termios directly so it
/// is safe to call from an atexit hook.
#[cfg(unix)]
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit: leaves the alternate screen and shows the cursor
/// if the widget was interrupted mid-draw.
#[cfg(unix)]
extern "C" fn cleanup_on_exit() {
    let restore = restore_sequence(ALT_SCREEN.load(Ordering::SeqCst));

    reset_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, restore.as_ptr() as *const libc::c_void, restore.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit does the rest.
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and the atexit hook. Call early in main().
#[cfg(unix)]
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Keep passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_screen_left_alone_unless_entered() {
        let plain = restore_sequence(false);
        assert!(!plain.windows(8).any(|w| w == b"\x1b[?1049l"));
        assert!(plain.ends_with(b"\x1b[?25h"));

        assert!(restore_sequence(true).ends_with(b"\x1b[?1049l"));
    }

    #[test]
    fn flag_tracks_screen_state() {
        set_alt_screen(true);
        assert!(ALT_SCREEN.load(Ordering::SeqCst));
        set_alt_screen(false);
        assert!(!ALT_SCREEN.load(Ordering::SeqCst));
    }
}
