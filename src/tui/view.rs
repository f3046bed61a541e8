//! Screen rendering.

use rand::Rng;

use super::widget::Widget;
use crate::clipboard::Clipboard;
use crate::controller::Status;
use crate::pass::GenerationConfig;
use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, REVERSE};

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn frame<C: Clipboard, R: Rng>(widget: &Widget<C, R>) -> Frame {
    if widget.show_help {
        return help_frame();
    }

    let controller = &widget.controller;
    let config = controller.config();
    let mut frame = Frame::new();

    frame.top("Password Generator").line("");

    let length = match &widget.editor {
        Some(editor) => format!("Password Length: {}", editor.render()),
        None => format!(
            "Password Length: {BOLD}{}{RESET}  {DIM}({}-{}){RESET}",
            config.length,
            GenerationConfig::MIN_LENGTH,
            GenerationConfig::MAX_LENGTH
        ),
    };
    frame
        .line(&format!("  {length}"))
        .line(&format!(
            "  {} Include Numbers",
            checkbox(config.include_digits)
        ))
        .line(&format!(
            "  {} Include Special Characters",
            checkbox(config.include_symbols)
        ))
        .line("")
        .line("  Your Generated Password:");

    // A copied password is shown selected.
    let style = if *controller.status() == Status::Copied {
        REVERSE
    } else {
        BOLD
    };
    frame
        .line(&format!("    {style}{}{RESET}", controller.password().as_str()))
        .line("")
        .rule();

    if widget.editor.is_some() {
        frame.center("Enter: apply | Esc: cancel | Ctrl+U: clear");
    } else {
        frame
            .center("←/→ length | l type | d numbers | s symbols")
            .center("g generate | c copy | w save | h help | q quit");
    }
    frame.bottom();

    frame.plain(&format!("{DIM}Source: {}{RESET}", widget.source.name()));
    frame.plain(&status_line(controller.status()));
    frame
}

fn status_line(status: &Status) -> String {
    match status.message() {
        Some(msg) if status.is_error() => format!("{RED}{msg}{RESET}"),
        Some(msg) => format!("{GREEN}{msg}{RESET}"),
        None => String::new(),
    }
}

fn help_frame() -> Frame {
    let mut frame = Frame::new();
    frame
        .top("Help")
        .center("Live password generator")
        .line("")
        .line("The password is rebuilt whenever the length or a character")
        .line("class changes. Letters are always used; numbers and special")
        .line("characters (!@#$%^&*()_+) are optional.")
        .line("")
        .opt("←/→  -/+", "Shorter / longer password")
        .opt("l or 0-9", "Type a length, then Enter")
        .opt("d", "Toggle numbers")
        .opt("s", "Toggle special characters")
        .opt("g  Enter  Space", "Generate a new password")
        .opt("c  y", "Copy the password to the clipboard")
        .opt("w", "Save length and classes as defaults")
        .opt("h  ?", "Show this help")
        .opt("q  Esc  Ctrl+C", "Quit")
        .line("")
        .center("Press any key to return")
        .bottom();
    frame
}
