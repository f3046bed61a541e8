//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ctrl+C: leave immediately, from any mode.
    Interrupt,
    Quit,
    Shorter,
    Longer,
    /// Start typing a length, optionally with its first character.
    BeginEdit(Option<char>),
    Edit(EditKey),
    ToggleDigits,
    ToggleSymbols,
    Generate,
    Copy,
    Save,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
    Commit,
    Cancel,
}

/// Map a key press to an action. Releases and repeats-as-release (Windows)
/// are ignored.
pub fn action_for(key: &KeyEvent, editing: bool) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Interrupt);
    }

    if editing {
        return edit_key(key.code, ctrl).map(Action::Edit);
    }

    if ctrl {
        return None;
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Action::Shorter,
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Action::Longer,
        KeyCode::Char('l') => Action::BeginEdit(None),
        KeyCode::Char(c) if c.is_ascii_digit() => Action::BeginEdit(Some(c)),
        KeyCode::Char('d') => Action::ToggleDigits,
        KeyCode::Char('s') => Action::ToggleSymbols,
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Action::Generate,
        KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('w') => Action::Save,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        _ => return None,
    };
    Some(action)
}

fn edit_key(code: KeyCode, ctrl: bool) -> Option<EditKey> {
    let key = match code {
        KeyCode::Char('q') if ctrl => EditKey::Cancel,
        KeyCode::Char('u') if ctrl => EditKey::Clear,
        _ if ctrl => return None,
        KeyCode::Esc => EditKey::Cancel,
        KeyCode::Enter => EditKey::Commit,
        KeyCode::Backspace => EditKey::Backspace,
        KeyCode::Delete => EditKey::Delete,
        KeyCode::Left => EditKey::Left,
        KeyCode::Right => EditKey::Right,
        KeyCode::Home => EditKey::Home,
        KeyCode::End => EditKey::End,
        KeyCode::Char(c) => EditKey::Insert(c),
        _ => return None,
    };
    Some(key)
}
