//! Widget state and action handling, independent of the terminal.

use std::path::PathBuf;

use log::debug;
use rand::Rng;

use super::input::LineEditor;
use super::{Action, EditKey};
use crate::clipboard::Clipboard;
use crate::controller::{Controller, Status};
use crate::settings::Settings;
use crate::source::{Rand, SourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Widget<C, R = Rand> {
    pub(super) controller: Controller<R>,
    pub(super) editor: Option<LineEditor>,
    pub(super) show_help: bool,
    pub(super) source: SourceKind,
    clipboard: C,
    settings: Settings,
    settings_path: Option<PathBuf>,
}

impl<C: Clipboard, R: Rng> Widget<C, R> {
    pub fn new(
        controller: Controller<R>,
        clipboard: C,
        settings: Settings,
        settings_path: Option<PathBuf>,
        source: SourceKind,
    ) -> Self {
        Self {
            controller,
            editor: None,
            show_help: false,
            source,
            clipboard,
            settings,
            settings_path,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn handle(&mut self, action: Action) -> Flow {
        if action == Action::Interrupt {
            return Flow::Quit;
        }
        if self.show_help {
            self.show_help = false;
            return Flow::Continue;
        }

        match action {
            Action::Interrupt | Action::Quit => return Flow::Quit,
            Action::Shorter => self.controller.step_length(-1),
            Action::Longer => self.controller.step_length(1),
            Action::BeginEdit(first) => {
                let editor = match first {
                    Some(c) => LineEditor::new(&c.to_string()),
                    None => LineEditor::new(&self.controller.config().length.to_string()),
                };
                self.editor = Some(editor);
            }
            Action::Edit(key) => self.edit(key),
            Action::ToggleDigits => self.controller.toggle_digits(),
            Action::ToggleSymbols => self.controller.toggle_symbols(),
            Action::Generate => self.controller.regenerate(),
            Action::Copy => {
                if let Err(e) = self.controller.copy_to(&mut self.clipboard) {
                    debug!("copy failed: {e}");
                }
            }
            Action::Save => self.save(),
            Action::Help => self.show_help = true,
        }
        Flow::Continue
    }

    fn edit(&mut self, key: EditKey) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match key {
            EditKey::Commit => {
                let text = editor.text();
                self.editor = None;
                if let Err(e) = self.controller.set_length_input(&text) {
                    debug!("length input rejected: {e}");
                }
            }
            EditKey::Cancel => self.editor = None,
            other => editor.apply(other),
        }
    }

    fn save(&mut self) {
        self.settings.apply(self.controller.config());
        self.settings.source = self.source;

        let status = match &self.settings_path {
            Some(path) => match self.settings.save_to(path) {
                Ok(()) => Status::Saved(path.display().to_string()),
                Err(e) => Status::SaveFailed(e.to_string()),
            },
            None => Status::SaveFailed(crate::error::Error::NoConfigDir.to_string()),
        };
        self.controller.set_status(status);
    }
}
