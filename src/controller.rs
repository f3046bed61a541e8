//! Live generator state: the current config and the password it produced.
//!
//! Every setter that changes the effective config regenerates before it
//! returns, so the displayed password always matches the displayed config.

use log::debug;
use rand::Rng;

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::{self, GeneratedPassword, GenerationConfig};
use crate::source::Rand;

/// Outcome of the last user action, shown under the password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Copied,
    CopyFailed(String),
    InvalidInput(String),
    Saved(String),
    SaveFailed(String),
}

pub struct Controller<R = Rand> {
    config: GenerationConfig,
    password: GeneratedPassword,
    rng: R,
    status: Status,
}

impl<R: Rng> Controller<R> {
    pub fn new(config: GenerationConfig, mut rng: R) -> Self {
        let config = config.clamped();
        let password = pass::generate(&config, &mut rng);
        Self {
            config,
            password,
            rng,
            status: Status::Idle,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &GeneratedPassword {
        &self.password
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Explicit "Generate": always replaces the password.
    pub fn regenerate(&mut self) {
        self.password = pass::generate(&self.config, &mut self.rng);
        self.status = Status::Idle;
    }

    pub fn set_length(&mut self, length: usize) {
        let length = GenerationConfig::clamp_length(length);
        self.update(GenerationConfig {
            length,
            ..self.config
        });
    }

    /// Apply a length typed as text. On rejection the config is untouched.
    pub fn set_length_input(&mut self, raw: &str) -> Result<()> {
        match GenerationConfig::parse_length(raw) {
            Ok(length) => {
                self.status = Status::Idle;
                self.set_length(length);
                Ok(())
            }
            Err(e) => {
                self.status = Status::InvalidInput(e.to_string());
                Err(e)
            }
        }
    }

    pub fn step_length(&mut self, delta: isize) {
        self.set_length(self.config.length.saturating_add_signed(delta));
    }

    pub fn set_include_digits(&mut self, include: bool) {
        self.update(GenerationConfig {
            include_digits: include,
            ..self.config
        });
    }

    pub fn set_include_symbols(&mut self, include: bool) {
        self.update(GenerationConfig {
            include_symbols: include,
            ..self.config
        });
    }

    pub fn toggle_digits(&mut self) {
        self.set_include_digits(!self.config.include_digits);
    }

    pub fn toggle_symbols(&mut self) {
        self.set_include_symbols(!self.config.include_symbols);
    }

    /// Copy the current password. The result is also recorded in `status`.
    pub fn copy_to<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) -> Result<()> {
        match clipboard.write_text(self.password.as_str()) {
            Ok(()) => {
                self.status = Status::Copied;
                Ok(())
            }
            Err(e) => {
                self.status = Status::CopyFailed(e.to_string());
                Err(e)
            }
        }
    }

    fn update(&mut self, config: GenerationConfig) {
        if config == self.config {
            return;
        }
        debug!("config changed to {:?}, regenerating", config);
        self.config = config;
        self.regenerate();
    }
}

impl Status {
    pub fn message(&self) -> Option<String> {
        match self {
            Status::Idle => None,
            Status::Copied => Some("Copied to clipboard".to_string()),
            Status::CopyFailed(e) => Some(format!("Copy failed: {e}")),
            Status::InvalidInput(e) => Some(e.clone()),
            Status::Saved(path) => Some(format!("Settings saved to {path}")),
            Status::SaveFailed(e) => Some(format!("Save failed: {e}")),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::CopyFailed(_) | Status::InvalidInput(_) | Status::SaveFailed(_)
        )
    }
}
