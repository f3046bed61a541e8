//! Persisted default configuration.
//!
//! Only the generator's knobs are stored. Generated passwords never touch
//! disk.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::GenerationConfig;
use crate::source::SourceKind;

pub use file::default_path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub source: SourceKind,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&default_path()?)
    }

    pub fn save_to_file(&self) -> Result<PathBuf> {
        let path = default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    /// Generation config with the length pulled into the UI bounds.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
        }
        .clamped()
    }

    pub fn apply(&mut self, config: &GenerationConfig) {
        self.length = config.length;
        self.include_digits = config.include_digits;
        self.include_symbols = config.include_symbols;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = GenerationConfig::default();
        Self {
            length: config.length,
            include_digits: config.include_digits,
            include_symbols: config.include_symbols,
            source: SourceKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_generation_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generation_config(), GenerationConfig::default());
        assert_eq!(settings.source, SourceKind::Fast);
    }

    #[test]
    fn stored_length_is_clamped_on_use() {
        let settings = Settings {
            length: 64,
            ..Default::default()
        };
        assert_eq!(settings.generation_config().length, 20);
    }

    #[test]
    fn apply_copies_config() {
        let mut settings = Settings::default();
        settings.apply(&GenerationConfig {
            length: 15,
            include_digits: true,
            include_symbols: true,
        });
        assert_eq!(settings.length, 15);
        assert!(settings.include_digits);
        assert!(settings.include_symbols);
        assert_eq!(settings.source, SourceKind::Fast);
    }
}
