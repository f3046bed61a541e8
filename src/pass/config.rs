//! Generation configuration and its UI bounds.

use std::num::IntErrorKind;

use crate::error::{Error, Result};

/// Snapshot of the user's choices for one generation call.
///
/// The generator accepts any length; the `[MIN_LENGTH, MAX_LENGTH]` bound is
/// applied by the controller and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 20;
    pub const DEFAULT_LENGTH: usize = 8;

    pub fn clamp_length(length: usize) -> usize {
        length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    /// Same config with the length pulled into the UI bounds.
    pub fn clamped(self) -> Self {
        Self {
            length: Self::clamp_length(self.length),
            ..self
        }
    }

    /// Parse a length typed by the user.
    ///
    /// Whole numbers are clamped, including ones too large for `usize`.
    /// Anything else, negative numbers included, is rejected.
    pub fn parse_length(raw: &str) -> Result<usize> {
        let trimmed = raw.trim();
        match trimmed.parse::<usize>() {
            Ok(n) => Ok(Self::clamp_length(n)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Self::MAX_LENGTH),
            Err(_) => Err(Error::InvalidLength(trimmed.to_string())),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_digits: false,
            include_symbols: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_widget_start_state() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 8);
        assert!(!config.include_digits);
        assert!(!config.include_symbols);
    }

    #[test]
    fn clamp_pulls_into_bounds() {
        assert_eq!(GenerationConfig::clamp_length(0), 4);
        assert_eq!(GenerationConfig::clamp_length(3), 4);
        assert_eq!(GenerationConfig::clamp_length(4), 4);
        assert_eq!(GenerationConfig::clamp_length(13), 13);
        assert_eq!(GenerationConfig::clamp_length(20), 20);
        assert_eq!(GenerationConfig::clamp_length(74), 20);

        let config = GenerationConfig {
            length: 100,
            include_digits: true,
            include_symbols: false,
        }
        .clamped();
        assert_eq!(config.length, 20);
        assert!(config.include_digits);
    }

    #[test]
    fn parse_length_accepts_whole_numbers() {
        assert_eq!(GenerationConfig::parse_length("12").unwrap(), 12);
        assert_eq!(GenerationConfig::parse_length(" 7 ").unwrap(), 7);
        assert_eq!(GenerationConfig::parse_length("2").unwrap(), 4);
        assert_eq!(GenerationConfig::parse_length("99").unwrap(), 20);
        assert_eq!(
            GenerationConfig::parse_length("999999999999999999999999999").unwrap(),
            20
        );
    }

    #[test]
    fn parse_length_rejects_non_numeric() {
        for raw in ["", "abc", "-3", "4.5", "1e3"] {
            match GenerationConfig::parse_length(raw) {
                Err(Error::InvalidLength(s)) => assert_eq!(s, raw.trim()),
                other => panic!("expected InvalidLength for {raw:?}, got {other:?}"),
            }
        }
    }
}
