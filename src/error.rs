//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid password length: {0:?} (expected a whole number)")]
    InvalidLength(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard write rejected: {0}")]
    ClipboardRejected(String),

    #[error("Refusing to copy {count} passwords to the clipboard (at most {max}); print them instead")]
    TooManyForClipboard { count: u64, max: u64 },

    #[error("Settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Settings file {} is malformed: {source}", path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No configuration directory available on this system")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
