//! Settings file persistence.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::Settings;
use crate::error::{Error, Result};

pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("passgen").join("settings.json"))
        .ok_or(Error::NoConfigDir)
}

/// Missing file means defaults. Fields absent from the file keep their
/// default values.
pub fn load(path: &Path) -> Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(Error::Settings {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data).map_err(|source| Error::SettingsFormat {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let io_err = |source| Error::Settings {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut data = serde_json::to_string_pretty(settings).map_err(|source| {
        Error::SettingsFormat {
            path: path.to_path_buf(),
            source,
        }
    })?;
    data.push('\n');

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(data.as_bytes()).map_err(io_err)?;

    debug!("settings written to {}", path.display());
    Ok(())
}
