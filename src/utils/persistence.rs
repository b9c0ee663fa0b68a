//! JSON helpers for files under `~/.frolic/`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = ".frolic";

/// Data directory under a given home directory.
pub fn data_dir_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR_NAME)
}

/// Get the `~/.frolic/` directory path, creating it if needed.
pub fn frolic_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = data_dir_in(&home_dir);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in `~/.frolic/`.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(frolic_dir()?.join(filename))
}

/// Load a JSON file from `~/.frolic/`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_at(&path),
        Err(_) => T::default(),
    }
}

/// Load JSON from an explicit path, returning `T::default()` if missing or invalid.
pub fn load_json_at<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    fs::read_to_string(path)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Save a value as pretty-printed JSON to `~/.frolic/`.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    save_json_at(&save_path(filename)?, data)
}

/// Save a value as pretty-printed JSON to an explicit path.
pub fn save_json_at<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
