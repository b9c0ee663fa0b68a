//! File-backed logger for the terminal UI.
//!
//! The screen owns stdout while the UI runs, so log lines append to
//! `~/.frolic/frolic.log`. Use the crate-level `log!` macro; it is a no-op
//! until [`init_logger`] has been called.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub const LOG_FILE_NAME: &str = "frolic.log";

pub struct Logger {
    path: PathBuf,
    file: Mutex<File>,
}

impl Logger {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let entry = format_entry(&timestamp, file, line, message);
        if let Ok(mut out) = self.file.lock() {
            // Write failures are dropped.
            let _ = writeln!(out, "{}", entry);
        }
    }
}

/// Format one log line: `[timestamp][file:line] message`.
pub fn format_entry(timestamp: &str, file: &str, line: u32, message: &str) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
}

/// Open the log file in the frolic data directory.
pub fn init_logger() -> io::Result<()> {
    let path = super::persistence::save_path(LOG_FILE_NAME)?;
    init_logger_at(&path)
}

/// Open the log file at an explicit path. Later calls are ignored.
pub fn init_logger_at(path: &Path) -> io::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::open(path)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::utils::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
