//! File logger for the terminal frontend.
//!
//! stdout belongs to the game screen, so log records go to an append-only
//! file named by `REMEMBER_ME_LOG_PATH`. Without it no logger is installed and
//! the `log` macros in the engine are no-ops.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(current_timestamp_ms(), record);
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// One log line: `<unix ms> <LEVEL> <target>: <message>\n`
pub fn format_record(timestamp_ms: u64, record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}\n",
        timestamp_ms,
        record.level(),
        record.target(),
        record.args()
    )
}

/// Install the file logger when a path is configured.
///
/// Returns whether a logger was installed.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };
    let logger = FileLogger::open(path, LevelFilter::Debug)?;
    log::set_boxed_logger(Box::new(logger)).context("install logger")?;
    log::set_max_level(LevelFilter::Debug);
    Ok(true)
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
