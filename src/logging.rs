//! File-backed sink for the `log` facade.
//!
//! The terminal belongs to the TUI while it runs, so log lines go to
//! `$TMPDIR/tuido.log` instead of stderr. Controlled by `TUIDO_LOG`
//! (`error`, `warn`, `info`, `debug`, `trace`); unset or `off` disables it.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level
pub const LOG_ENV: &str = "TUIDO_LOG";

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
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

/// Parse a level name; unknown names disable logging
pub fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("tuido.log")
}

/// Install the file logger if `TUIDO_LOG` asks for it. Failing to open the
/// log file leaves logging disabled rather than breaking the TUI.
pub fn init() {
    let level = std::env::var(LOG_ENV)
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Off);
    if level == LevelFilter::Off {
        return;
    }

    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
    {
        Ok(f) => f,
        Err(_) => return,
    };

    let logger = FileLogger {
        level,
        file: Mutex::new(file),
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
