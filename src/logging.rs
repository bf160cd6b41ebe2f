use std::fmt;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Debug,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Open a per-run log file under the user cache directory. Failures
/// leave logging disabled; the tool works without it.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("github-tools")
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("ghtools-{}.log", Local::now().format("%Y%m%d-%H%M%S")));
    *LOG_FILE.lock().unwrap() = Some(log_file);

    log_info("logging initialized");
    Ok(())
}

pub fn log_info(message: &str) {
    log_with_level(Level::Info, message);
}

pub fn log_debug(message: &str) {
    log_with_level(Level::Debug, message);
}

pub fn log_error(message: &str) {
    log_with_level(Level::Error, message);
}

fn log_with_level(level: Level, message: &str) {
    if let Some(log_file) = LOG_FILE.lock().unwrap().as_ref() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }
}
