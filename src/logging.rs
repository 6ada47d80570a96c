use crate::error::ScriptError;
use chrono::Local;
use log::{Level, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug)]
struct FileLogger {
    log_path: PathBuf,
    level: Level,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "[{}] {} {} - {}\n",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
            let log_file = self.log_path.join("log.txt");

            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Send everything logged through the `log` macros to `<log_dir>/log.txt`. Can only be set once.
pub fn init(log_dir: impl Into<PathBuf>, debug_mode: bool) -> Result<(), ScriptError> {
    let log_path = log_dir.into();
    create_dir_all(&log_path)?;

    let level = if debug_mode { Level::Debug } else { Level::Info };
    LOGGER
        .set(FileLogger { log_path, level })
        .map_err(|_| ScriptError::LoggerAlreadySet)?;
    let logger = LOGGER.get().ok_or(ScriptError::LoggerAlreadySet)?;

    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
