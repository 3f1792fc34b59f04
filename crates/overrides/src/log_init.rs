use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{OverrideError, Result};

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs an append-only file logger as the global `log` backend.
///
/// Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>, level: LevelFilter) -> Result<()> {
    let logger = FileLogger {
        path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger)).map_err(|e| OverrideError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
