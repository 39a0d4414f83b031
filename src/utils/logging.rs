//! File logging for navi.
//!
//! The terminal belongs to the UI while navi runs, so log records go to a file:
//! `$NAVI_LOG` if set, otherwise `<cache dir>/navi/navi.log`.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use std::fs::{self, File};
use std::path::PathBuf;

/// Resolves where the log file lives.
pub fn log_path() -> PathBuf {
    if let Ok(path) = std::env::var("NAVI_LOG") {
        return PathBuf::from(path);
    }
    dirs::cache_dir()
        .map(|dir| dir.join("navi").join("navi.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("navi.log"))
}

/// Installs the global file logger. Failing to open the file just leaves logging off.
pub fn init(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let path = log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
