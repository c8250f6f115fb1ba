//! File logging. The terminal belongs to the UI, so log lines go to
//! `starcard.log` in the data directory.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;

const LOG_FILE: &str = "starcard.log";

/// Install the global subscriber at `level`. Logging stays off when the log
/// file cannot be opened.
pub fn init(level: &str) {
    let Some(dir) = starcard_config::data_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(parse_level(level))
        .try_init();
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
