//! Runtime configuration: listen address and filesystem layout.
//!
//! The application keeps everything it writes under one data directory:
//! the SQLite database, uploaded templates, and generated exports. The
//! directory defaults to `./data` and can be moved with
//! `WEEKLY_REPORT_DATA_DIR`.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Address the HTTP server binds to.
pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 8080;

const DATA_DIR_ENV: &str = "WEEKLY_REPORT_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";
const DB_FILE: &str = "weekly_reports.sqlite";

/// Directory holding the database, uploaded templates and generated
/// exports.
pub fn data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Path of the SQLite database file.
pub fn db_path() -> PathBuf {
    data_dir().join(DB_FILE)
}

/// Create the data directory if it does not exist yet.
pub fn ensure_layout() -> io::Result<()> {
    fs::create_dir_all(data_dir())
}
