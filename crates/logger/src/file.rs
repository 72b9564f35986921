//! Daily file sink for high-severity lines.
//!
//! Lines land in `<log_dir>/<YYYY>/<YYYY>-<MM>/<YYYY>-<MM>-<DD>.log`. The
//! directory tree is created lazily and appends go out as a single write
//! in append mode, so concurrent loggers in one process cannot interleave
//! partial lines.

use crate::config;
use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path of the daily log file for `date` under `dir`.
pub fn daily_path(dir: &Path, date: NaiveDate) -> PathBuf {
    let (year, month, day) = (date.year(), date.month(), date.day());
    dir.join(format!("{year:04}"))
        .join(format!("{year:04}-{month:02}"))
        .join(format!("{year:04}-{month:02}-{day:02}.log"))
}

/// Append `line` to today's log file, creating the directory tree on first
/// use. No-op when file logging is disabled.
pub fn append(line: &str) -> Result<()> {
    let cfg = config::snapshot();
    if !cfg.file_logging {
        return Ok(());
    }
    let path = daily_path(&cfg.log_dir, chrono::Local::now().date_naive());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    file.write_all(format!("{line}\n").as_bytes())?;
    Ok(())
}
