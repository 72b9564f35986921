//! Process-wide logger configuration.
//!
//! A single configuration object shared by every logger instance. Reads
//! happen on every log call; writes win immediately, with no transactional
//! guarantee between a mutation and a concurrent read.

use crate::Level;
use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockWriteGuard};

/// Snapshot of the process-wide logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Calls below this severity are dropped without side effects.
    pub min_level: Level,
    /// Mirror ERROR/FATAL lines to daily log files.
    pub file_logging: bool,
    /// Root directory of the daily file tree.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            min_level: Level::Info,
            file_logging: true,
            log_dir: cwd.join(".logs"),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

fn write() -> RwLockWriteGuard<'static, Config> {
    CONFIG.write().unwrap_or_else(|e| e.into_inner())
}

/// Current configuration snapshot.
pub fn snapshot() -> Config {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Set the minimum severity admitted by the pipeline.
pub fn set_min_level(level: Level) {
    write().min_level = level;
}

/// Set the minimum severity by name, validated against the level registry.
///
/// Unknown names fail with [`crate::Error::InvalidLevel`] and leave the
/// previous minimum in effect.
pub fn set_min_level_name(name: &str) -> Result<()> {
    let level = name.parse::<Level>()?;
    set_min_level(level);
    Ok(())
}

/// Minimum severity currently admitted.
pub fn min_level() -> Level {
    snapshot().min_level
}

/// Enable or disable mirroring of ERROR/FATAL lines to daily files.
pub fn set_file_logging(enabled: bool) {
    write().file_logging = enabled;
}

/// Whether ERROR/FATAL lines are mirrored to daily files.
pub fn file_logging() -> bool {
    snapshot().file_logging
}

/// Set the root directory for daily log files.
///
/// The path is not checked for existence here; the file sink creates the
/// tree lazily on first append.
pub fn set_log_dir(dir: impl Into<PathBuf>) {
    write().log_dir = dir.into();
}

/// Root directory for daily log files.
pub fn log_dir() -> PathBuf {
    snapshot().log_dir
}
