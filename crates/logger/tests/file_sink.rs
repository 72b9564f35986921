//! Daily file mirroring of high-severity lines.

use lantern_logger::test_support::CaptureWriter;
use lantern_logger::{Level, Logger, config, file};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

static CONFIG_LOCK: Mutex<()> = Mutex::new(());

fn lock_config() -> MutexGuard<'static, ()> {
    CONFIG_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn capture_logger() -> Logger {
    Logger::new().with_writer(Arc::new(Mutex::new(CaptureWriter::new())))
}

fn todays_file(dir: &tempfile::TempDir) -> PathBuf {
    file::daily_path(dir.path(), chrono::Local::now().date_naive())
}

#[test]
fn error_lines_land_in_todays_daily_file() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Info);
    config::set_file_logging(true);
    config::set_log_dir(dir.path());

    let logger = capture_logger().with_prefix("api");
    logger.error("disk on fire");

    let written = fs::read_to_string(todays_file(&dir)).expect("daily file written");
    assert!(written.contains(" | ERROR | "));
    assert!(written.contains(" | api | "));
    assert!(written.ends_with("disk on fire\n"));
}

#[test]
fn fatal_lines_are_mirrored_too() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Info);
    config::set_file_logging(true);
    config::set_log_dir(dir.path());

    capture_logger().fatal("going down");

    let written = fs::read_to_string(todays_file(&dir)).expect("daily file written");
    assert!(written.contains(" | FATAL | "));
}

#[test]
fn lower_severities_never_touch_the_file() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Silly);
    config::set_file_logging(true);
    config::set_log_dir(dir.path());

    let logger = capture_logger();
    logger.info("console only").warn("still console only");

    assert!(!todays_file(&dir).exists());
}

#[test]
fn filtered_errors_do_not_reach_the_file() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Fatal);
    config::set_file_logging(true);
    config::set_log_dir(dir.path());

    capture_logger().error("below the gate");

    assert!(!todays_file(&dir).exists());
}

#[test]
fn disabling_file_logging_skips_the_mirror() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Info);
    config::set_file_logging(false);
    config::set_log_dir(dir.path());

    capture_logger().error("console only");

    assert!(!todays_file(&dir).exists());
}

#[test]
fn consecutive_errors_append_one_line_each() {
    let _guard = lock_config();
    let dir = tempfile::tempdir().expect("temp log dir");
    config::set_min_level(Level::Info);
    config::set_file_logging(true);
    config::set_log_dir(dir.path());

    let logger = capture_logger();
    logger.error("first").error("second");

    let written = fs::read_to_string(todays_file(&dir)).expect("daily file written");
    assert_eq!(written.lines().count(), 2);
}
