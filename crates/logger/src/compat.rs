//! Bridge from the `log` crate facade.
//!
//! Routes records emitted through the `log` macros into a [`Logger`], so
//! dependencies that know nothing about this crate still land in the same
//! console and daily files.

use crate::caller::CallerInfo;
use crate::{Level, Logger, config};

/// Adapter implementing [`log::Log`] over a [`Logger`].
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    /// Wrap `logger` for installation via [`init_log_bridge`].
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        map_level(metadata.level()) >= config::min_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // The record already carries its call site; the module path stands
        // in for the function name.
        let caller = match (record.file(), record.line()) {
            (Some(file), Some(line)) => CallerInfo {
                location: format!("{file}:{line}"),
                function: record.target().to_owned(),
            },
            _ => CallerInfo::unknown(),
        };
        self.logger
            .dispatch_with(map_level(record.level()), None, caller, record.args());
    }

    fn flush(&self) {}
}

/// Install `logger` as the process-wide sink for the `log` macros.
///
/// Level filtering stays with this crate's admission gate, so the facade's
/// max level is left wide open.
pub fn init_log_bridge(logger: Logger) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug => Level::Debug,
        log::Level::Trace => Level::Trace,
    }
}
