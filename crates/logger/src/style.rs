//! Per-level terminal style bindings.

use crate::Level;
use termcolor::{Color, ColorSpec};

/// Fixed style binding for a severity.
pub(crate) fn for_level(level: Level) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match level {
        Level::Silly => {
            spec.set_fg(Some(Color::Magenta));
        }
        Level::Trace => {
            spec.set_fg(Some(Color::White)).set_dimmed(true);
        }
        Level::Debug => {
            spec.set_fg(Some(Color::Blue));
        }
        Level::Verbose => {
            spec.set_fg(Some(Color::Cyan)).set_dimmed(true);
        }
        Level::Info => {
            spec.set_fg(Some(Color::Green));
        }
        Level::Time => {
            spec.set_fg(Some(Color::Cyan));
        }
        Level::Http => {
            spec.set_fg(Some(Color::Magenta)).set_dimmed(true);
        }
        Level::Success => {
            spec.set_fg(Some(Color::Green)).set_bold(true);
        }
        Level::Warn => {
            spec.set_fg(Some(Color::Yellow));
        }
        Level::Error => {
            spec.set_fg(Some(Color::Red));
        }
        Level::Fatal => {
            spec.set_fg(Some(Color::White))
                .set_bg(Some(Color::Red))
                .set_bold(true);
        }
    }
    spec
}

/// Accent used for completed timer reports.
pub(crate) fn success() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    spec
}

/// Accent used for the missing-timer sentinel report.
pub(crate) fn failure() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}
