//! Ordered severity levels.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, totally ordered by rank.
///
/// Filtering compares ranks, never names: a call is admitted when its
/// level's rank is at least the configured minimum. Name lookup is
/// case-insensitive and rejects unknown tokens with
/// [`Error::InvalidLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Rank 0, the lowest severity.
    Silly,
    /// Rank 1.
    Trace,
    /// Rank 2.
    Debug,
    /// Rank 3.
    Verbose,
    /// Rank 4, the default minimum.
    Info,
    /// Rank 5, used by the timer registry.
    Time,
    /// Rank 6.
    Http,
    /// Rank 7.
    Success,
    /// Rank 8.
    Warn,
    /// Rank 9, mirrored to the daily file.
    Error,
    /// Rank 10, the highest severity, mirrored to the daily file.
    Fatal,
}

impl Level {
    /// All levels, in rank order.
    pub const ALL: [Level; 11] = [
        Level::Silly,
        Level::Trace,
        Level::Debug,
        Level::Verbose,
        Level::Info,
        Level::Time,
        Level::Http,
        Level::Success,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Numeric rank used by the admission gate.
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Uppercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Level::Silly => "SILLY",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Verbose => "VERBOSE",
            Level::Info => "INFO",
            Level::Time => "TIME",
            Level::Http => "HTTP",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "silly" => Ok(Level::Silly),
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            "info" => Ok(Level::Info),
            "time" => Ok(Level::Time),
            "http" => Ok(Level::Http),
            "success" => Ok(Level::Success),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(Error::InvalidLevel(name.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_dense_and_ordered() {
        for (expected, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.rank() as usize, expected);
        }
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "loud".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(name) if name == "loud"));
    }

    #[test]
    fn displays_uppercase_names() {
        assert_eq!(Level::Http.to_string(), "HTTP");
        assert_eq!(Level::Silly.to_string(), "SILLY");
    }
}
