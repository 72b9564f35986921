//! Level-colored console logging with caller context, hierarchical trace
//! chains, per-instance timers, and daily error files.
//!
//! Every log line carries the source location and enclosing function of
//! its caller, resolved from the live call stack at the moment of the
//! call. Loggers derive children that extend a `" -> "`-joined prefix
//! chain and, when asked, record a trace chain of creation sites that is
//! replayed with each message. Lines at ERROR or FATAL severity are
//! mirrored as plain text to a daily file under a
//! `<dir>/<year>/<year>-<month>/` tree.
//!
//! ```no_run
//! use lantern_logger::{Level, Logger, config};
//!
//! config::set_min_level(Level::Debug);
//!
//! let root = Logger::new().with_prefix("api");
//! root.info("listening on :8080");
//!
//! let worker = root.child(Some("worker"), true);
//! worker.time_start("startup");
//! worker.debug("warming caches");
//! worker.time_end("startup");
//! worker.error("upstream unreachable");
//! ```

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod caller;
pub mod config;
mod error;
pub mod file;
mod level;
mod logger;
mod style;
mod trace;

#[cfg(feature = "log-compat")]
pub mod compat;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use caller::CallerInfo;
pub use error::{Error, Result};
pub use level::Level;
pub use logger::{Console, Logger};
pub use trace::TraceLink;
