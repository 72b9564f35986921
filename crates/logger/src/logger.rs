//! Logger instances and the per-call emission pipeline.

use crate::caller::CallerInfo;
use crate::error::Result;
use crate::trace::TraceLink;
use crate::{Level, config, file, style};
use chrono::{Local, SecondsFormat};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Shared console sink. Stdout by default; injectable for tests.
pub type Console = Arc<Mutex<dyn WriteColor + Send>>;

/// A console/file logger carrying an optional prefix, its creation site,
/// an optional trace chain, and a private timer registry.
///
/// Every severity method resolves the caller of that specific call, writes
/// one color-wrapped block to the console sink, and returns `&self` so
/// calls can be chained. ERROR and FATAL lines are additionally mirrored
/// as plain text through the daily [file sink](crate::file).
pub struct Logger {
    prefix: Option<String>,
    creation_info: CallerInfo,
    trace_link: Option<TraceLink>,
    timers: Mutex<HashMap<String, Instant>>,
    console: Console,
}

fn stdout_console() -> Console {
    Arc::new(Mutex::new(StandardStream::stdout(ColorChoice::Auto)))
}

impl Logger {
    /// Create a root logger writing to stdout.
    ///
    /// The creation site is resolved here and kept for the lifetime of the
    /// instance.
    pub fn new() -> Self {
        Self {
            prefix: None,
            creation_info: CallerInfo::resolve(),
            trace_link: None,
            timers: Mutex::new(HashMap::new()),
            console: stdout_console(),
        }
    }

    /// Label every line from this logger with `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Replace the console sink. Children derived afterwards share the
    /// replacement.
    pub fn with_writer(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Derive a child logger.
    ///
    /// The child's prefix is `"{parent} -> {segment}"` when both sides
    /// exist; a missing segment keeps the parent's prefix unchanged, with
    /// no separator inserted. When `trace` is set, the child records a
    /// link from the parent's creation site to its own (captured at this
    /// call), extending any chain the parent already carries. Without it
    /// the child has no trace link even when the parent does: trace
    /// opt-in is per-edge, never inherited.
    pub fn child(&self, prefix: Option<&str>, trace: bool) -> Logger {
        let creation_info = CallerInfo::resolve();
        let prefix = match (&self.prefix, prefix) {
            (Some(parent), Some(new)) => Some(format!("{parent} -> {new}")),
            (Some(parent), None) => Some(parent.clone()),
            (None, Some(new)) => Some(new.to_owned()),
            (None, None) => None,
        };
        let trace_link = trace.then(|| TraceLink {
            parent_prefix: self.prefix.clone(),
            parent_created: self.creation_info.clone(),
            child_created: creation_info.clone(),
            inherited: self.trace_link.clone().map(Box::new),
        });
        Logger {
            prefix,
            creation_info,
            trace_link,
            timers: Mutex::new(HashMap::new()),
            console: Arc::clone(&self.console),
        }
    }

    /// Prefix label, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Where this logger was created.
    pub fn creation_info(&self) -> &CallerInfo {
        &self.creation_info
    }

    /// Trace link recorded at `child()` time, when trace was enabled.
    pub fn trace_link(&self) -> Option<&TraceLink> {
        self.trace_link.as_ref()
    }

    /// Log at SILLY.
    pub fn silly(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Silly, None, &message)
    }

    /// Log at TRACE.
    pub fn trace(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Trace, None, &message)
    }

    /// Log at DEBUG.
    pub fn debug(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Debug, None, &message)
    }

    /// Log at VERBOSE.
    pub fn verbose(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Verbose, None, &message)
    }

    /// Log at INFO.
    pub fn info(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Info, None, &message)
    }

    /// Log at TIME.
    pub fn time(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Time, None, &message)
    }

    /// Log at HTTP.
    pub fn http(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Http, None, &message)
    }

    /// Log at SUCCESS.
    pub fn success(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Success, None, &message)
    }

    /// Log at WARN.
    pub fn warn(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Warn, None, &message)
    }

    /// Log at ERROR. Admitted lines are mirrored to the daily file.
    pub fn error(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Error, None, &message)
    }

    /// Log at FATAL. Admitted lines are mirrored to the daily file.
    pub fn fatal(&self, message: impl fmt::Display) -> &Self {
        self.dispatch(Level::Fatal, None, &message)
    }

    /// Log at a caller-chosen level by name.
    ///
    /// Unknown names fail with [`crate::Error::InvalidLevel`] instead of
    /// silently passing the admission gate.
    pub fn log(&self, level: &str, message: impl fmt::Display) -> Result<&Self> {
        let level = level.parse::<Level>()?;
        Ok(self.dispatch(level, None, &message))
    }

    /// Start (or restart) the timer registered under `label`.
    ///
    /// A second start with the same label overwrites the first: last start
    /// wins.
    pub fn time_start(&self, label: impl Into<String>) -> &Self {
        self.timers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(label.into(), Instant::now());
        self
    }

    /// Stop the timer under `label` and report its elapsed milliseconds at
    /// the TIME level.
    ///
    /// Stopping is one-shot: the label is removed on success. A label with
    /// no running timer reports the `-1ms` sentinel instead of failing.
    pub fn time_end(&self, label: &str) -> &Self {
        let started = self
            .timers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(label);
        match started {
            Some(start) => {
                let elapsed = start.elapsed().as_millis();
                self.dispatch(
                    Level::Time,
                    Some(style::success()),
                    &format_args!("{label}: {elapsed}ms"),
                )
            }
            None => self.dispatch(
                Level::Time,
                Some(style::failure()),
                &format_args!("{label}: -1ms"),
            ),
        }
    }

    fn dispatch(&self, level: Level, accent: Option<ColorSpec>, message: &dyn fmt::Display) -> &Self {
        self.dispatch_with(level, accent, CallerInfo::resolve(), message)
    }

    /// The lowest pipeline layer: admission gate, trace rendering, console
    /// block, conditional file mirror. Every entry point lands here, so a
    /// trace chain is rendered regardless of how the call arrived.
    pub(crate) fn dispatch_with(
        &self,
        level: Level,
        accent: Option<ColorSpec>,
        caller: CallerInfo,
        message: &dyn fmt::Display,
    ) -> &Self {
        if level.rank() < config::min_level().rank() {
            return self;
        }
        let now = Local::now();

        let mut fragments: Vec<String> = Vec::new();
        if let Some(link) = &self.trace_link {
            fragments.extend(link.render());
        }
        fragments.push(message.to_string());
        let body = fragments.join(" ");

        if let Ok(mut console) = self.console.lock() {
            let spec = accent.unwrap_or_else(|| style::for_level(level));
            let _ = console.set_color(&spec);
            let _ = write!(
                console,
                "\n{} {:>10} {} {}",
                now.format("%Y-%m-%d %H:%M:%S%.3f"),
                level.name(),
                caller.location,
                caller.function,
            );
            if let Some(prefix) = &self.prefix {
                let _ = write!(console, "\n{prefix}");
            }
            let _ = console.reset();
            let _ = writeln!(console, " {body}");
            let _ = console.flush();
        }

        if matches!(level, Level::Error | Level::Fatal) {
            let mut line = format!(
                "{} | {} | {} | {}",
                now.to_rfc3339_opts(SecondsFormat::Millis, true),
                level.name(),
                caller.location,
                caller.function,
            );
            if let Some(prefix) = &self.prefix {
                line.push_str(" | ");
                line.push_str(prefix);
            }
            line.push_str(" | ");
            line.push_str(&body);
            if let Err(err) = file::append(&line) {
                // Fatal to the file write, never to the caller.
                let _ = writeln!(
                    std::io::stderr(),
                    "lantern-logger: failed to write log file: {err}"
                );
            }
        }

        self
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &self.prefix)
            .field("creation_info", &self.creation_info)
            .field("trace_link", &self.trace_link)
            .finish_non_exhaustive()
    }
}
