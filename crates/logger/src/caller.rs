//! Caller-context resolution.
//!
//! Walks the live call stack to find the first frame that does not belong
//! to the logger's own implementation. Resolution can fail (missing debug
//! info, stripped symbols); every failure degrades to a sentinel value
//! instead of surfacing to the caller of a log method.

use std::env;
use std::path::Path;

/// Source location and enclosing function of a log call site.
///
/// Produced fresh on every resolution. The one captured at construction
/// time is held for the lifetime of the instance as its creation info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    /// `"relative/path.rs:line"`, or `"unknown:-1"` when resolution failed.
    pub location: String,
    /// Enclosing function name, `"anonymous"` for closures, `"unknown"`
    /// when resolution failed.
    pub function: String,
}

impl CallerInfo {
    /// Sentinel returned when the stack or its symbols are unavailable.
    pub fn unknown() -> Self {
        Self {
            location: "unknown:-1".to_owned(),
            function: "unknown".to_owned(),
        }
    }

    /// Walk the stack and return the first frame outside the logger
    /// implementation (and the stack-walking machinery itself).
    pub(crate) fn resolve() -> Self {
        let mut found: Option<CallerInfo> = None;
        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                let Some(name) = symbol.name().map(|n| n.to_string()) else {
                    return;
                };
                if is_internal(&name) {
                    return;
                }
                let location = match (symbol.filename(), symbol.lineno()) {
                    (Some(file), Some(line)) => format!("{}:{line}", relative_to_cwd(file)),
                    _ => "unknown:-1".to_owned(),
                };
                found = Some(CallerInfo {
                    location,
                    function: function_name(&name),
                });
            });
            found.is_none()
        });
        found.unwrap_or_else(Self::unknown)
    }
}

/// Frames that are never the caller: this crate, the stack walker, the
/// standard library, and facade plumbing.
fn is_internal(symbol: &str) -> bool {
    const INTERNAL: &[&str] = &[
        "lantern_logger",
        "backtrace::",
        "std::",
        "core::",
        "alloc::",
        "log::",
        "__rust",
        "rust_begin",
    ];
    INTERNAL.iter().any(|prefix| {
        symbol.starts_with(prefix) || (symbol.starts_with('<') && symbol[1..].starts_with(prefix))
    })
}

fn relative_to_cwd(file: &Path) -> String {
    let stripped = env::current_dir()
        .ok()
        .and_then(|cwd| file.strip_prefix(&cwd).ok().map(Path::to_path_buf));
    stripped.as_deref().unwrap_or(file).display().to_string()
}

/// Reduce a demangled symbol to the enclosing function name: the trailing
/// hash is stripped and closures report `anonymous`.
fn function_name(symbol: &str) -> String {
    let mut name = symbol;
    if let Some(idx) = name.rfind("::h") {
        let hash = &name[idx + 3..];
        if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) {
            name = &name[..idx];
        }
    }
    match name.rsplit("::").next() {
        Some("{{closure}}") => "anonymous".to_owned(),
        Some(last) if !last.is_empty() => last.to_owned(),
        _ => "unknown".to_owned(),
    }
}
