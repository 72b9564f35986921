//! Hierarchical creation-site trace chains.

use crate::caller::CallerInfo;

/// One parent→child creation edge, linked toward the oldest ancestor.
///
/// Built at `child()` time and never mutated afterwards. A child cannot be
/// its own ancestor, so traversal always terminates.
#[derive(Debug, Clone)]
pub struct TraceLink {
    /// The parent's prefix at the moment the child was created.
    pub parent_prefix: Option<String>,
    /// Where the parent itself was created.
    pub parent_created: CallerInfo,
    /// Where the child was created.
    pub child_created: CallerInfo,
    /// Link inherited from the parent, when the parent was trace-enabled too.
    pub inherited: Option<Box<TraceLink>>,
}

impl TraceLink {
    /// Render one line per link in the chain, oldest ancestor first.
    pub(crate) fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut link = Some(self);
        while let Some(current) = link {
            lines.push(format!(
                "Trace: Parent created at {}, Child created at {}",
                current.parent_created.location, current.child_created.location
            ));
            link = current.inherited.as_deref();
        }
        lines.reverse();
        lines
    }
}
