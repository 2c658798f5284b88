//! Glob-based tool filtering.

use glob::Pattern;

/// Include/exclude patterns over tool names.
///
/// Patterns use shell glob syntax. A leading `!` marks an exclusion, so
/// `["hris_*", "!hris_delete_*"]` keeps every HRIS tool except deletions.
/// With no include patterns every tool not excluded is allowed.
#[derive(Debug, Clone, Default)]
pub struct ToolFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl ToolFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Parses patterns; invalid globs fall back to exact-name matching.
    pub fn new(patterns: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut filter = Self::default();
        for raw in patterns {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            match raw.strip_prefix('!') {
                Some(negated) => filter.exclude.push(compile(negated)),
                None => filter.include.push(compile(raw)),
            }
        }
        filter
    }

    pub fn include(patterns: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self::new(patterns)
    }

    pub fn except(patterns: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            include: Vec::new(),
            exclude: patterns.into_iter().map(|p| compile(p.as_ref())).collect(),
        }
    }

    #[inline]
    pub fn is_allowed(&self, tool_name: &str) -> bool {
        if self.exclude.iter().any(|p| p.matches(tool_name)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches(tool_name))
    }
}

fn compile(pattern: &str) -> Pattern {
    Pattern::new(pattern).unwrap_or_else(|_| {
        tracing::warn!(pattern, "invalid tool filter pattern, matching literally");
        Pattern::new(&Pattern::escape(pattern)).unwrap_or_default()
    })
}
