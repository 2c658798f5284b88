//! Structured span definitions for tracing.

use std::time::Instant;

use tracing::{Level, Span, field, span};

/// Tracing configuration.
#[derive(Clone)]
pub struct TracingConfig {
    pub service_name: Option<String>,
    pub enabled: bool,
}

impl TracingConfig {
    pub fn new() -> Self {
        Self {
            service_name: None,
            enabled: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for discovery spans.
#[derive(Clone)]
pub struct DiscoverySpans {
    catalog: Option<String>,
    enabled: bool,
}

impl DiscoverySpans {
    pub fn new() -> Self {
        Self {
            catalog: None,
            enabled: true,
        }
    }

    /// Disabled factories hand out `Span::none()` so callers need no branching.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Label attached to every span, typically the provider or account the catalog came from.
    pub fn catalog(mut self, label: impl Into<String>) -> Self {
        self.catalog = Some(label.into());
        self
    }

    fn catalog_label(&self) -> &str {
        self.catalog.as_deref().unwrap_or("default")
    }

    pub fn index_build_span(&self, tool_count: usize) -> TimedSpan {
        if !self.enabled {
            return TimedSpan::new(Span::none());
        }
        TimedSpan::new(span!(
            Level::DEBUG,
            "index.build",
            catalog = self.catalog_label(),
            tool_count = tool_count,
            vocabulary_size = field::Empty,
            duration_ms = field::Empty,
        ))
    }

    pub fn search_span(&self, query: &str, limit: usize, min_score: f64) -> TimedSpan {
        if !self.enabled {
            return TimedSpan::new(Span::none());
        }
        TimedSpan::new(span!(
            Level::INFO,
            "tool.search",
            catalog = self.catalog_label(),
            query_len = query.len(),
            limit = limit,
            min_score = min_score,
            result_count = field::Empty,
            duration_ms = field::Empty,
        ))
    }

    pub fn execute_span(&self, tool_name: &str, dry_run: bool) -> TimedSpan {
        if !self.enabled {
            return TimedSpan::new(Span::none());
        }
        TimedSpan::new(span!(
            Level::INFO,
            "tool.execute",
            catalog = self.catalog_label(),
            tool_name = tool_name,
            dry_run = dry_run,
            is_error = field::Empty,
            duration_ms = field::Empty,
        ))
    }
}

/// Span paired with its start time; records `duration_ms` on finish.
pub struct TimedSpan {
    span: Span,
    start: Instant,
}

impl Default for DiscoverySpans {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedSpan {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            start: Instant::now(),
        }
    }

    pub fn record(&self, field: &str, value: u64) {
        self.span.record(field, value);
    }

    pub fn record_error(&self, is_error: bool) {
        self.span.record("is_error", is_error);
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Records the elapsed time and returns it in milliseconds.
    pub fn finish(self) -> f64 {
        let elapsed = self.elapsed_ms();
        self.span.record("duration_ms", elapsed as u64);
        elapsed
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_span_finish() {
        let spans = DiscoverySpans::new().catalog("hris");
        let span = spans.search_span("list employees", 5, 0.3);
        span.record("result_count", 2);
        assert!(span.finish() >= 0.0);
    }

    #[test]
    fn test_execute_span_records_error() {
        let span = DiscoverySpans::new().execute_span("hris_get_employee", false);
        span.record_error(true);
        span.finish();
    }

    #[test]
    fn test_disabled_spans_are_noop() {
        let spans = DiscoverySpans::new().enabled(false);
        assert!(!spans.is_enabled());
        let span = spans.index_build_span(10);
        assert!(span.span().is_none());
        span.finish();
    }

    #[test]
    fn test_tracing_config() {
        assert!(TracingConfig::new().enabled);
        assert!(!TracingConfig::disabled().enabled);
    }
}
