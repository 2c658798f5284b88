//! Observability for tool discovery.
//!
//! Structured `tracing` spans around index builds, searches and executions,
//! plus lightweight atomic metrics that can be inspected at runtime.

mod metrics;
mod spans;

pub use metrics::{Counter, DiscoveryMetrics, Histogram, MetricsSummary};
pub use spans::{DiscoverySpans, TimedSpan, TracingConfig};

use std::sync::Arc;

/// Observability configuration combining tracing and metrics.
#[derive(Clone, Default)]
pub struct ObservabilityConfig {
    pub tracing: TracingConfig,
}

impl ObservabilityConfig {
    pub fn new() -> Self {
        Self {
            tracing: TracingConfig::new(),
        }
    }

    pub fn tracing(mut self, config: TracingConfig) -> Self {
        self.tracing = config;
        self
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.tracing.service_name = Some(name.into());
        self
    }

    pub fn build_spans(&self) -> DiscoverySpans {
        let spans = DiscoverySpans::new().enabled(self.tracing.enabled);
        match self.tracing.service_name {
            Some(ref name) => spans.catalog(name.clone()),
            None => spans,
        }
    }

    pub fn build_metrics(&self) -> Arc<DiscoveryMetrics> {
        Arc::new(DiscoveryMetrics::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_config() {
        let config = ObservabilityConfig::new().service_name("acme-hris");
        assert_eq!(
            config.tracing.service_name,
            Some("acme-hris".to_string())
        );
        assert_eq!(config.build_metrics().summary().total_searches, 0);
        assert!(config.build_spans().is_enabled());
    }

    #[test]
    fn test_disabled_tracing() {
        let config = ObservabilityConfig::new().tracing(TracingConfig::disabled());
        assert!(!config.build_spans().is_enabled());
    }
}
